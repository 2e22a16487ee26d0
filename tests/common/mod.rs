//! Shared test utilities.

#![allow(dead_code)]

use launchform::form::FormReducer;
use launchform::surface::{MemorySurface, RecordingSink};
use launchform::validator::FormValidator;

pub const EMPTY_INPUT: &str = "Oops! Please add your email";
pub const INVALID_FORMAT: &str = "Oops! Please check your email";
pub const SUCCESS: &str = "Thank you! We will notify you when we launch.";

pub type MemoryValidator = FormValidator<MemorySurface, RecordingSink>;

/// Validator over in-memory collaborators with default messages.
pub fn memory_validator() -> MemoryValidator {
    FormValidator::new(
        MemorySurface::default(),
        RecordingSink::default(),
        FormReducer::default(),
    )
}

/// The validity flag must mirror whether error text is showing.
pub fn assert_flag_mirrors_error(validator: &MemoryValidator) {
    let surface = validator.surface();
    assert_eq!(surface.invalid, !surface.error_text.is_empty());
    assert_eq!(validator.state().is_invalid(), surface.invalid);
    assert_eq!(validator.state().error, surface.error_text);
}
