//! Collaborator contracts for the form validator.
//!
//! The validator never renders anything itself. It drives a
//! [`PresentationSurface`] (field text, error text, invalid flag), a
//! [`NotificationSink`] (the blocking success acknowledgment) and the
//! host's [`SubmitEvent`].

mod memory;

pub use memory::{MemorySurface, RecordingSink};

/// Display side of the signup form.
pub trait PresentationSurface {
    /// Replace the inline error text. An empty string hides it.
    fn set_error_text(&mut self, text: &str);

    /// Mark the input as invalid for assistive technology.
    fn set_invalid_flag(&mut self);

    /// Remove the invalid marker from the input.
    fn clear_invalid_flag(&mut self);

    /// Current raw text of the input field.
    fn current_input_text(&self) -> String;

    /// Reset every form field back to empty.
    fn reset_fields(&mut self);
}

/// Receives the success acknowledgment.
///
/// Implementations may block until the user dismisses the message.
pub trait NotificationSink {
    fn notify(&mut self, message: &str);
}

/// The host's submit event.
pub trait SubmitEvent {
    /// Suppress the host's default navigation/reload behavior.
    fn prevent_default(&mut self);
}

/// A submit event with no default behavior of its own.
///
/// Records whether `prevent_default` was called.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlainSubmit {
    pub default_prevented: bool,
}

impl SubmitEvent for PlainSubmit {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

impl<T: PresentationSurface + ?Sized> PresentationSurface for &mut T {
    fn set_error_text(&mut self, text: &str) {
        (**self).set_error_text(text)
    }

    fn set_invalid_flag(&mut self) {
        (**self).set_invalid_flag()
    }

    fn clear_invalid_flag(&mut self) {
        (**self).clear_invalid_flag()
    }

    fn current_input_text(&self) -> String {
        (**self).current_input_text()
    }

    fn reset_fields(&mut self) {
        (**self).reset_fields()
    }
}

impl<T: NotificationSink + ?Sized> NotificationSink for &mut T {
    fn notify(&mut self, message: &str) {
        (**self).notify(message)
    }
}
