//! Input checks for the signup field.

mod email;

pub use email::{is_email_shaped, trim_input, validate_email, Rejection};
