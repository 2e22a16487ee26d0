use crate::mvi::UiState;

/// Error state of the signup field.
///
/// The validity flag is not stored: the field is invalid exactly when
/// `error` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub error: String,
}

impl UiState for FormState {}

impl FormState {
    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    pub fn is_invalid(&self) -> bool {
        !self.error.is_empty()
    }

    pub fn error_message(&self) -> Option<&str> {
        if self.is_invalid() {
            Some(&self.error)
        } else {
            None
        }
    }
}
