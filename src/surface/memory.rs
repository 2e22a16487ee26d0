use super::{NotificationSink, PresentationSurface};

/// In-memory presentation surface for headless hosts and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySurface {
    pub input: String,
    pub error_text: String,
    pub invalid: bool,
    /// Number of times `reset_fields` ran.
    pub resets: usize,
}

impl MemorySurface {
    pub fn with_input(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    /// Replace the field text, as a user edit would.
    pub fn type_text(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }
}

impl PresentationSurface for MemorySurface {
    fn set_error_text(&mut self, text: &str) {
        self.error_text.clear();
        self.error_text.push_str(text);
    }

    fn set_invalid_flag(&mut self) {
        self.invalid = true;
    }

    fn clear_invalid_flag(&mut self) {
        self.invalid = false;
    }

    fn current_input_text(&self) -> String {
        self.input.clone()
    }

    fn reset_fields(&mut self) {
        self.input.clear();
        self.resets += 1;
    }
}

/// Notification sink that keeps every message it receives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    pub messages: Vec<String>,
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
