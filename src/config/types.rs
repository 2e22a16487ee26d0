use serde::{Deserialize, Serialize};

use crate::validation::Rejection;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub messages: Messages,
    #[serde(default)]
    pub form: FormSettings,
}

/// User-facing text shown by the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Messages {
    /// Shown when the field is blank after trimming.
    #[serde(default = "default_empty_input")]
    pub empty_input: String,
    /// Shown when the field is not shaped like an address.
    #[serde(default = "default_invalid_format")]
    pub invalid_format: String,
    /// Passed to the notification sink on a successful submit.
    #[serde(default = "default_success")]
    pub success: String,
}

/// Behavior switches for the form host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSettings {
    /// Log accepted addresses at info level (default: true).
    #[serde(default = "default_log_submissions")]
    pub log_submissions: bool,
}

fn default_empty_input() -> String {
    Rejection::EmptyInput.to_string()
}

fn default_invalid_format() -> String {
    Rejection::InvalidFormat.to_string()
}

fn default_success() -> String {
    "Thank you! We will notify you when we launch.".to_string()
}

fn default_log_submissions() -> bool {
    true
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            empty_input: default_empty_input(),
            invalid_format: default_invalid_format(),
            success: default_success(),
        }
    }
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            log_submissions: default_log_submissions(),
        }
    }
}

impl Messages {
    /// Replaces blank messages with the defaults.
    pub fn or_defaults(self) -> Self {
        fn keep_or(text: String, fallback: fn() -> String) -> String {
            if text.trim().is_empty() {
                fallback()
            } else {
                text
            }
        }

        Self {
            empty_input: keep_or(self.empty_input, default_empty_input),
            invalid_format: keep_or(self.invalid_format, default_invalid_format),
            success: keep_or(self.success, default_success),
        }
    }

    /// Text to display for a rejection.
    pub fn for_rejection(&self, rejection: Rejection) -> &str {
        match rejection {
            Rejection::EmptyInput => &self.empty_input,
            Rejection::InvalidFormat => &self.invalid_format,
        }
    }
}
