use crate::validation::{validate_email, Rejection};

/// Result of checking one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The trimmed address passed both checks.
    Accepted { email: String },
    Rejected(Rejection),
}

impl SubmitOutcome {
    /// Checks the raw field text.
    pub fn evaluate(raw: &str) -> Self {
        match validate_email(raw) {
            Ok(email) => Self::Accepted {
                email: email.to_string(),
            },
            Err(rejection) => Self::Rejected(rejection),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected(rejection) => Some(*rejection),
        }
    }
}
