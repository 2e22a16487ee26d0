//! Intents for the signup form.

use crate::mvi::Intent;

/// Intents that can be dispatched to the form reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIntent {
    /// The form was submitted with the raw (untrimmed) field text.
    Submit { value: String },

    /// The user edited the field. Clears a stale error, otherwise a no-op.
    InputChanged,

    /// Display `message` as the field error.
    /// An empty message behaves like `ClearError`.
    ShowError { message: String },

    /// Remove any field error.
    ClearError,
}

impl Intent for FormIntent {}
