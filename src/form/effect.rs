/// Side effects requested by the form reducer.
///
/// The validator applies them in the order they are emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    /// Suppress the host's default submit navigation.
    PreventDefault,
    /// Replace the error display text (empty hides it).
    SetErrorText(String),
    SetInvalidFlag,
    ClearInvalidFlag,
    /// Record an accepted address in the log.
    LogSubmission { email: String },
    /// Clear the form's fields back to empty.
    ResetFields,
    /// Hand a message to the notification sink.
    Notify(String),
}
