//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (submitting the form, editing the field)
/// - Direct commands from the host (show or clear an error)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: 'static {}
