//! Signup form feature module.
//!
//! Owns the error-message/validity pair and decides what happens on submit
//! and on edit.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Current error text (validity is derived from it)
//! - `intent.rs` - Submit, edit, and direct show/clear commands
//! - `effect.rs` - Instructions for the surface and notification sink
//! - `outcome.rs` - Accepted address or rejection reason for a submit
//! - `reducer.rs` - State transitions (pure, no side effects)

mod effect;
mod intent;
mod outcome;
mod reducer;
mod state;

pub use effect::FormEffect;
pub use intent::FormIntent;
pub use outcome::SubmitOutcome;
pub use reducer::FormReducer;
pub use state::FormState;
