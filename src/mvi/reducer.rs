//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Result of a single reduction: the next state plus the side effects
/// the caller must perform, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S, E> {
    pub state: S,
    pub effects: Vec<E>,
}

impl<S, E> Transition<S, E> {
    /// A transition that changes nothing outside the state.
    pub fn quiet(state: S) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    pub fn with_effects(state: S, effects: Vec<E>) -> Self {
        Self { state, effects }
    }
}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> (State, Effects).
/// Effects are instructions; performing them is the caller's job.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Side-effect instructions emitted alongside the new state.
    type Effect;

    /// Process an intent and return the new state with its effects.
    fn reduce(
        &self,
        state: Self::State,
        intent: Self::Intent,
    ) -> Transition<Self::State, Self::Effect>;
}
