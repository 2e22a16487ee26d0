//! Imperative shell around the form reducer.
//!
//! Each handler dispatches one [`FormIntent`] (a submit settles one
//! [`SubmitOutcome`]) and applies the returned effects to the injected
//! collaborators, in order.

use tracing::{debug, info};

use crate::form::{FormEffect, FormIntent, FormReducer, FormState, SubmitOutcome};
use crate::mvi::Transition;
use crate::mvi::Reducer;
use crate::surface::{NotificationSink, PresentationSurface, SubmitEvent};

/// Signup form validator bound to a surface and a notification sink.
pub struct FormValidator<S, N> {
    surface: S,
    sink: N,
    reducer: FormReducer,
    state: FormState,
}

impl<S, N> FormValidator<S, N>
where
    S: PresentationSurface,
    N: NotificationSink,
{
    pub fn new(surface: S, sink: N, reducer: FormReducer) -> Self {
        Self {
            surface,
            sink,
            reducer,
            state: FormState::default(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn sink(&self) -> &N {
        &self.sink
    }

    pub fn into_parts(self) -> (S, N) {
        (self.surface, self.sink)
    }

    /// Handles a submit with the field's raw text.
    pub fn handle_submit<E: SubmitEvent + ?Sized>(
        &mut self,
        event: &mut E,
        value: &str,
    ) -> SubmitOutcome {
        let outcome = SubmitOutcome::evaluate(value);
        debug!(?outcome, "Settling form submit");
        let transition = self.reducer.settle(&outcome);
        self.apply(transition, Some(event));
        if let Some(error) = self.state.error_message() {
            debug!(reason = error, "Submission rejected");
        }
        outcome
    }

    /// Handles a submit, reading the value from the surface.
    pub fn submit<E: SubmitEvent + ?Sized>(&mut self, event: &mut E) -> SubmitOutcome {
        let value = self.surface.current_input_text();
        self.handle_submit(event, &value)
    }

    /// Handles an edit of the field.
    pub fn handle_input_change(&mut self) {
        self.dispatch(FormIntent::InputChanged);
    }

    pub fn show_error(&mut self, message: &str) {
        self.dispatch(FormIntent::ShowError {
            message: message.to_string(),
        });
    }

    pub fn clear_error(&mut self) {
        self.dispatch(FormIntent::ClearError);
    }

    fn dispatch(&mut self, intent: FormIntent) {
        debug!(?intent, "Dispatching form intent");
        let state = std::mem::take(&mut self.state);
        let transition = self.reducer.reduce(state, intent);
        self.apply::<dyn SubmitEvent>(transition, None);
    }

    fn apply<E: SubmitEvent + ?Sized>(
        &mut self,
        transition: Transition<FormState, FormEffect>,
        mut event: Option<&mut E>,
    ) {
        self.state = transition.state;

        for effect in transition.effects {
            match effect {
                FormEffect::PreventDefault => {
                    if let Some(event) = event.as_deref_mut() {
                        event.prevent_default();
                    }
                }
                FormEffect::SetErrorText(text) => self.surface.set_error_text(&text),
                FormEffect::SetInvalidFlag => self.surface.set_invalid_flag(),
                FormEffect::ClearInvalidFlag => self.surface.clear_invalid_flag(),
                FormEffect::LogSubmission { email } => {
                    info!(email = %email, "Email submitted successfully");
                }
                FormEffect::ResetFields => self.surface.reset_fields(),
                FormEffect::Notify(message) => self.sink.notify(&message),
            }
        }
    }
}
