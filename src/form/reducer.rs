//! Reducer for the signup form.

use crate::config::{Config, Messages};
use crate::mvi::{Reducer, Transition};

use super::effect::FormEffect;
use super::intent::FormIntent;
use super::outcome::SubmitOutcome;
use super::state::FormState;

/// Reducer for signup form transitions.
///
/// Pure function: surface updates, logging and notification are returned
/// as [`FormEffect`]s and performed by the caller.
#[derive(Debug, Clone)]
pub struct FormReducer {
    messages: Messages,
    log_submissions: bool,
}

impl FormReducer {
    /// Blank messages fall back to the defaults, so a rejection always
    /// leaves visible error text.
    pub fn new(messages: Messages, log_submissions: bool) -> Self {
        Self {
            messages: messages.or_defaults(),
            log_submissions,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.messages.clone(), config.form.log_submissions)
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Transition for an already evaluated submission.
    pub fn settle(&self, outcome: &SubmitOutcome) -> Transition<FormState, FormEffect> {
        let email = match outcome {
            SubmitOutcome::Accepted { email } => email,
            SubmitOutcome::Rejected(rejection) => {
                let message = self.messages.for_rejection(*rejection).to_string();
                let mut transition = show(message);
                transition.effects.insert(0, FormEffect::PreventDefault);
                return transition;
            }
        };

        let mut effects = vec![
            FormEffect::PreventDefault,
            FormEffect::SetErrorText(String::new()),
            FormEffect::ClearInvalidFlag,
        ];
        if self.log_submissions {
            effects.push(FormEffect::LogSubmission {
                email: email.clone(),
            });
        }
        effects.push(FormEffect::ResetFields);
        effects.push(FormEffect::Notify(self.messages.success.clone()));

        Transition::with_effects(FormState::default(), effects)
    }
}

impl Default for FormReducer {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

fn show(message: String) -> Transition<FormState, FormEffect> {
    if message.is_empty() {
        return clear();
    }
    Transition::with_effects(
        FormState::with_error(message.clone()),
        vec![FormEffect::SetErrorText(message), FormEffect::SetInvalidFlag],
    )
}

fn clear() -> Transition<FormState, FormEffect> {
    Transition::with_effects(
        FormState::default(),
        vec![
            FormEffect::SetErrorText(String::new()),
            FormEffect::ClearInvalidFlag,
        ],
    )
}

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;
    type Effect = FormEffect;

    fn reduce(&self, state: FormState, intent: FormIntent) -> Transition<FormState, FormEffect> {
        match intent {
            FormIntent::Submit { value } => self.settle(&SubmitOutcome::evaluate(&value)),
            FormIntent::InputChanged => {
                if state.is_invalid() {
                    clear()
                } else {
                    Transition::quiet(state)
                }
            }
            FormIntent::ShowError { message } => show(message),
            FormIntent::ClearError => clear(),
        }
    }
}
