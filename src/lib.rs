//! Email signup form validation for a launch landing page.
//!
//! The validation-and-feedback flow is a pure reducer (`form`) driven by an
//! imperative shell (`validator`) that talks to injected collaborators
//! (`surface`).

pub mod config;
pub mod console;
pub mod form;
pub mod logging;
pub mod mvi;
pub mod surface;
pub mod validation;
pub mod validator;
