//! Line-oriented terminal host for the signup form.
//!
//! Every line read counts as an edit of the field followed by a submit.
//! Errors go to one writer (stderr in the binary), the success
//! acknowledgment to another (stdout).

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::surface::{NotificationSink, PlainSubmit, PresentationSurface};
use crate::validator::FormValidator;

/// Marker printed next to an error while the field is flagged invalid.
pub const INVALID_MARKER: &str = "[invalid]";

/// Terminal presentation surface.
///
/// Non-empty error text is printed with [`INVALID_MARKER`]. Clearing an
/// error prints nothing; the flag itself is only kept as state.
pub struct ConsoleSurface<W: Write> {
    out: W,
    input: String,
    invalid: bool,
}

impl<W: Write> ConsoleSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            input: String::new(),
            invalid: false,
        }
    }

    pub fn set_input(&mut self, text: &str) {
        self.input.clear();
        self.input.push_str(text);
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PresentationSurface for ConsoleSurface<W> {
    fn set_error_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{} {}", INVALID_MARKER, text) {
            warn!(error = %e, "Failed to write error text");
        }
    }

    fn set_invalid_flag(&mut self) {
        self.invalid = true;
    }

    fn clear_invalid_flag(&mut self) {
        self.invalid = false;
    }

    fn current_input_text(&self) -> String {
        self.input.clone()
    }

    fn reset_fields(&mut self) {
        self.input.clear();
    }
}

/// Prints notifications on their own line.
pub struct ConsoleNotifier<W: Write> {
    out: W,
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> NotificationSink for ConsoleNotifier<W> {
    fn notify(&mut self, message: &str) {
        let result = writeln!(self.out, "{}", message).and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!(error = %e, "Failed to write notification");
        }
    }
}

/// Feeds each input line to the form as an edit followed by a submit.
///
/// Returns the number of lines processed.
pub fn run_session<R, E, N>(
    input: R,
    validator: &mut FormValidator<ConsoleSurface<E>, ConsoleNotifier<N>>,
) -> io::Result<usize>
where
    R: BufRead,
    E: Write,
    N: Write,
{
    let mut count = 0;
    for line in input.lines() {
        let line = line?;
        validator.surface_mut().set_input(&line);
        validator.handle_input_change();
        validator.submit(&mut PlainSubmit::default());
        count += 1;
    }
    Ok(count)
}
