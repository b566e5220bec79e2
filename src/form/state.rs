//! Form state and its transitions.

use rand::Rng;
use tracing::debug;

use super::validate::{LengthError, validate};
use crate::pass::{CharClass, ClassSet, GenerationRequest, Outcome, produce};

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// Generation in progress. Only observable from inside `submit`.
    Submitted,
    ResultDisplayed,
}

/// Everything the screen shows, owned by one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    length_text: String,
    touched: bool,
    classes: ClassSet,
    result: Option<Outcome>,
    request: Option<GenerationRequest>,
    phase: Phase,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            length_text: String::new(),
            touched: false,
            classes: ClassSet::default(),
            result: None,
            request: None,
            phase: Phase::Idle,
        }
    }

    pub fn length_text(&self) -> &str {
        &self.length_text
    }

    pub fn touched(&self) -> bool {
        self.touched
    }

    pub fn classes(&self) -> ClassSet {
        self.classes
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn result(&self) -> Option<&Outcome> {
        self.result.as_ref()
    }

    /// The request behind the displayed result.
    pub fn last_request(&self) -> Option<&GenerationRequest> {
        self.request.as_ref()
    }

    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    // -- length field --

    pub fn set_length_text(&mut self, text: impl Into<String>) {
        self.length_text = text.into();
        self.touched = true;
    }

    pub fn push_length_char(&mut self, c: char) {
        self.length_text.push(c);
        self.touched = true;
    }

    pub fn pop_length_char(&mut self) {
        self.length_text.pop();
        self.touched = true;
    }

    pub fn clear_length(&mut self) {
        self.length_text.clear();
        self.touched = true;
    }

    pub fn touch(&mut self) {
        self.touched = true;
    }

    /// Current field text run through the validator.
    pub fn length(&self) -> Result<usize, LengthError> {
        validate(&self.length_text)
    }

    /// Error to display under the field. Hidden until the field is touched.
    pub fn field_error(&self) -> Option<LengthError> {
        if !self.touched {
            return None;
        }
        self.length().err()
    }

    pub fn can_submit(&self) -> bool {
        self.length().is_ok()
    }

    // -- toggles --

    pub fn toggle(&mut self, class: CharClass) -> bool {
        let enabled = self.classes.toggle(class);
        debug!(?class, enabled, "class toggled");
        enabled
    }

    pub fn toggle_lowercase(&mut self) -> bool {
        self.toggle(CharClass::Lowercase)
    }

    pub fn toggle_uppercase(&mut self) -> bool {
        self.toggle(CharClass::Uppercase)
    }

    pub fn toggle_numbers(&mut self) -> bool {
        self.toggle(CharClass::Digits)
    }

    pub fn toggle_symbols(&mut self) -> bool {
        self.toggle(CharClass::Symbols)
    }

    // -- actions --

    /// Validate the field and, if it passes, generate into the result panel.
    ///
    /// A failed validation marks the field touched and leaves the previous
    /// result in place. An empty class set is not a failure: it produces
    /// [`Outcome::NoSelection`].
    pub fn submit<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&Outcome, LengthError> {
        self.touched = true;
        let length = self.length().inspect_err(|e| {
            debug!(error = %e, "submit rejected");
        })?;

        self.phase = Phase::Submitted;
        let request = GenerationRequest {
            length,
            classes: self.classes,
        };
        let outcome = produce(&request, rng);
        self.phase = Phase::ResultDisplayed;
        self.request = Some(request);

        let outcome: &Outcome = self.result.insert(outcome);
        Ok(outcome)
    }

    /// Back to the mount-time defaults. The old result is wiped on drop.
    pub fn reset(&mut self) {
        debug!("form reset");
        *self = Self::new();
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
