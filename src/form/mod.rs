//! The password form: field validation and state transitions.

mod state;
mod validate;

pub use state::{FormState, Phase};
pub use validate::{LengthError, MAX_LENGTH, MIN_LENGTH, validate};
