//! Resolved options for one-shot generation.

use rand::rngs::SmallRng;

use crate::form::{LengthError, validate};
use crate::pass::{ClassSet, GenerationRequest, new_rng};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub classes: ClassSet,
    pub number_of_passwords: usize,
    pub to_clipboard: bool,
    pub seed: Option<u64>,
}

impl Settings {
    /// Settings for `raw_length` with the form's default classes.
    pub fn new(raw_length: &str) -> Result<Self, LengthError> {
        Ok(Self {
            pass_length: validate(raw_length)?,
            classes: ClassSet::default(),
            number_of_passwords: 1,
            to_clipboard: false,
            seed: None,
        })
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            length: self.pass_length,
            classes: self.classes,
        }
    }

    pub fn rng(&self) -> SmallRng {
        new_rng(self.seed)
    }
}
