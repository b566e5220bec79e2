//! Password generation.

pub mod charset;
mod generate;

pub use charset::{Alphabet, CharClass, ClassSet};
pub use generate::{GenerationRequest, NO_SELECTION, Outcome, generate, new_rng, produce};
