//! Password generation.

use std::fmt;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;
use zeroize::Zeroizing;

use super::charset::{Alphabet, ClassSet};

/// Shown in place of a password when no class is enabled.
pub const NO_SELECTION: &str = "Select at least one option";

/// A validated length plus the classes to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: ClassSet,
}

/// What a submit hands back for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Password(Zeroizing<String>),
    NoSelection,
}

impl Outcome {
    /// Text for the result panel.
    pub fn as_str(&self) -> &str {
        match self {
            Outcome::Password(pass) => pass.as_str(),
            Outcome::NoSelection => NO_SELECTION,
        }
    }

    pub fn password(&self) -> Option<&str> {
        match self {
            Outcome::Password(pass) => Some(pass.as_str()),
            Outcome::NoSelection => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fresh sampling source. A seed makes the output reproducible.
pub fn new_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}

/// Draw `length` characters from `alphabet`, uniformly and with replacement.
pub fn generate<R: Rng + ?Sized>(length: usize, alphabet: &Alphabet, rng: &mut R) -> Zeroizing<String> {
    let chars = alphabet.as_bytes();
    let mut pass = Zeroizing::new(String::with_capacity(length));
    pass.extend((0..length).map(|_| random_char(chars, rng)));
    pass
}

/// Build the alphabet for `request` and generate, or fall back to the
/// no-selection sentinel.
pub fn produce<R: Rng + ?Sized>(request: &GenerationRequest, rng: &mut R) -> Outcome {
    match Alphabet::build(request.classes) {
        Some(alphabet) => {
            debug!(
                length = request.length,
                alphabet = alphabet.len(),
                "generating password"
            );
            Outcome::Password(generate(request.length, &alphabet, rng))
        }
        None => {
            debug!("no character class enabled");
            Outcome::NoSelection
        }
    }
}

#[inline]
fn random_char<R: Rng + ?Sized>(chars: &[u8], rng: &mut R) -> char {
    chars[rng.random_range(0..chars.len())] as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset::{CharClass, DIGITS, LOWERCASE};

    #[test]
    fn lowercase_only_draws_lowercase() {
        let mut rng = new_rng(Some(7));
        let alphabet = Alphabet::build(ClassSet::default()).unwrap();
        let pass = generate(8, &alphabet, &mut rng);
        assert_eq!(pass.chars().count(), 8);
        assert!(pass.chars().all(|c| LOWERCASE.contains(c)));
    }

    #[test]
    fn digits_only_draws_digits() {
        let mut rng = new_rng(Some(11));
        let request = GenerationRequest {
            length: 5,
            classes: ClassSet::empty().with(CharClass::Digits),
        };
        let outcome = produce(&request, &mut rng);
        let pass = outcome.password().unwrap();
        assert_eq!(pass.len(), 5);
        assert!(pass.chars().all(|c| DIGITS.contains(c)));
    }

    #[test]
    fn empty_classes_yield_sentinel() {
        let mut rng = new_rng(Some(1));
        let request = GenerationRequest {
            length: 10,
            classes: ClassSet::empty(),
        };
        let outcome = produce(&request, &mut rng);
        assert_eq!(outcome, Outcome::NoSelection);
        assert_eq!(outcome.to_string(), "Select at least one option");
        assert_eq!(outcome.password(), None);
    }

    #[test]
    fn same_seed_same_password() {
        let alphabet = Alphabet::build(ClassSet::all()).unwrap();
        let a = generate(16, &alphabet, &mut new_rng(Some(42)));
        let b = generate(16, &alphabet, &mut new_rng(Some(42)));
        assert_eq!(a, b);
    }

    #[test]
    fn every_character_is_reachable() {
        let alphabet = Alphabet::build(ClassSet::empty().with(CharClass::Digits)).unwrap();
        let pass = generate(2000, &alphabet, &mut new_rng(Some(3)));
        for c in DIGITS.chars() {
            assert!(pass.contains(c), "digit {c} never drawn");
        }
    }

    #[test]
    fn draws_are_roughly_uniform() {
        const PER_CHAR: usize = 10_000;
        let alphabet = Alphabet::build(ClassSet::all()).unwrap();
        let pass = generate(PER_CHAR * alphabet.len(), &alphabet, &mut new_rng(Some(99)));

        let mut counts = [0usize; 128];
        for b in pass.bytes() {
            counts[b as usize] += 1;
        }
        // Six standard deviations either side. A byte-modulo draw over 71
        // characters skews the low indices by about 11%.
        let (lo, hi) = (PER_CHAR * 94 / 100, PER_CHAR * 106 / 100);
        for &b in alphabet.as_bytes() {
            let n = counts[b as usize];
            assert!((lo..=hi).contains(&n), "{} drawn {n} times", b as char);
        }
    }
}
