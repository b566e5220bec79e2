//! Character classes and alphabet assembly.

use std::fmt;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// No 'N'. Generated output depends on this exact pool.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMOPQRSTUVWXYZ";
pub const DIGITS: &str = "123456789";
pub const SYMBOLS: &str = "!@#%^&*()_+";

/// One of the four toggleable character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharClass {
    /// Every class, in alphabet order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    pub fn pool(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Lowercase => "Include Lowercase Letters",
            CharClass::Uppercase => "Include Uppercase Letters",
            CharClass::Digits => "Include Numbers",
            CharClass::Symbols => "Include Symbols",
        }
    }
}

/// The enabled classes. Defaults to lowercase only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassSet {
    lowercase: bool,
    uppercase: bool,
    digits: bool,
    symbols: bool,
}

impl ClassSet {
    pub const fn empty() -> Self {
        Self {
            lowercase: false,
            uppercase: false,
            digits: false,
            symbols: false,
        }
    }

    pub const fn all() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
        }
    }

    #[must_use]
    pub fn with(mut self, class: CharClass) -> Self {
        self.set(class, true);
        self
    }

    pub fn contains(&self, class: CharClass) -> bool {
        *self.slot(class)
    }

    pub fn set(&mut self, class: CharClass, enabled: bool) {
        *self.slot_mut(class) = enabled;
    }

    /// Flip one class and return its new state.
    pub fn toggle(&mut self, class: CharClass) -> bool {
        let slot = self.slot_mut(class);
        *slot = !*slot;
        *slot
    }

    pub fn is_empty(&self) -> bool {
        !(self.lowercase || self.uppercase || self.digits || self.symbols)
    }

    /// Enabled classes in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(|c| self.contains(*c))
    }

    fn slot(&self, class: CharClass) -> &bool {
        match class {
            CharClass::Lowercase => &self.lowercase,
            CharClass::Uppercase => &self.uppercase,
            CharClass::Digits => &self.digits,
            CharClass::Symbols => &self.symbols,
        }
    }

    fn slot_mut(&mut self, class: CharClass) -> &mut bool {
        match class {
            CharClass::Lowercase => &mut self.lowercase,
            CharClass::Uppercase => &mut self.uppercase,
            CharClass::Digits => &mut self.digits,
            CharClass::Symbols => &mut self.symbols,
        }
    }
}

impl Default for ClassSet {
    fn default() -> Self {
        Self::empty().with(CharClass::Lowercase)
    }
}

impl FromIterator<CharClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharClass>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), ClassSet::with)
    }
}

/// Characters eligible for sampling. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet(Vec<u8>);

impl Alphabet {
    /// Concatenate the pools of every enabled class.
    /// Returns `None` when no class is enabled.
    pub fn build(classes: ClassSet) -> Option<Self> {
        let chars: Vec<u8> = classes.iter().flat_map(|c| c.pool().bytes()).collect();
        if chars.is_empty() {
            return None;
        }
        Some(Self(chars))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: `build` rejects an empty set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.0.contains(&(c as u8))
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pools are ASCII only.
        self.0.iter().try_for_each(|&b| write!(f, "{}", b as char))
    }
}
