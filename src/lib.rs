//! Single-screen password form: a validated length, four character-class
//! toggles, and uniform random generation from the selected alphabet.

pub mod cli;
pub mod clipboard;
pub mod error;
pub mod exits;
pub mod form;
pub mod logging;
pub mod pass;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use error::{Error, Result};
