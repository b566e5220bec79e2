//! Command-line entry points.

mod args;
mod generate;
pub mod prompts;

pub use args::{Cli, Command, GenerateArgs};
pub use generate::{apply_flags, generate_batch, run as generate, write_batch};
