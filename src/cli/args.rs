//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Debug, Parser)]
#[command(
    name = "passform",
    version,
    about = "Password form: pick a length and character classes, get a random password",
    long_about = "Run without a subcommand to open the interactive form.\n\
                  Use `passform generate` to produce passwords without the form."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Write logs to a file. Required to see logs from the interactive form.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate passwords without opening the form.
    #[command(visible_alias = "gen")]
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Characters per password (4-16).
    #[arg(short = 'l', long, value_name = "N", allow_hyphen_values = true)]
    pub length: String,

    /// Leave out lowercase letters (included by default).
    #[arg(long)]
    pub no_lower: bool,

    /// Include uppercase letters.
    #[arg(short = 'U', long)]
    pub upper: bool,

    /// Include numbers.
    #[arg(short = 'n', long)]
    pub numbers: bool,

    /// Include symbols.
    #[arg(short = 's', long)]
    pub symbols: bool,

    /// How many passwords to generate.
    #[arg(short = 'c', long, value_name = "N", default_value_t = 1)]
    pub count: usize,

    /// Seed the generator for reproducible output.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Copy to clipboard instead of printing.
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_opens_form() {
        let cli = Cli::try_parse_from(["passform"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn generate_flags() {
        let cli = Cli::try_parse_from([
            "passform", "generate", "-l", "12", "-U", "-n", "--count", "3", "--seed", "9",
        ])
        .unwrap();
        let Some(Command::Generate(args)) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.length, "12");
        assert!(!args.no_lower);
        assert!(args.upper);
        assert!(args.numbers);
        assert!(!args.symbols);
        assert_eq!(args.count, 3);
        assert_eq!(args.seed, Some(9));
    }

    #[test]
    fn length_is_raw_text() {
        let cli = Cli::try_parse_from(["passform", "gen", "-l", "-3"]).unwrap();
        let Some(Command::Generate(args)) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.length, "-3");
    }
}
