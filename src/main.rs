use clap::Parser;
use tracing::level_filters::LevelFilter;

use passform::cli::{Cli, Command, generate, prompts};
use passform::logging::{LogConfig, init_logging};
use passform::{exits, tui};

fn main() {
    exits::reset_terminal();
    exits::install_handlers();

    let cli = Cli::parse();
    prompts::set_quiet(cli.verbosity.tracing_level_filter() <= LevelFilter::ERROR);

    if let Err(e) = init_logging(&LogConfig::from_cli(&cli)) {
        prompts::error(&format!("error: {e}"));
        std::process::exit(1);
    }

    let result = match &cli.command {
        None => tui::run(),
        Some(Command::Generate(args)) => generate(args),
    };

    if let Err(e) = result {
        prompts::error(&format!("error: {e}"));
        std::process::exit(1);
    }
}
