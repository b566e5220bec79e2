//! One-shot generation from command-line flags.

use std::convert::Infallible;
use std::io::{self, BufWriter, Write};

use tracing::{info, warn};
use zeroize::Zeroizing;

use super::{GenerateArgs, prompts};
use crate::clipboard;
use crate::error::Result;
use crate::form::LengthError;
use crate::pass::{CharClass, Outcome, produce};
use crate::settings::Settings;

pub fn run(args: &GenerateArgs) -> Result<()> {
    let settings = apply_flags(args)?;

    if !settings.to_clipboard {
        let mut out = BufWriter::new(io::stdout().lock());
        let written = write_batch(&settings, &mut out)?;
        out.flush()?;
        info!(count = written, length = settings.pass_length, "batch written");
        return Ok(());
    }

    let batch = generate_batch(&settings);
    let count = batch.lines().count();
    info!(count, length = settings.pass_length, "batch generated");
    match clipboard::copy(batch.trim_end()) {
        Ok(()) => {
            prompts::clipboard_copied(count);
            return Ok(());
        }
        Err(e) => {
            warn!(error = %e, "clipboard unavailable");
            if !prompts::clipboard_fallback_prompt(&e.to_string()) {
                return Ok(());
            }
        }
    }

    let mut out = io::stdout().lock();
    out.write_all(batch.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Resolve flags into settings. The length goes through the form's validator.
pub fn apply_flags(args: &GenerateArgs) -> std::result::Result<Settings, LengthError> {
    let mut settings = Settings::new(&args.length)?;

    settings.classes.set(CharClass::Lowercase, !args.no_lower);
    settings.classes.set(CharClass::Uppercase, args.upper);
    settings.classes.set(CharClass::Digits, args.numbers);
    settings.classes.set(CharClass::Symbols, args.symbols);

    settings.number_of_passwords = args.count;
    settings.to_clipboard = args.clipboard;
    settings.seed = args.seed;
    Ok(settings)
}

/// Write one outcome per line as each is produced. Returns the line count.
pub fn write_batch<W: Write>(settings: &Settings, out: &mut W) -> io::Result<usize> {
    each_outcome(settings, |line| {
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")
    })
}

/// The whole batch in memory, for the clipboard.
pub fn generate_batch(settings: &Settings) -> Zeroizing<String> {
    let mut batch = Zeroizing::new(String::new());
    let Ok(_) = each_outcome::<Infallible>(settings, |line| {
        batch.push_str(line);
        batch.push('\n');
        Ok(())
    });
    batch
}

/// Feed each outcome to `emit`. With no class enabled the sentinel is
/// emitted once, whatever the count.
fn each_outcome<E>(
    settings: &Settings,
    mut emit: impl FnMut(&str) -> std::result::Result<(), E>,
) -> std::result::Result<usize, E> {
    let mut rng = settings.rng();
    let request = settings.request();

    let mut emitted = 0;
    while emitted < settings.number_of_passwords {
        let outcome = produce(&request, &mut rng);
        emit(outcome.as_str())?;
        emitted += 1;
        if outcome == Outcome::NoSelection {
            break;
        }
    }
    Ok(emitted)
}
