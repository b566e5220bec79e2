//! User-facing warnings and prompts for CLI output.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Suppresses warnings and confirmations.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// True when prompts should be skipped: quiet mode or stdin is not a tty.
pub fn skip_prompt() -> bool {
    quiet() || unsafe { libc::isatty(0) } != 1
}

/// Warning to stderr in yellow. Suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Error to stderr in red. Always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn clipboard_copied(count: usize) {
    if !quiet() {
        println!("*** -COPIED {count} TO CLIPBOARD- ***");
    }
}

/// Ask whether to print instead when the clipboard is unavailable.
/// Non-interactive and quiet runs fall back silently.
pub fn clipboard_fallback_prompt(reason: &str) -> bool {
    if skip_prompt() {
        return true;
    }

    warn(reason);
    eprint!("Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        return true;
    }

    eprintln!("Aborted.");
    false
}
