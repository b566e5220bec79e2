//! Interactive form screen.

mod keys;
mod screen;

pub use keys::{Action, FIELD_WIDTH, handle_key};
pub use screen::render;

use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info, warn};

use crate::clipboard;
use crate::error::Result;
use crate::form::FormState;
use crate::pass::new_rng;
use crate::terminal::{ScreenGuard, clear, draw};

/// Run the form until the user leaves.
pub fn run() -> Result<()> {
    let mut rng = new_rng(None);
    let mut form = FormState::new();
    let mut status: Option<String> = None;

    let mut guard = ScreenGuard::new()?;
    info!("interactive form opened");

    loop {
        draw(&render(&form, status.as_deref()))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        status = None;

        match handle_key(&mut form, key) {
            Action::Quit => break,
            Action::Submit => {
                if let Err(e) = form.submit(&mut rng) {
                    debug!(error = %e, "generate pressed while disabled");
                }
            }
            Action::Copy => status = Some(copy_result(&form)),
            Action::Redraw | Action::Ignore => {}
        }
    }

    guard.release();
    clear();
    info!("interactive form closed");
    Ok(())
}

fn copy_result(form: &FormState) -> String {
    let Some(pass) = form.result().and_then(|o| o.password()) else {
        return "Nothing to copy".to_string();
    };
    match clipboard::copy(pass) {
        Ok(()) => "*** -COPIED TO CLIPBOARD- ***".to_string(),
        Err(e) => {
            warn!(error = %e, "clipboard copy failed");
            e.to_string()
        }
    }
}
