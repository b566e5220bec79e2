//! Terminal restoration on exit and on termination signals.

/// Put the tty back into canonical, echoing mode.
fn restore_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

const SHOW_CURSOR: &[u8] = b"\x1b[0m\x1b[?25h";

/// Termios plus cursor. Only async-signal-safe calls.
fn restore_terminal() {
    restore_termios();
    unsafe {
        // Escape codes only make sense on a tty.
        if libc::isatty(1) == 1 {
            libc::write(
                1,
                SHOW_CURSOR.as_ptr() as *const libc::c_void,
                SHOW_CURSOR.len(),
            );
        }
    }
}

/// Registered with atexit.
extern "C" fn restore_on_exit() {
    restore_terminal();
}

/// SIGINT/SIGTERM/SIGHUP: restore and leave with `_exit`. atexit hooks and
/// stdio flushing must not run inside a handler.
extern "C" fn on_terminate(_: libc::c_int) {
    restore_terminal();
    unsafe { libc::_exit(130) }
}

/// Install the exit hook and signal handlers. Call early in `main`.
pub fn install_handlers() {
    unsafe {
        libc::atexit(restore_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, on_terminate as *const () as libc::sighandler_t);
        }
    }
}

/// Recover from a terminal left in raw mode by an earlier crash.
pub fn reset_terminal() {
    restore_termios();
}
