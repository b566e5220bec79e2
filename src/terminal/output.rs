//! Terminal output utilities.
//!
//! Box drawing, ANSI helpers, entropy estimate.

use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREY: &str = "\x1b[90m";

/// Raw mode does not translate `\n`, so every line ends with this.
pub const EOL: &str = "\r\n";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Clear the screen and draw `frame` from the top.
pub fn draw(frame: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(b"\x1b[2J\x1b[H")?;
    out.write_all(frame.as_bytes())?;
    out.flush()
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 52;

/// Box top with optional title: ┌─ Title ───────────┐
pub fn box_top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// Box content line, left aligned: │ content        │
pub fn box_line(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// Box content line, centered: │    content     │
pub fn box_line_center(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let total_padding = inner_width.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    format!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    )
}

/// Horizontal rule inside a box: ├──────┤
pub fn box_rule() -> String {
    format!("├{}┤", "─".repeat(BOX_WIDTH - 2))
}

pub fn box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Display width, skipping ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

pub fn red(text: &str) -> String {
    format!("{RED}{text}{RESET}")
}

pub fn grey(text: &str) -> String {
    format!("{GREY}{text}{RESET}")
}

// ============================================================================
// Entropy Calculation
// ============================================================================

/// Password entropy in bits.
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_fill_the_box() {
        assert_eq!(box_top("Result").chars().count(), BOX_WIDTH);
        assert_eq!(box_line("abc").chars().count(), BOX_WIDTH);
        assert_eq!(box_line_center("abc").chars().count(), BOX_WIDTH);
        assert_eq!(box_bottom().chars().count(), BOX_WIDTH);
    }

    #[test]
    fn escapes_take_no_width() {
        assert_eq!(console_width(&red("Length is required")), 18);
        assert_eq!(console_width(&box_line(&grey("x"))), BOX_WIDTH);
    }

    #[test]
    fn entropy() {
        assert_eq!(calculate_entropy(8, 0), 0.0);
        assert!((calculate_entropy(8, 26) - 37.6).abs() < 0.1);
        assert_eq!(entropy_strength(calculate_entropy(8, 26)), "Fair");
        assert_eq!(entropy_strength(calculate_entropy(4, 9)), "Weak");
        assert_eq!(entropy_strength(calculate_entropy(16, 71)), "Strong");
    }
}
