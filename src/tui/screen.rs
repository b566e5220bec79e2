//! Form rendering.

use crate::form::FormState;
use crate::pass::{Alphabet, CharClass, Outcome};
use crate::terminal::{
    EOL, RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_rule, box_top,
    calculate_entropy, entropy_strength, grey, red,
};

const PLACEHOLDER: &str = "Give Length";

/// Build the whole screen for `form`. `status` is a one-line notice shown
/// between the form and the result panel.
pub fn render(form: &FormState, status: Option<&str>) -> String {
    let mut lines = Vec::with_capacity(24);

    lines.push(box_top("Password Generator"));
    lines.push(box_line_center("Esc/q: quit | CTRL+U: clear length"));
    lines.push(box_line(""));
    lines.push(box_line(&length_field(form)));
    match form.field_error() {
        Some(e) => lines.push(box_line(&format!("  {}", red(&e.to_string())))),
        None => lines.push(box_line("")),
    }

    let classes = form.classes();
    for (class, key) in CharClass::ALL.into_iter().zip(['l', 'u', 'n', 's']) {
        let mark = if classes.contains(class) { 'x' } else { ' ' };
        lines.push(box_line(&format!("[{mark}] {key}) {}", class.label())));
    }

    lines.push(box_line(""));
    lines.push(box_rule());
    let generate = if form.can_submit() {
        "Enter) Generate".to_string()
    } else {
        grey("Enter) Generate")
    };
    lines.push(box_line_center(&format!("{generate}  |  r) Reset")));
    lines.push(box_bottom());

    lines.push(status.unwrap_or_default().to_string());

    if let Some(outcome) = form.result() {
        result_panel(&mut lines, outcome, form);
    }

    let mut frame = lines.join(EOL);
    frame.push_str(EOL);
    frame
}

fn length_field(form: &FormState) -> String {
    let text = form.length_text();
    if text.is_empty() {
        format!("Password Length: {}", grey(PLACEHOLDER))
    } else {
        format!("Password Length: {text}")
    }
}

fn result_panel(lines: &mut Vec<String>, outcome: &Outcome, form: &FormState) {
    lines.push(box_top(""));
    lines.push(box_line(&format!("{UNDERLINE}Result:{RESET}")));
    lines.push(box_line(&grey("c) copy to clipboard")));
    lines.push(box_line(""));
    lines.push(box_line_center(outcome.as_str()));

    let alphabet = form
        .last_request()
        .and_then(|request| Alphabet::build(request.classes));
    if let (Some(pass), Some(alphabet)) = (outcome.password(), alphabet) {
        let bits = calculate_entropy(pass.len(), alphabet.len());
        lines.push(box_line(""));
        lines.push(box_line_center(&format!(
            "Entropy: {:.1} bits ({})",
            bits,
            entropy_strength(bits)
        )));
    }
    lines.push(box_bottom());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::new_rng;

    #[test]
    fn fresh_form() {
        let frame = render(&FormState::new(), None);
        assert!(frame.contains("Password Generator"));
        assert!(frame.contains(PLACEHOLDER));
        assert!(frame.contains("[x] l) Include Lowercase Letters"));
        assert!(frame.contains("[ ] u) Include Uppercase Letters"));
        assert!(frame.contains("[ ] n) Include Numbers"));
        assert!(frame.contains("[ ] s) Include Symbols"));
        assert!(!frame.contains("Result:"));
        assert!(!frame.contains("Length is required"));
    }

    #[test]
    fn touched_error_is_shown() {
        let mut form = FormState::new();
        form.set_length_text("2");
        let frame = render(&form, None);
        assert!(frame.contains("Should be min of 4 characters"));
    }

    #[test]
    fn result_panel_after_submit() {
        let mut form = FormState::new();
        form.set_length_text("8");
        form.submit(&mut new_rng(Some(4))).unwrap();
        let pass = form.result().unwrap().as_str().to_owned();

        let frame = render(&form, Some("Copied to clipboard"));
        assert!(frame.contains("Result:"));
        assert!(frame.contains(&pass));
        assert!(frame.contains("Copied to clipboard"));
        assert!(frame.contains("Entropy: 37.6 bits (Fair)"));

        // Toggling after the submit does not change the measured result.
        form.toggle_symbols();
        assert!(render(&form, None).contains("Entropy: 37.6 bits (Fair)"));
    }

    #[test]
    fn sentinel_in_result_panel() {
        let mut form = FormState::new();
        form.set_length_text("10");
        form.toggle_lowercase();
        form.submit(&mut new_rng(Some(4))).unwrap();

        let frame = render(&form, None);
        assert!(frame.contains("Select at least one option"));
        assert!(!frame.contains("Entropy"));
    }
}
