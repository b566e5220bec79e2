use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::form::FormState;

/// Widest value the length field accepts as typed input.
pub const FIELD_WIDTH: usize = 3;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Redraw,
    Submit,
    Copy,
    Quit,
    Ignore,
}

/// Apply `key` to the form. Generation and clipboard access are left to the
/// caller through the returned action.
pub fn handle_key(form: &mut FormState, key: KeyEvent) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => Action::Quit,
        KeyCode::Char('u') if ctrl => {
            form.clear_length();
            Action::Redraw
        }
        _ if ctrl => Action::Ignore,
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        KeyCode::Enter => Action::Submit,
        KeyCode::Backspace | KeyCode::Delete => {
            form.pop_length_char();
            Action::Redraw
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if form.length_text().len() < FIELD_WIDTH {
                form.push_length_char(c);
            }
            Action::Redraw
        }
        KeyCode::Char('l') => {
            form.toggle_lowercase();
            Action::Redraw
        }
        KeyCode::Char('u') => {
            form.toggle_uppercase();
            Action::Redraw
        }
        KeyCode::Char('n') => {
            form.toggle_numbers();
            Action::Redraw
        }
        KeyCode::Char('s') => {
            form.toggle_symbols();
            Action::Redraw
        }
        KeyCode::Char('r') => {
            form.reset();
            Action::Redraw
        }
        KeyCode::Char('c') => Action::Copy,
        _ => Action::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::LengthError;
    use crate::pass::CharClass;

    fn press(form: &mut FormState, code: KeyCode) -> Action {
        handle_key(form, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(form: &mut FormState, c: char) -> Action {
        handle_key(form, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn digits_edit_the_field() {
        let mut form = FormState::new();
        press(&mut form, KeyCode::Char('1'));
        press(&mut form, KeyCode::Char('2'));
        assert_eq!(form.length_text(), "12");
        assert!(form.touched());

        press(&mut form, KeyCode::Backspace);
        assert_eq!(form.length_text(), "1");
        assert_eq!(form.field_error(), Some(LengthError::TooShort));

        ctrl(&mut form, 'u');
        assert_eq!(form.length_text(), "");
        assert_eq!(form.field_error(), Some(LengthError::Missing));
    }

    #[test]
    fn field_is_capped() {
        let mut form = FormState::new();
        for _ in 0..5 {
            press(&mut form, KeyCode::Char('9'));
        }
        assert_eq!(form.length_text(), "999");
    }

    #[test]
    fn letters_toggle_classes() {
        let mut form = FormState::new();
        press(&mut form, KeyCode::Char('l'));
        press(&mut form, KeyCode::Char('u'));
        press(&mut form, KeyCode::Char('n'));
        press(&mut form, KeyCode::Char('s'));
        let classes = form.classes();
        assert!(!classes.contains(CharClass::Lowercase));
        assert!(classes.contains(CharClass::Uppercase));
        assert!(classes.contains(CharClass::Digits));
        assert!(classes.contains(CharClass::Symbols));
    }

    #[test]
    fn actions() {
        let mut form = FormState::new();
        assert_eq!(press(&mut form, KeyCode::Enter), Action::Submit);
        assert_eq!(press(&mut form, KeyCode::Char('c')), Action::Copy);
        assert_eq!(press(&mut form, KeyCode::Esc), Action::Quit);
        assert_eq!(press(&mut form, KeyCode::Char('q')), Action::Quit);
        assert_eq!(ctrl(&mut form, 'c'), Action::Quit);
        assert_eq!(ctrl(&mut form, 'l'), Action::Ignore);
        assert_eq!(press(&mut form, KeyCode::Tab), Action::Ignore);
    }

    #[test]
    fn r_resets() {
        let mut form = FormState::new();
        press(&mut form, KeyCode::Char('8'));
        press(&mut form, KeyCode::Char('s'));
        assert_eq!(press(&mut form, KeyCode::Char('r')), Action::Redraw);
        assert_eq!(form, FormState::new());
    }
}
