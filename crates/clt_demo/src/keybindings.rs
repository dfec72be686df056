//! Keybindings matching utilities.
//!
//! Key events are converted to strings such as `"shift+tab"` or `"ctrl+c"` and
//! matched against the binding lists in [`Keybindings`].

use crate::event::{AppKeyEvent, KeyCode};

/// What a key press asks the demo to do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyAction {
    Quit,
    FocusNext,
    FocusPrev,
    /// Move the focused slider by this many fine steps
    Step(f64),
    JumpToMin,
    JumpToMax,
}

#[derive(Debug, Clone)]
pub struct Keybindings {
    pub quit: Vec<String>,
    pub focus_next: Vec<String>,
    pub focus_prev: Vec<String>,
    pub decrease: Vec<String>,
    pub increase: Vec<String>,
    pub decrease_coarse: Vec<String>,
    pub increase_coarse: Vec<String>,
    pub jump_min: Vec<String>,
    pub jump_max: Vec<String>,
}

impl Default for Keybindings {
    fn default() -> Self {
        Self {
            quit: vec!["q".into(), "esc".into(), "ctrl+c".into()],
            focus_next: vec!["tab".into(), "down".into(), "j".into()],
            focus_prev: vec!["shift+tab".into(), "up".into(), "k".into()],
            decrease: vec!["left".into(), "h".into()],
            increase: vec!["right".into(), "l".into()],
            decrease_coarse: vec!["pagedown".into(), "shift+h".into(), "shift+left".into()],
            increase_coarse: vec!["pageup".into(), "shift+l".into(), "shift+right".into()],
            jump_min: vec!["home".into()],
            jump_max: vec!["end".into()],
        }
    }
}

impl Keybindings {
    /// Convert an AppKeyEvent to our string format.
    ///
    /// Examples:
    /// - KeyCode::Char('h') with no modifiers -> "h"
    /// - KeyCode::Char('c') with ctrl -> "ctrl+c"
    /// - KeyCode::Char('L') with shift -> "shift+l"
    /// - KeyCode::BackTab -> "shift+tab"
    pub fn app_key_to_string(key: &AppKeyEvent) -> String {
        let mut parts = Vec::new();

        if key.ctrl {
            parts.push("ctrl");
        }
        if key.alt {
            parts.push("alt");
        }

        let key_str = match &key.code {
            KeyCode::Char(c) => {
                if key.shift && c.is_alphabetic() {
                    parts.push("shift");
                }
                c.to_lowercase().to_string()
            }
            KeyCode::Tab | KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                if key.shift {
                    parts.push("shift");
                }
                match key.code {
                    KeyCode::Tab => "tab",
                    KeyCode::Up => "up",
                    KeyCode::Down => "down",
                    KeyCode::Left => "left",
                    _ => "right",
                }
                .to_string()
            }
            KeyCode::BackTab => {
                if !parts.contains(&"shift") {
                    parts.push("shift");
                }
                "tab".to_string()
            }
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Esc => "esc".to_string(),
            KeyCode::Home => "home".to_string(),
            KeyCode::End => "end".to_string(),
            KeyCode::PageUp => "pageup".to_string(),
            KeyCode::PageDown => "pagedown".to_string(),
            _ => return String::new(), // Unsupported key
        };

        parts.push(&key_str);
        parts.join("+")
    }

    /// Check if an AppKeyEvent matches any of the configured bindings.
    pub fn matches(key: &AppKeyEvent, bindings: &[String]) -> bool {
        let key_str = Self::app_key_to_string(key);
        if key_str.is_empty() {
            return false;
        }
        bindings.iter().any(|b| b.eq_ignore_ascii_case(&key_str))
    }

    /// Map a key to its action, `None` for unbound keys
    pub fn resolve(&self, key: &AppKeyEvent, coarse_steps: f64) -> Option<KeyAction> {
        let table: [(&[String], KeyAction); 9] = [
            (&self.quit, KeyAction::Quit),
            (&self.focus_next, KeyAction::FocusNext),
            (&self.focus_prev, KeyAction::FocusPrev),
            (&self.decrease, KeyAction::Step(-1.0)),
            (&self.increase, KeyAction::Step(1.0)),
            (&self.decrease_coarse, KeyAction::Step(-coarse_steps)),
            (&self.increase_coarse, KeyAction::Step(coarse_steps)),
            (&self.jump_min, KeyAction::JumpToMin),
            (&self.jump_max, KeyAction::JumpToMax),
        ];
        table
            .into_iter()
            .find(|(bindings, _)| Self::matches(key, bindings))
            .map(|(_, action)| action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key(code: KeyCode, ctrl: bool, alt: bool, shift: bool) -> AppKeyEvent {
        AppKeyEvent {
            code,
            ctrl,
            alt,
            shift,
        }
    }

    #[test]
    fn test_key_to_string_basic() {
        let key = make_key(KeyCode::Char('h'), false, false, false);
        assert_eq!(Keybindings::app_key_to_string(&key), "h");
    }

    #[test]
    fn test_key_to_string_modifiers() {
        let key = make_key(KeyCode::Char('c'), true, false, false);
        assert_eq!(Keybindings::app_key_to_string(&key), "ctrl+c");

        let key = make_key(KeyCode::Char('L'), false, false, true);
        assert_eq!(Keybindings::app_key_to_string(&key), "shift+l");

        let key = make_key(KeyCode::Right, false, false, true);
        assert_eq!(Keybindings::app_key_to_string(&key), "shift+right");
    }

    #[test]
    fn test_back_tab_is_shift_tab() {
        let key = make_key(KeyCode::BackTab, false, false, true);
        assert_eq!(Keybindings::app_key_to_string(&key), "shift+tab");
        let key = make_key(KeyCode::BackTab, false, false, false);
        assert_eq!(Keybindings::app_key_to_string(&key), "shift+tab");
    }

    #[test]
    fn test_unsupported_key_never_matches() {
        let key = make_key(KeyCode::Insert, false, false, false);
        assert!(!Keybindings::matches(&key, &["".to_string()]));
    }

    #[test]
    fn test_resolve_default_bindings() {
        let bindings = Keybindings::default();
        let resolve = |key| bindings.resolve(&key, 10.0);

        assert_eq!(
            resolve(AppKeyEvent::plain(KeyCode::Char('q'))),
            Some(KeyAction::Quit)
        );
        assert_eq!(
            resolve(make_key(KeyCode::Char('c'), true, false, false)),
            Some(KeyAction::Quit)
        );
        assert_eq!(
            resolve(AppKeyEvent::plain(KeyCode::Left)),
            Some(KeyAction::Step(-1.0))
        );
        assert_eq!(
            resolve(AppKeyEvent::plain(KeyCode::PageUp)),
            Some(KeyAction::Step(10.0))
        );
        assert_eq!(
            resolve(make_key(KeyCode::Char('H'), false, false, true)),
            Some(KeyAction::Step(-10.0))
        );
        assert_eq!(
            resolve(AppKeyEvent::plain(KeyCode::Tab)),
            Some(KeyAction::FocusNext)
        );
        assert_eq!(
            resolve(make_key(KeyCode::BackTab, false, false, true)),
            Some(KeyAction::FocusPrev)
        );
        assert_eq!(
            resolve(AppKeyEvent::plain(KeyCode::End)),
            Some(KeyAction::JumpToMax)
        );
        assert_eq!(resolve(AppKeyEvent::plain(KeyCode::Char('x'))), None);
    }
}
