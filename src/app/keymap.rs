use super::action::Action;
use crate::domain::models::Section;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyConfig {
    pub profile: String,
    pub custom: Option<HashMap<String, String>>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "vim".to_string(),
            custom: None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct KeyMap {
    pub global: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    #[must_use]
    pub fn from_config(_config: &KeyConfig) -> Self {
        // Only the default "vim" profile exists for now; the config shape
        // is kept so custom bindings can land without a format break.
        let mut global = HashMap::new();

        global.insert(key('q'), Action::Quit);
        global.insert(key('?'), Action::ToggleHelp);
        global.insert(key('T'), Action::EnterThemeSelection);
        global.insert(
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL),
            Action::TogglePalette,
        );

        global.insert(key(KeyCode::Tab), Action::NextSection);
        global.insert(key(KeyCode::BackTab), Action::PrevSection);
        global.insert(key('l'), Action::NextSection);
        global.insert(key('h'), Action::PrevSection);
        global.insert(key(']'), Action::NextSection);
        global.insert(key('['), Action::PrevSection);

        global.insert(key('j'), Action::ScrollDown(1));
        global.insert(key(KeyCode::Down), Action::ScrollDown(1));
        global.insert(key('k'), Action::ScrollUp(1));
        global.insert(key(KeyCode::Up), Action::ScrollUp(1));
        global.insert(key(KeyCode::PageDown), Action::ScrollDown(10));
        global.insert(key(KeyCode::PageUp), Action::ScrollUp(10));

        for (i, section) in Section::ALL.iter().enumerate() {
            let digit = char::from(b'1' + i as u8);
            global.insert(key(digit), Action::SelectSection(*section));
        }

        global.insert(key(KeyCode::Esc), Action::CancelMode);

        Self { global }
    }

    #[must_use]
    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        let mut lookup = event;
        // Uppercase chars arrive with SHIFT set; the table keys on the
        // char alone.
        if matches!(lookup.code, KeyCode::Char(_)) {
            lookup.modifiers.remove(KeyModifiers::SHIFT);
        }
        self.global.get(&lookup).cloned()
    }
}

trait IntoKeyCode {
    fn into_key_code(self) -> KeyCode;
}

impl IntoKeyCode for char {
    fn into_key_code(self) -> KeyCode {
        KeyCode::Char(self)
    }
}

impl IntoKeyCode for KeyCode {
    fn into_key_code(self) -> KeyCode {
        self
    }
}

fn key(code: impl IntoKeyCode) -> KeyEvent {
    KeyEvent::new(code.into_key_code(), KeyModifiers::empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_k_maps_to_palette_toggle() {
        let map = KeyMap::from_config(&KeyConfig::default());
        let event = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL);
        assert_eq!(map.get_action(event), Some(Action::TogglePalette));
        // Bare 'k' scrolls instead
        assert_eq!(
            map.get_action(key('k')),
            Some(Action::ScrollUp(1))
        );
    }

    #[test]
    fn test_shifted_chars_resolve() {
        let map = KeyMap::from_config(&KeyConfig::default());
        let event = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(map.get_action(event), Some(Action::ToggleHelp));
    }

    #[test]
    fn test_digits_cover_every_section() {
        let map = KeyMap::from_config(&KeyConfig::default());
        for (i, section) in Section::ALL.iter().enumerate() {
            let digit = char::from(b'1' + i as u8);
            assert_eq!(
                map.get_action(key(digit)),
                Some(Action::SelectSection(*section))
            );
        }
    }
}
