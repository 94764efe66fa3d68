use crate::app::{action::Action, state::AppMode, state::AppState};
use crate::components::modals::command_palette::{entry_at, palette_contains};
use crossterm::event::{Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::{Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState,
    terminal_size: Size,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == crossterm::event::KeyEventKind::Release {
            return None;
        }
        // The global hotkey works from every mode; raw mode already keeps
        // the terminal from acting on it.
        if key.code == KeyCode::Char('k') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::TogglePalette);
        }
    }

    match app_state.mode {
        AppMode::CommandPalette => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc => Some(Action::CancelMode),
                KeyCode::Down => Some(Action::PaletteNext),
                KeyCode::Up => Some(Action::PalettePrev),
                KeyCode::Enter => Some(Action::PaletteConfirm),
                _ => Some(Action::PaletteInput(key)),
            },
            Event::Mouse(mouse) => {
                let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
                match mouse.kind {
                    MouseEventKind::Moved => {
                        entry_at(area, mouse.column, mouse.row).map(Action::PaletteHover)
                    }
                    MouseEventKind::Down(MouseButton::Left) => {
                        if let Some(index) = entry_at(area, mouse.column, mouse.row) {
                            Some(Action::PaletteClick(index))
                        } else if !palette_contains(area, mouse.column, mouse.row) {
                            Some(Action::CancelMode)
                        } else {
                            None
                        }
                    }
                    MouseEventKind::ScrollDown => Some(Action::PaletteNext),
                    MouseEventKind::ScrollUp => Some(Action::PalettePrev),
                    _ => None,
                }
            }
            Event::Resize(w, h) => Some(Action::Resize(w, h)),
            _ => None,
        },
        AppMode::Help => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('q' | '?') => Some(Action::ToggleHelp),
                _ => None,
            },
            _ => None,
        },
        AppMode::ThemeSelection => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc => Some(Action::CancelMode),
                KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectThemeNext),
                KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectThemePrev),
                KeyCode::Enter => app_state.theme_selection.as_ref().and_then(|ts| {
                    ts.themes
                        .get(ts.selected_index)
                        .copied()
                        .map(Action::SwitchTheme)
                }),
                _ => None,
            },
            _ => None,
        },
        AppMode::Normal => match event {
            Event::Resize(w, h) => Some(Action::Resize(w, h)),
            Event::Key(key) => app_state.keymap.get_action(key),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => Some(Action::ScrollUp(1)),
                MouseEventKind::ScrollDown => Some(Action::ScrollDown(1)),
                _ => None,
            },
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::modals::command_palette::palette_rect;
    use crossterm::event::{KeyEvent, MouseEvent};

    const SIZE: Size = Size {
        width: 100,
        height: 40,
    };

    fn key_event(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn mouse_event(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        })
    }

    #[test]
    fn test_ctrl_k_toggles_from_every_mode() {
        let mut state = AppState::default();
        let hotkey = key_event(KeyCode::Char('k'), KeyModifiers::CONTROL);

        for mode in [
            AppMode::Normal,
            AppMode::CommandPalette,
            AppMode::Help,
            AppMode::ThemeSelection,
        ] {
            state.mode = mode;
            assert_eq!(
                map_event_to_action(hotkey.clone(), &state, SIZE),
                Some(Action::TogglePalette),
                "mode {mode:?}"
            );
        }
    }

    #[test]
    fn test_palette_keys_route_to_palette_actions() {
        let mut state = AppState::default();
        crate::app::reducer::update(&mut state, Action::TogglePalette);

        assert_eq!(
            map_event_to_action(key_event(KeyCode::Down, KeyModifiers::NONE), &state, SIZE),
            Some(Action::PaletteNext)
        );
        assert_eq!(
            map_event_to_action(key_event(KeyCode::Up, KeyModifiers::NONE), &state, SIZE),
            Some(Action::PalettePrev)
        );
        assert_eq!(
            map_event_to_action(key_event(KeyCode::Enter, KeyModifiers::NONE), &state, SIZE),
            Some(Action::PaletteConfirm)
        );
        assert_eq!(
            map_event_to_action(key_event(KeyCode::Esc, KeyModifiers::NONE), &state, SIZE),
            Some(Action::CancelMode)
        );
        // Printable keys become query edits, not keymap bindings
        assert!(matches!(
            map_event_to_action(
                key_event(KeyCode::Char('q'), KeyModifiers::NONE),
                &state,
                SIZE
            ),
            Some(Action::PaletteInput(_))
        ));
    }

    #[test]
    fn test_mouse_over_palette_entry_hovers_and_clicks() {
        let mut state = AppState::default();
        crate::app::reducer::update(&mut state, Action::TogglePalette);

        let area = Rect::new(0, 0, SIZE.width, SIZE.height);
        let modal = palette_rect(area);
        let (col, row) = (modal.x + 2, modal.y + 4);

        assert_eq!(
            map_event_to_action(mouse_event(MouseEventKind::Moved, col, row), &state, SIZE),
            Some(Action::PaletteHover(1))
        );
        assert_eq!(
            map_event_to_action(
                mouse_event(MouseEventKind::Down(MouseButton::Left), col, row),
                &state,
                SIZE
            ),
            Some(Action::PaletteClick(1))
        );
    }

    #[test]
    fn test_click_outside_palette_closes_it() {
        let mut state = AppState::default();
        crate::app::reducer::update(&mut state, Action::TogglePalette);

        assert_eq!(
            map_event_to_action(
                mouse_event(MouseEventKind::Down(MouseButton::Left), 0, 0),
                &state,
                SIZE
            ),
            Some(Action::CancelMode)
        );
    }

    #[test]
    fn test_normal_mode_uses_keymap() {
        let state = AppState::default();
        assert_eq!(
            map_event_to_action(key_event(KeyCode::Char('q'), KeyModifiers::NONE), &state, SIZE),
            Some(Action::Quit)
        );
        assert_eq!(
            map_event_to_action(
                mouse_event(MouseEventKind::ScrollDown, 10, 10),
                &state,
                SIZE
            ),
            Some(Action::ScrollDown(1))
        );
    }
}
