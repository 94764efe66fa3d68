use std::time::{Duration, Instant};

use super::{
    action::Action,
    command::Command,
    state::{AppMode, AppState, CommandPaletteState, ThemeSelectionState},
};
use crate::domain::content::PROFILE;
use crate::theme::Theme;

const STATUS_TTL: Duration = Duration::from_secs(4);

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        // --- System ---
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            state.clock = chrono::Local::now().format("%H:%M:%S").to_string();
            if let Some(deadline) = state.status_clear_time {
                if Instant::now() >= deadline {
                    state.status_message = None;
                    state.status_clear_time = None;
                }
            }
        }
        Action::Resize(_, _) => {} // ratatui reflows on the next draw
        Action::Quit => {
            state.should_quit = true;
        }

        // --- Page navigation ---
        Action::SelectSection(section) => {
            state.section = section;
            state.scroll = 0;
        }
        Action::NextSection => {
            state.section = state.section.next();
            state.scroll = 0;
        }
        Action::PrevSection => {
            state.section = state.section.prev();
            state.scroll = 0;
        }
        Action::ScrollUp(n) => {
            state.scroll = state.scroll.saturating_sub(n);
        }
        Action::ScrollDown(n) => {
            let max_scroll =
                crate::components::sections::line_count(state.section).saturating_sub(1) as u16;
            state.scroll = state.scroll.saturating_add(n).min(max_scroll);
        }

        // --- Command palette ---
        Action::TogglePalette => {
            if state.mode == AppMode::CommandPalette {
                state.mode = AppMode::Normal;
                state.command_palette = None;
            } else {
                // A fresh session every time: empty query, cursor at 0.
                state.mode = AppMode::CommandPalette;
                state.command_palette = Some(CommandPaletteState::open());
                state.theme_selection = None;
            }
        }
        Action::PaletteInput(key) => {
            if let Some(cp) = &mut state.command_palette {
                use crossterm::event::KeyCode;
                match key.code {
                    KeyCode::Char(c) => {
                        cp.query.push(c);
                    }
                    KeyCode::Backspace => {
                        cp.query.pop();
                    }
                    _ => return None,
                }
                // The old cursor may index past the new filtered list;
                // always snap back to the top.
                cp.matches = super::command_palette::search_commands(&cp.query);
                cp.selected_index = 0;
            }
        }
        Action::PaletteNext => {
            if let Some(cp) = &mut state.command_palette {
                if !cp.matches.is_empty() {
                    cp.selected_index = (cp.selected_index + 1) % cp.matches.len();
                }
            }
        }
        Action::PalettePrev => {
            if let Some(cp) = &mut state.command_palette {
                if !cp.matches.is_empty() {
                    cp.selected_index =
                        (cp.selected_index + cp.matches.len() - 1) % cp.matches.len();
                }
            }
        }
        Action::PaletteHover(index) => {
            if let Some(cp) = &mut state.command_palette {
                if index < cp.matches.len() {
                    cp.selected_index = index;
                }
            }
        }
        Action::PaletteClick(index) => {
            if let Some(cp) = &mut state.command_palette {
                if index < cp.matches.len() {
                    cp.selected_index = index;
                    return confirm_selection(state);
                }
            }
        }
        Action::PaletteConfirm => {
            return confirm_selection(state);
        }

        // --- Palette command targets ---
        Action::OpenExternal(url) => {
            return Some(Command::OpenUrl(url.to_string()));
        }
        Action::ComposeMail => {
            return Some(Command::ComposeMail(PROFILE.email.to_string()));
        }
        Action::RequestResume => {
            set_status(state, "Resume download requested...".to_string());
        }

        // --- UI mode transitions ---
        Action::CancelMode => {
            state.mode = AppMode::Normal;
            state.command_palette = None;
            state.theme_selection = None;
            state.last_error = None;
        }
        Action::ToggleHelp => {
            state.mode = if state.mode == AppMode::Help {
                AppMode::Normal
            } else {
                AppMode::Help
            };
        }
        Action::EnterThemeSelection => {
            let mut selection = ThemeSelectionState::default();
            selection.selected_index = selection
                .themes
                .iter()
                .position(|t| *t == state.palette_type)
                .unwrap_or(0);
            state.mode = AppMode::ThemeSelection;
            state.theme_selection = Some(selection);
        }
        Action::SelectThemeNext => {
            if let Some(ts) = &mut state.theme_selection {
                ts.selected_index = (ts.selected_index + 1) % ts.themes.len();
            }
        }
        Action::SelectThemePrev => {
            if let Some(ts) = &mut state.theme_selection {
                ts.selected_index = (ts.selected_index + ts.themes.len() - 1) % ts.themes.len();
            }
        }
        Action::SwitchTheme(palette) => {
            state.palette_type = palette;
            state.theme = Theme::from_palette_type(palette);
            state.mode = AppMode::Normal;
            state.theme_selection = None;
            return Some(Command::PersistTheme(palette));
        }

        // --- Async results ---
        Action::OperationCompleted(result) => match result {
            Ok(msg) => set_status(state, msg),
            Err(err) => state.last_error = Some(err),
        },
    }
    None
}

/// Invoke the command under the cursor and close the palette. Out of range
/// or an empty filtered list is a strict no-op: nothing is invoked and the
/// palette stays open.
fn confirm_selection(state: &mut AppState) -> Option<Command> {
    let Some(cp) = &state.command_palette else {
        return None;
    };
    let Some(&cmd_idx) = cp.matches.get(cp.selected_index) else {
        return None;
    };
    let action = super::command_palette::commands()[cmd_idx].action.clone();

    state.command_palette = None;
    state.mode = AppMode::Normal;

    // Re-dispatch so section jumps stay pure and external targets surface
    // their Command.
    update(state, action)
}

fn set_status(state: &mut AppState, message: String) {
    state.status_message = Some(message);
    state.status_clear_time = Some(Instant::now() + STATUS_TTL);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::command_palette::{commands, search_commands};
    use crate::domain::models::Section;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn open_palette(state: &mut AppState) {
        update(state, Action::TogglePalette);
    }

    fn type_query(state: &mut AppState, text: &str) {
        for c in text.chars() {
            update(
                state,
                Action::PaletteInput(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
            );
        }
    }

    fn palette(state: &AppState) -> &CommandPaletteState {
        state.command_palette.as_ref().expect("palette open")
    }

    #[test]
    fn test_open_resets_session() {
        let mut state = AppState::default();
        open_palette(&mut state);

        assert_eq!(state.mode, AppMode::CommandPalette);
        assert_eq!(palette(&state).query, "");
        assert_eq!(palette(&state).selected_index, 0);
        assert_eq!(palette(&state).matches.len(), commands().len());
    }

    #[test]
    fn test_reopen_discards_previous_session() {
        let mut state = AppState::default();
        open_palette(&mut state);
        type_query(&mut state, "git");
        update(&mut state, Action::PaletteNext);

        update(&mut state, Action::TogglePalette); // close
        assert!(state.command_palette.is_none());
        assert_eq!(state.mode, AppMode::Normal);

        open_palette(&mut state);
        assert_eq!(palette(&state).query, "");
        assert_eq!(palette(&state).selected_index, 0);
        assert_eq!(palette(&state).matches.len(), 8);
    }

    #[test]
    fn test_query_change_resets_cursor() {
        let mut state = AppState::default();
        open_palette(&mut state);
        update(&mut state, Action::PaletteNext);
        update(&mut state, Action::PaletteNext);
        assert_eq!(palette(&state).selected_index, 2);

        type_query(&mut state, "n");
        assert_eq!(palette(&state).selected_index, 0);

        // Backspace is a query change too
        update(&mut state, Action::PaletteNext);
        update(
            &mut state,
            Action::PaletteInput(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)),
        );
        assert_eq!(palette(&state).selected_index, 0);
    }

    #[test]
    fn test_selection_wraps_cyclically() {
        let mut state = AppState::default();
        open_palette(&mut state);
        let n = palette(&state).matches.len();

        for _ in 0..n {
            update(&mut state, Action::PaletteNext);
        }
        assert_eq!(palette(&state).selected_index, 0);

        for _ in 0..n {
            update(&mut state, Action::PalettePrev);
        }
        assert_eq!(palette(&state).selected_index, 0);

        update(&mut state, Action::PalettePrev);
        assert_eq!(palette(&state).selected_index, n - 1);
    }

    #[test]
    fn test_cyclic_closure_from_every_start_index() {
        let mut state = AppState::default();
        open_palette(&mut state);
        let n = palette(&state).matches.len();

        for start in 0..n {
            update(&mut state, Action::PaletteHover(start));
            for _ in 0..n {
                update(&mut state, Action::PaletteNext);
            }
            assert_eq!(palette(&state).selected_index, start);

            for _ in 0..n {
                update(&mut state, Action::PalettePrev);
            }
            assert_eq!(palette(&state).selected_index, start);
        }
    }

    #[test]
    fn test_movement_on_empty_result_list_is_noop() {
        let mut state = AppState::default();
        open_palette(&mut state);
        type_query(&mut state, "zzz_no_match");
        assert!(palette(&state).matches.is_empty());

        update(&mut state, Action::PaletteNext);
        update(&mut state, Action::PalettePrev);
        assert_eq!(palette(&state).selected_index, 0);
        assert_eq!(state.mode, AppMode::CommandPalette);
    }

    #[test]
    fn test_confirm_on_empty_list_keeps_palette_open() {
        let mut state = AppState::default();
        open_palette(&mut state);
        type_query(&mut state, "zzz_no_match");

        let cmd = update(&mut state, Action::PaletteConfirm);
        assert!(cmd.is_none());
        assert_eq!(state.mode, AppMode::CommandPalette);
        assert!(state.command_palette.is_some());
    }

    #[test]
    fn test_confirm_external_command_closes_and_requests_open() {
        let mut state = AppState::default();
        open_palette(&mut state);
        type_query(&mut state, "git");

        let cmd = update(&mut state, Action::PaletteConfirm);
        assert_eq!(cmd, Some(Command::OpenUrl(PROFILE.github.to_string())));
        assert_eq!(state.mode, AppMode::Normal);
        assert!(state.command_palette.is_none());
    }

    #[test]
    fn test_confirm_navigation_command_jumps_section() {
        let mut state = AppState::default();
        state.scroll = 7;
        open_palette(&mut state);
        type_query(&mut state, "skills");

        let cmd = update(&mut state, Action::PaletteConfirm);
        assert!(cmd.is_none());
        assert_eq!(state.section, Section::Skills);
        assert_eq!(state.scroll, 0);
        assert_eq!(state.mode, AppMode::Normal);
    }

    #[test]
    fn test_confirm_resume_command_shows_notification() {
        let mut state = AppState::default();
        open_palette(&mut state);
        type_query(&mut state, "resume");

        let cmd = update(&mut state, Action::PaletteConfirm);
        assert!(cmd.is_none());
        assert_eq!(
            state.status_message.as_deref(),
            Some("Resume download requested...")
        );
        assert!(state.command_palette.is_none());
    }

    #[test]
    fn test_hover_sets_cursor_directly() {
        let mut state = AppState::default();
        open_palette(&mut state);

        update(&mut state, Action::PaletteHover(5));
        assert_eq!(palette(&state).selected_index, 5);

        // Out of range hover leaves the cursor alone
        update(&mut state, Action::PaletteHover(99));
        assert_eq!(palette(&state).selected_index, 5);
    }

    #[test]
    fn test_click_invokes_entry_and_closes() {
        let mut state = AppState::default();
        open_palette(&mut state);

        // Registry index 2 is "Navigate: Experience"
        let cmd = update(&mut state, Action::PaletteClick(2));
        assert!(cmd.is_none());
        assert_eq!(state.section, Section::Experience);
        assert_eq!(state.mode, AppMode::Normal);
        assert!(state.command_palette.is_none());
    }

    #[test]
    fn test_click_out_of_range_is_noop() {
        let mut state = AppState::default();
        open_palette(&mut state);
        type_query(&mut state, "git"); // one match

        let cmd = update(&mut state, Action::PaletteClick(3));
        assert!(cmd.is_none());
        assert_eq!(state.mode, AppMode::CommandPalette);
    }

    #[test]
    fn test_scenario_a_filter_narrows_to_github() {
        let mut state = AppState::default();
        open_palette(&mut state);
        assert_eq!(palette(&state).matches.len(), 8);
        assert_eq!(palette(&state).selected_index, 0);

        type_query(&mut state, "git");
        let matches = &palette(&state).matches;
        assert_eq!(matches.len(), 1);
        assert_eq!(commands()[matches[0]].label, "Open GitHub Profile");
        assert_eq!(palette(&state).selected_index, 0);
    }

    #[test]
    fn test_scenario_b_navigation_wraps_after_fourth_step() {
        let mut state = AppState::default();
        open_palette(&mut state);
        type_query(&mut state, "navigate");
        assert_eq!(palette(&state).matches.len(), 4);

        for _ in 0..3 {
            update(&mut state, Action::PaletteNext);
        }
        assert_eq!(palette(&state).selected_index, 3);
        update(&mut state, Action::PaletteNext);
        assert_eq!(palette(&state).selected_index, 0);
    }

    #[test]
    fn test_confirm_email_command_requests_compose() {
        let mut state = AppState::default();
        open_palette(&mut state);
        type_query(&mut state, "email");

        let cmd = update(&mut state, Action::PaletteConfirm);
        assert_eq!(cmd, Some(Command::ComposeMail(PROFILE.email.to_string())));
        assert_eq!(state.mode, AppMode::Normal);
        assert!(state.command_palette.is_none());
    }

    #[test]
    fn test_escape_discards_session() {
        let mut state = AppState::default();
        open_palette(&mut state);
        type_query(&mut state, "nav");

        update(&mut state, Action::CancelMode);
        assert_eq!(state.mode, AppMode::Normal);
        assert!(state.command_palette.is_none());
    }

    #[test]
    fn test_scroll_saturates_and_clamps() {
        let mut state = AppState::default();
        update(&mut state, Action::ScrollUp(5));
        assert_eq!(state.scroll, 0);

        update(&mut state, Action::ScrollDown(u16::MAX));
        let max =
            crate::components::sections::line_count(state.section).saturating_sub(1) as u16;
        assert_eq!(state.scroll, max);
    }

    #[test]
    fn test_section_cycling_resets_scroll() {
        let mut state = AppState::default();
        state.scroll = 3;
        update(&mut state, Action::NextSection);
        assert_eq!(state.section, Section::Skills);
        assert_eq!(state.scroll, 0);

        state.scroll = 3;
        update(&mut state, Action::PrevSection);
        assert_eq!(state.section, Section::About);
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn test_theme_switch_persists_choice() {
        let mut state = AppState::default();
        update(&mut state, Action::EnterThemeSelection);
        assert_eq!(state.mode, AppMode::ThemeSelection);

        update(&mut state, Action::SelectThemeNext);
        let cmd = update(
            &mut state,
            Action::SwitchTheme(crate::theme::PaletteType::Nord),
        );
        assert_eq!(
            cmd,
            Some(Command::PersistTheme(crate::theme::PaletteType::Nord))
        );
        assert_eq!(state.palette_type, crate::theme::PaletteType::Nord);
        assert_eq!(state.mode, AppMode::Normal);
    }

    #[test]
    fn test_operation_failure_surfaces_error() {
        let mut state = AppState::default();
        update(
            &mut state,
            Action::OperationCompleted(Err("launcher exploded".to_string())),
        );
        assert_eq!(state.last_error.as_deref(), Some("launcher exploded"));

        update(&mut state, Action::CancelMode);
        assert!(state.last_error.is_none());
    }

    #[test]
    fn test_search_results_agree_with_palette_state() {
        let mut state = AppState::default();
        open_palette(&mut state);
        type_query(&mut state, "external");
        assert_eq!(palette(&state).matches, search_commands("external"));
    }
}
