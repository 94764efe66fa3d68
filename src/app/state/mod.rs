use super::keymap::{KeyConfig, KeyMap};
use crate::domain::models::Section;
use std::sync::Arc;
use std::time::Instant;

pub mod command_palette;
pub mod theme;

// Re-exports
pub use command_palette::CommandPaletteState;
pub use theme::ThemeSelectionState;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Normal,         // Browsing the portfolio sections
    CommandPalette, // Filter/select overlay (Ctrl+K)
    Help,           // Keybinding overlay
    ThemeSelection, // Choosing a UI theme
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub should_quit: bool,
    pub mode: AppMode,

    // --- Page position ---
    pub section: Section,
    pub scroll: u16,

    // --- Feedback ---
    pub last_error: Option<String>,
    pub status_message: Option<String>, // "Opened GitHub profile."
    pub status_clear_time: Option<Instant>,

    // --- Decorative chrome ---
    pub clock: String,
    pub frame_count: u64,

    // --- Command Palette ---
    pub command_palette: Option<CommandPaletteState>,

    // --- Theme Selection ---
    pub theme_selection: Option<ThemeSelectionState>,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub palette_type: crate::theme::PaletteType,
    pub theme: crate::theme::Theme,
}

impl AppState {
    /// Startup state: keymap from config, persisted theme restored.
    #[must_use]
    pub fn new() -> Self {
        let ui_config = super::persistence::load_config();
        let palette_type = ui_config
            .theme
            .unwrap_or(crate::theme::PaletteType::TerminalGreen);
        Self {
            palette_type,
            theme: crate::theme::Theme::from_palette_type(palette_type),
            ..Default::default()
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            section: Section::About,
            scroll: 0,
            last_error: None,
            status_message: None,
            status_clear_time: None,
            clock: String::new(),
            frame_count: 0,
            command_palette: None,
            theme_selection: None,
            keymap: Arc::new(KeyMap::from_config(&KeyConfig::default())),
            palette_type: crate::theme::PaletteType::TerminalGreen,
            theme: crate::theme::Theme::default(),
        }
    }
}
