/// Transient palette session. Rebuilt from scratch every time the palette
/// opens; dropped when it closes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandPaletteState {
    pub query: String,
    pub matches: Vec<usize>, // Indices into the fixed command registry
    pub selected_index: usize,
}

impl CommandPaletteState {
    /// Fresh session: empty query, cursor at 0, every command matching.
    #[must_use]
    pub fn open() -> Self {
        Self {
            matches: crate::app::command_palette::search_commands(""),
            ..Default::default()
        }
    }
}
