use crate::domain::models::Section;
use crate::theme::PaletteType;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Page Navigation ---
    SelectSection(Section), // Jump to an anchor (palette or number key)
    NextSection,
    PrevSection,
    ScrollUp(u16),
    ScrollDown(u16),

    // --- Command Palette ---
    TogglePalette,            // Ctrl+K from anywhere
    PaletteInput(crossterm::event::KeyEvent), // Query text edits
    PaletteNext,              // Cursor down (wraps)
    PalettePrev,              // Cursor up (wraps)
    PaletteConfirm,           // Invoke the selected command
    PaletteHover(usize),      // Mouse over an entry: cursor set directly
    PaletteClick(usize),      // Mouse click on an entry: invoke it

    // --- Palette Command Targets ---
    OpenExternal(&'static str), // Browser link (GitHub, LinkedIn, ...)
    ComposeMail,                // mailto: the profile address
    RequestResume,              // Notification only, nothing is downloaded

    // --- UI Mode Transitions ---
    CancelMode, // ESC key (close modal / clear error)
    ToggleHelp,
    EnterThemeSelection,
    SelectThemeNext,
    SelectThemePrev,
    SwitchTheme(PaletteType),

    // --- Async Results ---
    OperationCompleted(Result<String, String>),
}
