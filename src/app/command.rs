use crate::theme::PaletteType;

/// Side effects requested by the reducer and executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    OpenUrl(String),
    ComposeMail(String),
    PersistTheme(PaletteType),
}
