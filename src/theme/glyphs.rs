//! Shared glyphs for the powerline-style chrome.

pub const SEP_RIGHT: &str = "\u{e0b0}";
pub const DOT: &str = "\u{25cf}";
pub const CHEVRON: &str = "\u{bb}";
pub const PROMPT: &str = "$";
pub const CURSOR: &str = "\u{2588}";
pub const LOGO: &str = "\u{2b22}";
