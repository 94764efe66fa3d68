use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod glyphs;
pub mod gruvbox;
pub mod nord;
pub mod palette;
pub mod terminal;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header: Style,
    pub header_logo: Style,
    pub header_status: Style,
    pub header_node: Style,
    pub header_item: Style,
    pub header_active: Style,

    pub footer: Style,
    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer_group_name: Style,

    pub tab_active: Style,
    pub tab_inactive: Style,

    pub accent: Style,
    pub badge: Style,
    pub prompt: Style,
    pub title: Style,
    pub text: Style,
    pub dimmed: Style,

    pub chip: Style,
    pub bullet: Style,
    pub company: Style,
    pub period: Style,
    pub link: Style,
    pub gauge: Style,

    pub list_selected: Style,
    pub list_item: Style,
    pub highlight: Style,

    pub status_info: Style,
    pub status_error: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    TerminalGreen,
    CatppuccinMocha,
    Nord,
    Gruvbox,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::TerminalGreen => "Terminal Green",
            PaletteType::CatppuccinMocha => "Catppuccin (Mocha)",
            PaletteType::Nord => "Nord",
            PaletteType::Gruvbox => "Gruvbox",
        }
    }

    #[must_use]
    pub fn all() -> &'static [PaletteType] {
        &[
            PaletteType::TerminalGreen,
            PaletteType::CatppuccinMocha,
            PaletteType::Nord,
            PaletteType::Gruvbox,
        ]
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::TerminalGreen => Self::from_palette(&terminal::TERMINAL_GREEN),
            PaletteType::CatppuccinMocha => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
            PaletteType::Gruvbox => Self::from_palette(&gruvbox::GRUVBOX),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.accent),

            header: Style::default().bg(p.crust).fg(p.subtext),
            header_logo: Style::default()
                .bg(p.accent)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_status: Style::default()
                .bg(p.surface1)
                .fg(p.accent)
                .add_modifier(Modifier::BOLD),
            header_node: Style::default().bg(p.surface0).fg(p.subtext),
            header_item: Style::default().bg(p.surface0).fg(p.text),
            header_active: Style::default()
                .bg(p.accent)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            footer: Style::default().bg(p.crust).fg(p.subtext),
            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.accent)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.crust).fg(p.text),
            footer_group_name: Style::default().fg(p.overlay).add_modifier(Modifier::DIM),

            tab_active: Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(p.overlay),

            accent: Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
            badge: Style::default()
                .bg(dim_color(p.accent, 0.25))
                .fg(p.accent)
                .add_modifier(Modifier::BOLD),
            prompt: Style::default().fg(p.accent),
            title: Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            text: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.overlay).add_modifier(Modifier::DIM),

            chip: Style::default().fg(p.subtext).bg(p.surface0),
            bullet: Style::default().fg(p.accent).add_modifier(Modifier::DIM),
            company: Style::default()
                .fg(p.accent)
                .bg(dim_color(p.accent, 0.12))
                .add_modifier(Modifier::BOLD),
            period: Style::default().fg(p.overlay),
            link: Style::default().fg(p.blue).add_modifier(Modifier::UNDERLINED),
            gauge: Style::default().fg(p.accent).bg(p.surface0),

            list_selected: Style::default()
                .bg(p.accent)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            highlight: Style::default().bg(p.surface0).add_modifier(Modifier::BOLD),

            status_info: Style::default()
                .bg(p.accent)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::TerminalGreen)
    }
}
