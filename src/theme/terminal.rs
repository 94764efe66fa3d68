use super::palette::Palette;
use ratatui::style::Color;

/// The default scheme: the neon-green-on-black phosphor look of the
/// original site.
pub const TERMINAL_GREEN: Palette = Palette {
    base: Color::Rgb(5, 5, 5),
    mantle: Color::Rgb(10, 10, 10),
    crust: Color::Rgb(0, 0, 0),
    text: Color::Rgb(203, 213, 225),
    subtext: Color::Rgb(148, 163, 184),
    surface0: Color::Rgb(24, 26, 27),
    surface1: Color::Rgb(38, 40, 42),
    surface2: Color::Rgb(55, 58, 60),
    overlay: Color::Rgb(100, 116, 139),
    accent: Color::Rgb(0, 255, 65),
    blue: Color::Rgb(56, 189, 248),
    teal: Color::Rgb(45, 212, 191),
    green: Color::Rgb(0, 204, 51),
    yellow: Color::Rgb(250, 204, 21),
    peach: Color::Rgb(251, 146, 60),
    red: Color::Rgb(248, 113, 113),
    mauve: Color::Rgb(192, 132, 252),
};
