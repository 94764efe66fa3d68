use crate::domain::models::Section;
use crate::theme::{glyphs, Theme};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};

pub mod about;
pub mod contact;
pub mod experience;
pub mod projects;
pub mod skills;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use experience::ExperienceSection;
pub use projects::ProjectsSection;
pub use skills::SkillsSection;

/// Logical line count of a section body, used to clamp scrolling. Wrapped
/// lines can exceed this on narrow terminals; close enough for a bound.
#[must_use]
pub fn line_count(section: Section) -> usize {
    let theme = Theme::default();
    match section {
        Section::About => about::lines(&theme, 0).len(),
        Section::Skills => skills::lines(&theme).len(),
        Section::Experience => experience::lines(&theme).len(),
        Section::Projects => projects::lines(&theme).len(),
        Section::Contact => contact::lines(&theme).len(),
    }
}

/// Terminal-window chrome: fake traffic lights, uppercase window title,
/// STD_OUT tag on the right.
#[must_use]
pub fn window_block(section: Section, theme: &Theme, focused: bool) -> Block<'static> {
    let dot = |color: Color| Span::styled(glyphs::DOT, Style::default().fg(color).add_modifier(Modifier::DIM));

    let title = Line::from(vec![
        Span::raw(" "),
        dot(Color::Red),
        Span::raw(" "),
        dot(Color::Yellow),
        Span::raw(" "),
        dot(Color::Green),
        Span::raw("  "),
        Span::styled(
            section.window_title().to_uppercase(),
            if focused {
                theme.header_active
            } else {
                theme.header_item
            },
        ),
        Span::raw(" "),
    ]);

    Block::default()
        .title(title)
        .title_top(Line::from(Span::styled(" STD_OUT ", theme.dimmed)).right_aligned())
        .title_bottom(
            Line::from(Span::styled(
                format!(" [{}/{}] ", section.index() + 1, Section::ALL.len()),
                theme.dimmed,
            ))
            .right_aligned(),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            theme.border_focus
        } else {
            theme.border
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_section_has_content() {
        for section in Section::ALL {
            assert!(line_count(*section) > 0, "{section:?} renders nothing");
        }
    }
}
