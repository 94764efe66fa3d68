use crate::domain::content::SKILL_CATEGORIES;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

pub struct SkillsSection<'a> {
    pub theme: &'a Theme,
    pub scroll: u16,
}

#[must_use]
pub fn lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut out = Vec::new();

    for category in SKILL_CATEGORIES {
        out.push(Line::from(vec![
            Span::styled("\u{258c} ", theme.accent),
            Span::styled(category.category.to_uppercase(), theme.title),
        ]));

        let mut chips: Vec<Span> = vec![Span::raw("  ")];
        for skill in category.skills {
            chips.push(Span::styled(format!(" {skill} "), theme.chip));
            chips.push(Span::raw(" "));
        }
        out.push(Line::from(chips));
        out.push(Line::from(""));
    }

    out
}

impl Widget for SkillsSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(lines(self.theme))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
