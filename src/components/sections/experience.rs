use crate::domain::content::EXPERIENCES;
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

pub struct ExperienceSection<'a> {
    pub theme: &'a Theme,
    pub scroll: u16,
}

#[must_use]
pub fn lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut out = Vec::new();

    for entry in EXPERIENCES {
        out.push(Line::from(Span::styled(entry.role, theme.title)));
        out.push(Line::from(vec![
            Span::styled(format!(" {} ", entry.company), theme.company),
            Span::raw("  "),
            Span::styled(entry.period.to_uppercase(), theme.period),
        ]));
        out.push(Line::from(""));

        for highlight in entry.highlights {
            out.push(Line::from(vec![
                Span::styled(format!("  {} ", glyphs::CHEVRON), theme.bullet),
                Span::styled(*highlight, theme.text),
            ]));
        }
        out.push(Line::from(""));
        out.push(Line::from(""));
    }

    out
}

impl Widget for ExperienceSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(lines(self.theme))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
