use chrono::Datelike;

use crate::domain::content::{EDUCATION, PROFILE};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

pub struct ContactSection<'a> {
    pub theme: &'a Theme,
    pub scroll: u16,
}

#[must_use]
pub fn lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut out = Vec::new();

    out.push(Line::from(Span::styled(
        "0x1 // ACADEMIC_HISTORY",
        theme.accent,
    )));
    out.push(Line::from(""));
    for entry in EDUCATION {
        out.push(Line::from(Span::styled(entry.degree, theme.title)));
        out.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(entry.institution, theme.text),
        ]));
        out.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(entry.period, theme.period),
            Span::styled("  GPA: ", theme.dimmed),
            Span::styled(entry.grade, theme.accent),
        ]));
        out.push(Line::from(""));
    }

    out.push(Line::from(Span::styled("0x2 // CONTACT_SERVER", theme.accent)));
    out.push(Line::from(""));
    let row = |label: &'static str, value: &'static str, style| {
        Line::from(vec![
            Span::styled(format!("  {label:<9}"), theme.dimmed),
            Span::styled(value, style),
        ])
    };
    out.push(row("email", PROFILE.email, theme.link));
    out.push(row("phone", PROFILE.phone, theme.text));
    out.push(row("website", PROFILE.website, theme.link));
    out.push(row("github", PROFILE.github, theme.link));
    out.push(row("linkedin", PROFILE.linkedin, theme.link));
    out.push(Line::from(""));

    let year = chrono::Local::now().year();
    out.push(Line::from(Span::styled(
        format!("[ (C) {year} SAITEJA_KOTTAPALLY // VER: 2.1.0-LTS ]"),
        theme.dimmed,
    )));
    out.push(Line::from(Span::styled(
        "ENCRYPTED_WITH_256BIT_AES // SYSTEM_STABLE",
        theme.dimmed,
    )));

    out
}

impl Widget for ContactSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(lines(self.theme))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
