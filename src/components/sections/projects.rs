use crate::domain::content::PROJECTS;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

pub struct ProjectsSection<'a> {
    pub theme: &'a Theme,
    pub scroll: u16,
}

#[must_use]
pub fn lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut out = Vec::new();

    for project in PROJECTS {
        out.push(Line::from(vec![
            Span::styled("\u{25b8} ", theme.accent),
            Span::styled(project.title.to_uppercase(), theme.title),
        ]));
        out.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(project.description, theme.text),
        ]));

        let mut tags: Vec<Span> = vec![Span::raw("  ")];
        for tech in project.technologies {
            tags.push(Span::styled(format!("[{tech}]"), theme.dimmed));
            tags.push(Span::raw(" "));
        }
        out.push(Line::from(tags));

        if let Some(github) = project.links.github {
            out.push(Line::from(vec![
                Span::styled("  github  ", theme.dimmed),
                Span::styled(github, theme.link),
            ]));
        }
        if let Some(youtube) = project.links.youtube {
            out.push(Line::from(vec![
                Span::styled("  youtube ", theme.dimmed),
                Span::styled(youtube, theme.link),
            ]));
        }
        out.push(Line::from(""));
    }

    out
}

impl Widget for ProjectsSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(lines(self.theme))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
