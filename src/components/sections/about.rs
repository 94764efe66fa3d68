use crate::domain::content::PROFILE;
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Widget, Wrap},
};

/// Hero section: login banner, title, summary, quick links. A decorative
/// "system resources" panel rides along on wide terminals.
pub struct AboutSection<'a> {
    pub theme: &'a Theme,
    pub scroll: u16,
    pub frame_count: u64,
}

#[must_use]
pub fn lines(theme: &Theme, frame_count: u64) -> Vec<Line<'static>> {
    // 250ms ticks: on for a second, off for a second
    let cursor = if frame_count % 8 < 4 {
        glyphs::CURSOR
    } else {
        " "
    };

    vec![
        Line::from(vec![
            Span::styled(" AUTH_SUCCESS ", theme.badge),
            Span::raw("  "),
            Span::styled("saiteja@sre:~", theme.prompt),
            Span::styled(format!("{} ", glyphs::PROMPT), theme.prompt),
            Span::styled("whoami --bio", theme.text),
        ]),
        Line::from(""),
        Line::from(Span::styled("DEVOPS ENGINEER", theme.title)),
        Line::from(Span::styled("& INFRA ARCHITECT", theme.accent)),
        Line::from(""),
        Line::from(vec![
            Span::styled(PROFILE.summary, theme.text),
            Span::raw(" "),
            Span::styled(cursor, theme.accent),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{} list_experience", glyphs::PROMPT), theme.accent),
            Span::styled("   press 3, or ^k and type \"experience\"", theme.dimmed),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("github   ", theme.dimmed),
            Span::styled(PROFILE.github, theme.link),
        ]),
        Line::from(vec![
            Span::styled("linkedin ", theme.dimmed),
            Span::styled(PROFILE.linkedin, theme.link),
        ]),
    ]
}

impl Widget for AboutSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (text_area, panel_area) = if area.width >= 96 {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(0), Constraint::Length(36)])
                .split(area);
            (chunks[0], Some(chunks[1]))
        } else {
            (area, None)
        };

        Paragraph::new(lines(self.theme, self.frame_count))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(text_area, buf);

        if let Some(panel_area) = panel_area {
            render_system_panel(self.theme, panel_area, buf);
        }
    }
}

/// Fixed gauges and identity rows; pure decoration from the original site.
fn render_system_panel(theme: &Theme, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title(Line::from(Span::styled(
            " SYSTEM_RESOURCES ",
            theme.header_item,
        )))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border);

    let inner = block.inner(area);
    block.render(area, buf);
    if inner.width < 10 || inner.height < 7 {
        return;
    }

    let row = |label: &'static str, value: &'static str| {
        Line::from(vec![
            Span::styled(format!("{label:<7}"), theme.dimmed),
            Span::styled(value, theme.text),
        ])
    };

    let rows = Paragraph::new(vec![
        row("NAME", "SAITEJA K."),
        row("ROLE", "SRE / DEVOPS"),
        row("ZONE", "AP-SOUTH-1"),
        row("SHELL", "ZSH"),
        Line::from(""),
        Line::from(Span::styled("CPU_LOAD", theme.dimmed)),
    ]);
    rows.render(
        Rect {
            x: inner.x + 1,
            y: inner.y,
            width: inner.width.saturating_sub(2),
            height: inner.height.min(6),
        },
        buf,
    );

    let gauge_area = Rect {
        x: inner.x + 1,
        y: inner.y + 6,
        width: inner.width.saturating_sub(2),
        height: 1,
    };
    if gauge_area.y < inner.y + inner.height {
        Gauge::default()
            .gauge_style(theme.gauge)
            .ratio(0.12)
            .label(Span::styled("12%", theme.accent))
            .render(gauge_area, buf);
    }
}
