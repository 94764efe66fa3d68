use crate::app::state::AppState;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Top status bar: powerline segments on the left, palette hint and the
/// live clock on the right.
pub struct Header<'a> {
    pub state: &'a AppState,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let status_bg = self.theme.header_status.bg.unwrap_or(Color::Reset);
        let node_bg = self.theme.header_node.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);

        // Separator styles: fg = current segment bg, bg = next segment bg
        let sep_logo_status = Style::default().fg(logo_bg).bg(status_bg);
        let sep_status_node = Style::default().fg(status_bg).bg(node_bg);
        let sep_node_base = Style::default().fg(node_bg).bg(base_bg);

        let left = Line::from(vec![
            Span::styled(format!(" {} SAITEJA.SH ", glyphs::LOGO), self.theme.header_logo),
            Span::styled(glyphs::SEP_RIGHT, sep_logo_status),
            Span::styled(
                format!(" {} ONLINE ", glyphs::DOT),
                self.theme.header_status,
            ),
            Span::styled(glyphs::SEP_RIGHT, sep_status_node),
            Span::styled(" NODE: PORTFOLIO_V2 ", self.theme.header_node),
            Span::styled(glyphs::SEP_RIGHT, sep_node_base),
        ]);

        let right = Line::from(vec![
            Span::styled(" ^k ", self.theme.footer_segment_key),
            Span::styled(" command palette ", self.theme.header),
            Span::styled(format!(" {} ", self.state.clock), self.theme.header_item),
        ]);

        let padding = (area.width as usize)
            .saturating_sub(left.width())
            .saturating_sub(right.width());

        let mut spans = left.spans;
        spans.push(Span::styled(" ".repeat(padding), self.theme.header));
        spans.extend(right.spans);

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
