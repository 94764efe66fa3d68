use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(60, 70, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYBINDINGS ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let key_style = self.theme.footer_segment_key;
        let desc_style = self.theme.list_item;
        let category_style = self.theme.header_item;

        let entry = |key: &'static str, desc: &'static str| {
            Row::new(vec![
                Cell::from(Span::styled(key, key_style)),
                Cell::from(Span::styled(desc, desc_style)),
            ])
        };
        let category = |name: &'static str| {
            Row::new(vec![
                Cell::from(Span::styled(name, category_style)),
                Cell::from(""),
            ])
        };
        let blank = || Row::new(vec![Cell::from(""), Cell::from("")]);

        let rows = vec![
            category("Navigation"),
            entry(" 1-5", "Jump to section"),
            entry(" Tab / ]", "Next section"),
            entry(" S-Tab / [", "Previous section"),
            entry(" j / \u{2193}", "Scroll down"),
            entry(" k / \u{2191}", "Scroll up"),
            entry(" PgUp/PgDn", "Scroll fast"),
            blank(),
            category("Command Palette"),
            entry(" Ctrl+k", "Toggle palette"),
            entry(" \u{2191}\u{2193}", "Move selection (wraps)"),
            entry(" Enter", "Run selected command"),
            entry(" Esc", "Close palette"),
            blank(),
            category("General"),
            entry(" T", "Select theme"),
            entry(" ?", "Show this help"),
            entry(" Esc", "Close modal / clear error"),
            entry(" q", "Quit"),
        ];

        Table::new(rows, [Constraint::Percentage(30), Constraint::Percentage(70)])
            .block(block)
            .render(modal_area, buf);
    }
}
