use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

/// Where the palette lands on screen. The mouse mapping in `app::input`
/// shares this so hover/click hit-testing agrees with what is drawn.
#[must_use]
pub fn palette_rect(area: Rect) -> Rect {
    centered_rect(60, 50, area)
}

#[must_use]
pub fn palette_contains(area: Rect, column: u16, row: u16) -> bool {
    palette_rect(area).contains(Position::new(column, row))
}

/// Map a screen position to a result-row index, if it falls inside the
/// results region. Row 0 is the first filtered entry; the caller still has
/// to range-check against the filtered list.
#[must_use]
pub fn entry_at(area: Rect, column: u16, row: u16) -> Option<usize> {
    let modal = palette_rect(area);
    if modal.width < 3 || modal.height < 5 {
        return None;
    }
    // One border row, then the query line and the separator.
    let results_top = modal.y + 3;
    let results_bottom = modal.y + modal.height - 1;
    let inside_x = column > modal.x && column < modal.x + modal.width - 1;
    if inside_x && row >= results_top && row < results_bottom {
        Some((row - results_top) as usize)
    } else {
        None
    }
}

pub struct CommandPaletteModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a crate::app::state::CommandPaletteState,
}

impl Widget for CommandPaletteModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = palette_rect(area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" COMMAND PALETTE ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("\u{2191}\u{2193}", self.theme.footer_segment_key),
                Span::raw(" navigate "),
                Span::styled("\u{21b5}", self.theme.footer_segment_key),
                Span::raw(" select "),
                Span::styled("^k", self.theme.footer_segment_key),
                Span::raw(" toggle "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let inner_area = block.inner(modal_area);
        block.render(modal_area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Query input
                Constraint::Length(1), // Separator
                Constraint::Min(0),    // Results
            ])
            .split(inner_area);

        // Query line with a block cursor
        let query_line = Line::from(vec![
            Span::styled(" > ", self.theme.prompt),
            Span::styled(&self.state.query, self.theme.text),
            Span::styled(
                crate::theme::glyphs::CURSOR,
                self.theme
                    .accent
                    .add_modifier(ratatui::style::Modifier::SLOW_BLINK),
            ),
        ]);
        buf.set_line(layout[0].x, layout[0].y, &query_line, layout[0].width);

        let separator = "\u{2500}".repeat(layout[1].width as usize);
        buf.set_string(layout[1].x, layout[1].y, separator, self.theme.border_focus);

        let commands = crate::app::command_palette::commands();
        let items: Vec<ListItem> = self
            .state
            .matches
            .iter()
            .enumerate()
            .map(|(i, &cmd_idx)| {
                let cmd = &commands[cmd_idx];
                let selected = i == self.state.selected_index;
                let style = if selected {
                    self.theme.list_selected
                } else {
                    self.theme.list_item
                };
                let prefix = if selected { "> " } else { "  " };

                ListItem::new(Line::from(vec![
                    Span::styled(prefix, style),
                    Span::styled(format!("{:<28}", cmd.label), style),
                    Span::styled(
                        format!(" {}", cmd.category.to_uppercase()),
                        self.theme
                            .dimmed
                            .add_modifier(ratatui::style::Modifier::DIM),
                    ),
                ]))
            })
            .collect();

        if items.is_empty() {
            let no_results = Line::from(vec![Span::styled(
                format!("  No results found for \"{}\"", self.state.query),
                self.theme.dimmed,
            )]);
            buf.set_line(layout[2].x, layout[2].y + 1, &no_results, layout[2].width);
        } else {
            List::new(items).render(layout[2], buf);
        }
    }
}
