use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
}

pub struct FooterGroup {
    pub name: &'static str,
    pub items: Vec<FooterItem>,
}

fn item(key: &'static str, desc: &'static str) -> FooterItem {
    FooterItem { key, desc }
}

/// Context-dependent hint groups, one set per mode.
#[must_use]
pub fn groups(mode: AppMode) -> Vec<FooterGroup> {
    match mode {
        AppMode::Normal => vec![
            FooterGroup {
                name: "nav",
                items: vec![
                    item("1-5", "section"),
                    item("tab", "next"),
                    item("j/k", "scroll"),
                ],
            },
            FooterGroup {
                name: "palette",
                items: vec![item("^k", "commands")],
            },
            FooterGroup {
                name: "ui",
                items: vec![item("T", "theme"), item("?", "help"), item("q", "quit")],
            },
        ],
        AppMode::CommandPalette => vec![FooterGroup {
            name: "palette",
            items: vec![
                item("\u{2191}\u{2193}", "navigate"),
                item("\u{21b5}", "select"),
                item("esc", "close"),
            ],
        }],
        AppMode::Help => vec![FooterGroup {
            name: "help",
            items: vec![item("esc", "close")],
        }],
        AppMode::ThemeSelection => vec![FooterGroup {
            name: "theme",
            items: vec![
                item("\u{2191}\u{2193}", "choose"),
                item("\u{21b5}", "apply"),
                item("esc", "cancel"),
            ],
        }],
    }
}

pub struct Footer<'a> {
    pub state: &'a AppState,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans: Vec<Span> = Vec::new();

        for group in groups(self.state.mode) {
            spans.push(Span::styled(
                format!(" {} ", group.name),
                self.theme.footer_group_name,
            ));
            for hint in group.items {
                spans.push(Span::styled(
                    format!(" {} ", hint.key),
                    self.theme.footer_segment_key,
                ));
                spans.push(Span::styled(
                    format!(" {} ", hint.desc),
                    self.theme.footer_segment_val,
                ));
            }
        }

        let left = Line::from(spans);

        // Transient status on the right; errors win over successes.
        let right = if let Some(err) = &self.state.last_error {
            Line::from(Span::styled(format!(" {err} "), self.theme.status_error))
        } else if let Some(msg) = &self.state.status_message {
            Line::from(Span::styled(format!(" {msg} "), self.theme.status_info))
        } else {
            Line::from("")
        };

        let padding = (area.width as usize)
            .saturating_sub(left.width())
            .saturating_sub(right.width());

        let mut spans = left.spans;
        spans.push(Span::styled(" ".repeat(padding), self.theme.footer));
        spans.extend(right.spans);

        Paragraph::new(Line::from(spans))
            .style(self.theme.footer)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mode_has_hints() {
        for mode in [
            AppMode::Normal,
            AppMode::CommandPalette,
            AppMode::Help,
            AppMode::ThemeSelection,
        ] {
            let groups = groups(mode);
            assert!(!groups.is_empty());
            assert!(groups.iter().all(|g| !g.items.is_empty()));
        }
    }
}
