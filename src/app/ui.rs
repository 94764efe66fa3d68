use crate::app::state::{AppMode, AppState};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modals::helpers::dim_area;
use crate::components::modals::{
    CommandPaletteModal, ErrorModal, HelpModal, ThemeSelectionModal,
};
use crate::components::sections::{
    self, AboutSection, ContactSection, ExperienceSection, ProjectsSection, SkillsSection,
};
use crate::domain::models::Section;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Tabs, Widget},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub tabs: Rect,
    pub body: Rect,
    pub footer: Rect,
}

#[must_use]
pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Section tabs
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: main[0],
        tabs: main[1],
        body: main[2],
        footer: main[3],
    }
}

pub fn draw(f: &mut Frame, app_state: &AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let theme = &app_state.theme;
    let layout = get_layout(f.area());

    // --- Header ---
    if layout.header.width > 0 && layout.header.height > 0 {
        f.render_widget(
            Header {
                state: app_state,
                theme,
            },
            layout.header,
        );
    }

    // --- Section tabs ---
    if layout.tabs.width > 0 && layout.tabs.height > 0 {
        let titles: Vec<Line> = Section::ALL
            .iter()
            .map(|s| Line::from(Span::raw(s.label())))
            .collect();
        let tabs = Tabs::new(titles)
            .select(app_state.section.index())
            .style(theme.tab_inactive)
            .highlight_style(theme.tab_active)
            .divider(Span::styled("|", theme.dimmed));
        f.render_widget(tabs, layout.tabs);
    }

    // --- Body: current section inside its terminal window ---
    if layout.body.width > 2 && layout.body.height > 2 {
        let focused = app_state.mode == AppMode::Normal;
        let block = sections::window_block(app_state.section, theme, focused);
        let inner = block.inner(layout.body);
        f.render_widget(block, layout.body);

        let padded = Rect {
            x: inner.x + 1,
            y: inner.y,
            width: inner.width.saturating_sub(2),
            height: inner.height,
        };
        if padded.width > 0 && padded.height > 0 {
            render_section(f, app_state, padded);
        }
    }

    // --- Footer ---
    if layout.footer.width > 0 && layout.footer.height > 0 {
        f.render_widget(
            Footer {
                state: app_state,
                theme,
            },
            layout.footer,
        );
    }

    // --- Modal overlays ---
    let area = f.area();
    match app_state.mode {
        AppMode::CommandPalette => {
            if let Some(cp) = &app_state.command_palette {
                dim_area(f.buffer_mut(), area);
                CommandPaletteModal { theme, state: cp }.render(area, f.buffer_mut());
            }
        }
        AppMode::Help => {
            dim_area(f.buffer_mut(), area);
            HelpModal { theme }.render(area, f.buffer_mut());
        }
        AppMode::ThemeSelection => {
            if let Some(ts) = &app_state.theme_selection {
                dim_area(f.buffer_mut(), area);
                ThemeSelectionModal { theme, state: ts }.render(area, f.buffer_mut());
            }
        }
        AppMode::Normal => {}
    }

    // --- Error modal, above everything ---
    if let Some(err) = &app_state.last_error {
        ErrorModal {
            theme,
            message: err.as_str(),
        }
        .render(area, f.buffer_mut());
    }
}

fn render_section(f: &mut Frame, app_state: &AppState, area: Rect) {
    let theme = &app_state.theme;
    match app_state.section {
        Section::About => f.render_widget(
            AboutSection {
                theme,
                scroll: app_state.scroll,
                frame_count: app_state.frame_count,
            },
            area,
        ),
        Section::Skills => f.render_widget(
            SkillsSection {
                theme,
                scroll: app_state.scroll,
            },
            area,
        ),
        Section::Experience => f.render_widget(
            ExperienceSection {
                theme,
                scroll: app_state.scroll,
            },
            area,
        ),
        Section::Projects => f.render_widget(
            ProjectsSection {
                theme,
                scroll: app_state.scroll,
            },
            area,
        ),
        Section::Contact => f.render_widget(
            ContactSection {
                theme,
                scroll: app_state.scroll,
            },
            area,
        ),
    }
}
