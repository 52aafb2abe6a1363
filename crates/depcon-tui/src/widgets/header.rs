//! Main header: product name plus screen tabs (the navbar rendition).

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs, Widget},
};

use depcon_app::{AppState, Screen};

use crate::theme::{palette, styles};

/// Screens that get a tab, in tab order.
const TABS: [Screen; 4] = [
    Screen::Dashboard,
    Screen::Clients,
    Screen::Packages,
    Screen::Deployments,
];

pub struct MainHeader<'a> {
    state: &'a AppState,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette::BORDER_DIM));
        let inner = block.inner(area);
        block.render(area, buf);

        let [title_area, tabs_area] =
            Layout::horizontal([Constraint::Length(16), Constraint::Min(0)]).areas(inner);

        let title = Line::from(vec![
            Span::styled(" depcon ", styles::accent_bold()),
            Span::styled("▸", styles::text_muted()),
        ]);
        title.render(title_area, buf);

        // No tabs while unauthenticated: only the login form exists
        if self.state.screen == Screen::Login {
            return;
        }

        let titles: Vec<Line> = TABS
            .iter()
            .enumerate()
            .map(|(i, screen)| Line::from(format!(" {} {} ", i + 1, screen.title())))
            .collect();

        let selected = match self.state.screen {
            // The new-deployment form belongs to the deployments flow
            Screen::NewDeployment => 3,
            screen => TABS.iter().position(|s| *s == screen).unwrap_or(0),
        };

        Tabs::new(titles)
            .select(selected)
            .style(styles::text_secondary())
            .highlight_style(
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("│")
            .render(tabs_area, buf);
    }
}
