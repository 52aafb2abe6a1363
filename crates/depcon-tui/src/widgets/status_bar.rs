//! Status bar: session indicator, backend location, and key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use depcon_app::{AppState, Screen};

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static str {
        match self.state.screen {
            Screen::Login => "Enter login · Tab field · Ctrl+C quit",
            Screen::Dashboard => "1-4 screens · n new deployment · r refresh · L logout · q quit",
            Screen::Clients => "s status · o os · 1-4 screens · r refresh · q quit",
            Screen::Packages => {
                if self.state.packages.form.is_some() {
                    "Enter create · Tab field · Esc cancel"
                } else {
                    "a add package · 1-4 screens · r refresh · q quit"
                }
            }
            Screen::Deployments => "auto-refresh 5s · n new deployment · 1-4 screens · q quit",
            Screen::NewDeployment => "Tab list · Up/Down select · Enter create · Esc back",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let session = if self.state.session.is_authenticated() {
            Span::styled("● ", styles::success())
        } else {
            Span::styled("○ ", styles::text_muted())
        };

        let line = Line::from(vec![
            session,
            Span::styled(self.state.server.as_str(), styles::text_secondary()),
            Span::raw("  "),
            Span::styled(self.hints(), styles::text_muted()),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
