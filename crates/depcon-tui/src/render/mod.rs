//! Main render/view function (View in TEA pattern)

mod clients;
mod common;
mod dashboard;
mod deployments;
mod login;
mod new_deployment;
mod packages;

use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use depcon_app::{AppState, Screen};

use crate::widgets::{MainHeader, StatusBar};

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: reads state, never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let [header_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(MainHeader::new(state), header_area);

    match state.screen {
        Screen::Login => login::render(frame, state, body_area),
        Screen::Dashboard => dashboard::render(frame, state, body_area),
        Screen::Clients => clients::render(frame, state, body_area),
        Screen::Packages => packages::render(frame, state, body_area),
        Screen::Deployments => deployments::render(frame, state, body_area),
        Screen::NewDeployment => new_deployment::render(frame, state, body_area),
    }

    frame.render_widget(StatusBar::new(state), status_area);
}
