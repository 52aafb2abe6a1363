//! Semantic style builders.

use depcon_core::{ClientStatus, DeploymentStatus};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn error() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn success() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn selected() -> Style {
    Style::default()
        .fg(palette::SELECTED_FG)
        .bg(palette::SELECTED_BG)
}

/// Badge color for a client's online/offline state.
pub fn client_status(status: ClientStatus) -> Style {
    match status {
        ClientStatus::Online => Style::default().fg(palette::STATUS_GREEN),
        ClientStatus::Offline => Style::default().fg(palette::STATUS_OFF),
    }
}

/// Badge color for a deployment's lifecycle state.
pub fn deployment_status(status: DeploymentStatus) -> Style {
    match status {
        DeploymentStatus::Pending => Style::default().fg(palette::STATUS_YELLOW),
        DeploymentStatus::InProgress => Style::default().fg(palette::STATUS_BLUE),
        DeploymentStatus::Completed => Style::default().fg(palette::STATUS_GREEN),
        DeploymentStatus::Failed => Style::default().fg(palette::STATUS_RED),
    }
}

// --- Blocks ---
pub fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::BORDER_DIM))
}

pub fn panel_focused(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::BORDER_ACTIVE))
}
