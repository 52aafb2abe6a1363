//! Login form.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use depcon_app::state::LoginField;
use depcon_app::AppState;

use crate::theme::styles;

use super::common::centered_rect;

pub(crate) fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let card = centered_rect(46, 9, area);
    let block = styles::panel_focused("Login");
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let login = &state.login;
    let mut lines = vec![
        Line::raw(""),
        field_line(
            "Username",
            &login.username,
            login.focus == LoginField::Username,
            false,
        ),
        field_line(
            "Password",
            &login.password,
            login.focus == LoginField::Password,
            true,
        ),
        Line::raw(""),
    ];

    if let Some(error) = &login.error {
        lines.push(Line::styled(format!("  {error}"), styles::error()));
    } else if login.submitting {
        lines.push(Line::styled("  Logging in...", styles::text_muted()));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn field_line(label: &str, value: &str, focused: bool, mask: bool) -> Line<'static> {
    let shown = if mask {
        "*".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let cursor = if focused { "█" } else { "" };
    let label_style = if focused {
        styles::accent()
    } else {
        styles::text_secondary()
    };
    Line::from(vec![
        Span::styled(format!("  {label:>8}: "), label_style),
        Span::styled(format!("{shown}{cursor}"), styles::text_primary()),
    ])
}
