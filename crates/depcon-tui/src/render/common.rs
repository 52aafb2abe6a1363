//! Shared rendering helpers.

use chrono::{DateTime, Local, Utc};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::theme::styles;

/// Timestamps arrive in UTC; show them in the operator's local time.
pub(crate) fn format_time(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Inline error banner, rendered additively above the screen's content.
pub(crate) fn error_banner(frame: &mut Frame, message: &str, area: Rect) {
    let line = Line::styled(format!(" ✗ {message}"), styles::error());
    frame.render_widget(Paragraph::new(line), area);
}

pub(crate) fn loading(frame: &mut Frame, what: &str, area: Rect) {
    frame.render_widget(
        Paragraph::new(format!(" Loading {what}...")).style(styles::text_muted()),
        area,
    );
}

pub(crate) fn empty_hint(frame: &mut Frame, message: &str, area: Rect) {
    frame.render_widget(
        Paragraph::new(format!(" {message}")).style(styles::text_muted()),
        area,
    );
}

/// One banner line over the remaining content.
pub(crate) fn banner_layout(area: Rect) -> (Rect, Rect) {
    let [banner, content] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
    (banner, content)
}

/// Centered sub-rect for modal-style forms.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(40, 10, area);
        assert_eq!(rect, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_small_area() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect(40, 10, area);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 5);
    }
}
