//! Client machines table with status/OS filters.

use ratatui::layout::{Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table};
use ratatui::Frame;

use depcon_app::AppState;
use depcon_core::ClientFilter;

use crate::theme::styles;

use super::common;

pub(crate) fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let (filter_area, rest) = common::banner_layout(area);
    let (banner_area, table_area) = common::banner_layout(rest);

    frame.render_widget(
        Paragraph::new(filter_line(&state.clients.filter)),
        filter_area,
    );

    // Additive: the last known table stays under the banner
    if let Some(error) = state.clients.list.error() {
        common::error_banner(frame, error, banner_area);
    }

    if state.clients.list.show_loading() {
        common::loading(frame, "clients", table_area);
        return;
    }

    let Some(clients) = state.clients.list.data() else {
        return;
    };
    if clients.is_empty() {
        common::empty_hint(frame, "No clients found", table_area);
        return;
    }

    let header = Row::new(["Hostname", "IP Address", "Status", "OS", "Last Check-in"])
        .style(styles::accent_bold());
    let rows: Vec<Row> = clients
        .iter()
        .map(|c| {
            Row::new(vec![
                Cell::from(c.hostname.clone()),
                Cell::from(c.ip_address.clone()),
                Cell::from(Span::styled(c.status.label(), styles::client_status(c.status))),
                Cell::from(c.os_type.label()),
                Cell::from(common::format_time(c.last_checkin)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(18),
            Constraint::Length(16),
            Constraint::Length(8),
            Constraint::Length(9),
            Constraint::Length(20),
        ],
    )
    .header(header)
    .column_spacing(2);

    frame.render_widget(table, table_area);
}

fn filter_line(filter: &ClientFilter) -> Line<'static> {
    let status = filter
        .status
        .map(|s| s.label())
        .unwrap_or("All");
    let os = filter.os_type.map(|o| o.label()).unwrap_or("All");
    Line::from(vec![
        Span::styled(" Status: ", styles::text_secondary()),
        Span::styled(status.to_string(), active_style(filter.status.is_some())),
        Span::styled(" (s)", styles::text_muted()),
        Span::styled("   OS: ", styles::text_secondary()),
        Span::styled(os.to_string(), active_style(filter.os_type.is_some())),
        Span::styled(" (o)", styles::text_muted()),
    ])
}

fn active_style(set: bool) -> ratatui::style::Style {
    if set {
        styles::accent()
    } else {
        styles::text_primary()
    }
}
