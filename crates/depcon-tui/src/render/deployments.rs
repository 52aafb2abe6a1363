//! Deployments table, refreshed by the 5-second poll while visible.

use ratatui::layout::{Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Cell, Paragraph, Row, Table};
use ratatui::Frame;

use depcon_app::AppState;

use crate::theme::styles;

use super::common;

pub(crate) fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let (banner_area, table_area) = common::banner_layout(area);

    if let Some(error) = state.deployments.list.error() {
        common::error_banner(frame, error, banner_area);
    } else if state.deployments.list.is_in_flight() && state.deployments.list.data().is_some() {
        // Background refetch indicator; the table below stays put
        frame.render_widget(
            Paragraph::new(" Refreshing...").style(styles::text_muted()),
            banner_area,
        );
    }

    if state.deployments.list.show_loading() {
        common::loading(frame, "deployments", table_area);
        return;
    }

    let Some(deployments) = state.deployments.list.data() else {
        return;
    };
    if deployments.is_empty() {
        common::empty_hint(frame, "No deployments found", table_area);
        return;
    }

    let header = Row::new(["ID", "Client", "Package", "Status", "Created", "Updated"])
        .style(styles::accent_bold());
    let rows: Vec<Row> = deployments
        .iter()
        .map(|d| {
            Row::new(vec![
                Cell::from(d.id.to_string()),
                Cell::from(d.client_hostname.clone()),
                Cell::from(format!("{} v{}", d.package_name, d.package_version)),
                Cell::from(Span::styled(
                    d.status.label(),
                    styles::deployment_status(d.status),
                )),
                Cell::from(common::format_time(d.created_at)),
                Cell::from(common::format_time(d.updated_at)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Min(16),
            Constraint::Min(18),
            Constraint::Length(12),
            Constraint::Length(20),
            Constraint::Length(20),
        ],
    )
    .header(header)
    .column_spacing(2);

    frame.render_widget(table, table_area);
}
