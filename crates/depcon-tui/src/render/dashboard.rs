//! Dashboard: three aggregate cards, one per backing list.
//!
//! Each card renders from its own fetch cell, so a failed list shows its
//! error while the other two keep their counts.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use depcon_app::{AppState, Loadable};

use crate::theme::styles;

pub(crate) fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let [cards_area, hint_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    let [clients_area, packages_area, deployments_area] = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas(cards_area);

    render_card(frame, "Clients", &state.dashboard.clients, clients_area, |s| {
        vec![
            count_line("Total", s.total, styles::text_primary()),
            count_line("Online", s.online, styles::success()),
            count_line("Offline", s.offline, styles::text_muted()),
        ]
    });

    render_card(
        frame,
        "Packages",
        &state.dashboard.packages,
        packages_area,
        |s| vec![count_line("Total", s.total, styles::text_primary())],
    );

    render_card(
        frame,
        "Deployments",
        &state.dashboard.deployments,
        deployments_area,
        |s| {
            vec![
                count_line("Total", s.total, styles::text_primary()),
                count_line("Pending", s.pending, styles::deployment_status(depcon_core::DeploymentStatus::Pending)),
                count_line("In Progress", s.in_progress, styles::deployment_status(depcon_core::DeploymentStatus::InProgress)),
                count_line("Completed", s.completed, styles::deployment_status(depcon_core::DeploymentStatus::Completed)),
                count_line("Failed", s.failed, styles::deployment_status(depcon_core::DeploymentStatus::Failed)),
            ]
        },
    );

    frame.render_widget(
        Paragraph::new(" Press n to start a new deployment").style(styles::text_muted()),
        hint_area,
    );
}

fn render_card<T>(
    frame: &mut Frame,
    title: &str,
    cell: &Loadable<T>,
    area: Rect,
    rows: impl FnOnce(&T) -> Vec<Line<'static>>,
) {
    let block = styles::panel(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    if cell.show_loading() {
        lines.push(Line::styled(" Loading...", styles::text_muted()));
    }
    if let Some(data) = cell.data() {
        lines.extend(rows(data));
    }
    if let Some(error) = cell.error() {
        lines.push(Line::styled(format!(" ✗ {error}"), styles::error()));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn count_line(label: &str, value: usize, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {label:<12}"), styles::text_secondary()),
        Span::styled(value.to_string(), style),
    ])
}
