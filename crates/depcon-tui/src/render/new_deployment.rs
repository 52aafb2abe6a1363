//! New-deployment form: pick an online client and a package.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use depcon_app::state::DeployField;
use depcon_app::{AppState, Loadable};

use crate::theme::styles;

use super::common;

pub(crate) fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let (banner_area, rest) = common::banner_layout(area);
    let [lists_area, hint_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(rest);
    let [clients_area, packages_area] =
        Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(lists_area);

    let nd = &state.new_deployment;

    // Form validation errors take the banner; otherwise surface fetch errors
    if let Some(error) = nd
        .error
        .as_deref()
        .or_else(|| nd.clients.error())
        .or_else(|| nd.packages.error())
    {
        common::error_banner(frame, error, banner_area);
    }

    render_pick_list(
        frame,
        "Client (online)",
        &nd.clients,
        |c| format!("{} ({})", c.hostname, c.ip_address),
        nd.client_idx,
        nd.focus == DeployField::Clients,
        clients_area,
    );
    render_pick_list(
        frame,
        "Package",
        &nd.packages,
        |p| format!("{} v{}", p.name, p.version),
        nd.package_idx,
        nd.focus == DeployField::Packages,
        packages_area,
    );

    let hint = if nd.submitting {
        " Creating deployment..."
    } else {
        " Enter deploys the selected package to the selected client"
    };
    frame.render_widget(
        Paragraph::new(hint).style(styles::text_muted()),
        hint_area,
    );
}

fn render_pick_list<T>(
    frame: &mut Frame,
    title: &str,
    cell: &Loadable<Vec<T>>,
    label: impl Fn(&T) -> String,
    selected: usize,
    focused: bool,
    area: Rect,
) {
    let block = if focused {
        styles::panel_focused(title)
    } else {
        styles::panel(title)
    };
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if cell.show_loading() {
        frame.render_widget(
            Paragraph::new(" Loading...").style(styles::text_muted()),
            inner,
        );
        return;
    }

    let items = cell.data().map(Vec::as_slice).unwrap_or(&[]);
    if items.is_empty() {
        frame.render_widget(
            Paragraph::new(" None available").style(styles::text_muted()),
            inner,
        );
        return;
    }

    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if i == selected {
                Line::styled(format!("▸ {}", label(item)), styles::selected())
            } else {
                Line::styled(format!("  {}", label(item)), styles::text_primary())
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}
