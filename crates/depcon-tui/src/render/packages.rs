//! Packages table plus the add-package form.

use ratatui::layout::{Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Clear, Paragraph, Row, Table};
use ratatui::Frame;

use depcon_app::state::{PackageField, PackageForm};
use depcon_app::AppState;

use crate::theme::styles;

use super::common;

pub(crate) fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let (banner_area, table_area) = common::banner_layout(area);

    if let Some(error) = state.packages.list.error() {
        common::error_banner(frame, error, banner_area);
    }

    if state.packages.list.show_loading() {
        common::loading(frame, "packages", table_area);
    } else if let Some(packages) = state.packages.list.data() {
        if packages.is_empty() {
            common::empty_hint(frame, "No packages found", table_area);
        } else {
            let header =
                Row::new(["ID", "Name", "Version", "Created"]).style(styles::accent_bold());
            let rows: Vec<Row> = packages
                .iter()
                .map(|p| {
                    Row::new(vec![
                        Cell::from(p.id.to_string()),
                        Cell::from(p.name.clone()),
                        Cell::from(p.version.clone()),
                        Cell::from(common::format_time(p.created_at)),
                    ])
                })
                .collect();
            let table = Table::new(
                rows,
                [
                    Constraint::Length(6),
                    Constraint::Min(20),
                    Constraint::Length(12),
                    Constraint::Length(20),
                ],
            )
            .header(header)
            .column_spacing(2);
            frame.render_widget(table, table_area);
        }
    }

    // Form floats over the table
    if let Some(form) = &state.packages.form {
        render_form(frame, form, area);
    }
}

fn render_form(frame: &mut Frame, form: &PackageForm, area: Rect) {
    let card = common::centered_rect(48, 9, area);
    frame.render_widget(Clear, card);
    let block = styles::panel_focused("Add New Package");
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let mut lines = vec![
        Line::raw(""),
        field_line("Name", &form.name, form.focus == PackageField::Name),
        field_line("Version", &form.version, form.focus == PackageField::Version),
        Line::raw(""),
    ];
    if let Some(error) = &form.error {
        lines.push(Line::styled(format!("  {error}"), styles::error()));
    } else if form.submitting {
        lines.push(Line::styled("  Creating...", styles::text_muted()));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let cursor = if focused { "█" } else { "" };
    let label_style = if focused {
        styles::accent()
    } else {
        styles::text_secondary()
    };
    Line::from(vec![
        Span::styled(format!("  {label:>8}: "), label_style),
        Span::styled(format!("{value}{cursor}"), styles::text_primary()),
    ])
}
