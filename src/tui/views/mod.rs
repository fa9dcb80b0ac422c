//! TUI Views module
//!
//! Header, input form, search bar, expense table, total line, status bar and
//! the alert overlay.

pub mod expense_table;
pub mod form;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::app::App;
use super::layout::AppLayout;
use super::theme::toggle_label;
use super::widgets::{alert_area, AlertDialog};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = app.palette();
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header);
    form::render(frame, app, layout.form);
    form::render_search(frame, app, layout.search);
    expense_table::render(frame, app, layout.table);
    status_bar::render_total(frame, app, layout.total);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(alert) = &app.alert {
        let area = alert_area(frame.area());
        frame.render_widget(AlertDialog::new(alert, palette), area);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let line = Line::from(vec![
        Span::styled(" Expense Manager ", palette.title_style()),
        Span::styled(
            format!("  [t] {}", toggle_label(app.session.theme())),
            palette.muted_style(),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).style(palette.base()), area);
}
