//! Expense table view
//!
//! Shows the filter view. The highlighted row follows the cursor; the
//! selected expense (picked for edit or delete) carries a marker.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::tui::app::{App, Focus};

/// Render the expense table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let focused = app.focus == Focus::Table;

    let title = if app.session.search().is_empty() {
        " Expenses ".to_string()
    } else {
        format!(" Expenses matching '{}' ", app.session.search())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(palette.title_style())
        .border_style(palette.border_style(focused))
        .style(palette.base());

    if app.session.visible_len() == 0 {
        let message = if app.session.store().is_empty() {
            "No expenses yet. Press 'a' to add one."
        } else {
            "No expenses match the search."
        };
        let text = Paragraph::new(Line::styled(message, palette.muted_style()))
            .block(block)
            .style(palette.base());
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(2),  // Selection marker
        Constraint::Length(5),  // Row number
        Constraint::Length(16), // Amount
        Constraint::Min(10),    // Category
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("#").style(bold),
        Cell::from("Amount").style(bold),
        Cell::from("Category").style(bold),
    ])
    .style(Style::default().fg(palette.accent))
    .height(1);

    let symbol = app.settings.currency_symbol.as_str();
    let selected_id = app.session.selected().map(|e| e.id);

    let rows: Vec<Row> = app
        .session
        .visible()
        .enumerate()
        .map(|(i, expense)| {
            let is_selected = selected_id == Some(expense.id);
            let marker = if is_selected { "●" } else { "" };
            let style = if is_selected {
                Style::default().fg(palette.selected)
            } else {
                Style::default().fg(palette.foreground)
            };

            Row::new(vec![
                Cell::from(marker),
                Cell::from(format!("{}", i + 1)),
                Cell::from(Line::from(expense.amount.format_with_symbol(symbol)).right_aligned()),
                Cell::from(expense.category.clone()),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(palette.highlight_style())
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.table_row));

    frame.render_stateful_widget(table, area, &mut state);
}
