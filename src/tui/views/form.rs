//! Amount/category form and the search bar

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
    Frame,
};

use crate::tui::app::{App, Focus};
use crate::tui::layout::FormLayout;
use crate::tui::widgets::InputField;

/// Render the amount and category fields
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let form = FormLayout::new(area);

    let editing = app.session.selected().is_some();
    let amount_title = if editing { " Amount (editing) " } else { " Amount " };

    let fields = [
        (form.amount, amount_title, &app.amount_input, Focus::Amount, "e.g. 12.50"),
        (form.category, " Category ", &app.category_input, Focus::Category, "e.g. Food"),
    ];

    for (rect, title, input, focus, placeholder) in fields {
        let focused = app.focus == focus;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_style(palette.title_style())
            .border_style(palette.border_style(focused))
            .style(palette.base());
        let inner = block.inner(rect);
        frame.render_widget(block, rect);
        frame.render_widget(
            InputField::new(input, "", palette)
                .placeholder(placeholder)
                .focused(focused),
            inner,
        );
    }
}

/// Render the search bar
pub fn render_search(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let focused = app.focus == Focus::Search;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Search ")
        .title_style(palette.title_style())
        .border_style(palette.border_style(focused))
        .style(palette.base());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        InputField::new(&app.search_input, "Category", palette)
            .placeholder("type to filter (/)")
            .focused(focused),
        inner,
    );
}
