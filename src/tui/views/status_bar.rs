//! Total line and status bar

use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::display::format_total;
use crate::tui::app::{App, Focus};

/// Render the total of the filter view
pub fn render_total(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let total = format_total(app.session.total(), &app.settings.currency_symbol);

    let line = Line::from(Span::styled(
        format!(" {}", total),
        palette.base().fg(palette.success).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line).style(palette.base()), area);
}

/// Render key hints, or the last status message
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();

    let hints = match app.focus {
        Focus::Table => "Enter select  a add  u update  d delete  / search  t theme  q quit",
        Focus::Amount | Focus::Category => {
            "Enter add  Ctrl+S update  Tab next field  Esc back"
        }
        Focus::Search => "type to filter  Enter/Esc back to table",
    };

    let mut spans = Vec::new();
    if app.read_only {
        spans.push(Span::styled(
            " READ ONLY ",
            palette.base().fg(palette.error).add_modifier(Modifier::BOLD),
        ));
    }
    if let Some(message) = &app.status_message {
        spans.push(Span::styled(
            format!(" {} ", message),
            palette.base().fg(palette.accent),
        ));
        spans.push(Span::styled("│", palette.muted_style()));
    }
    spans.push(Span::styled(format!(" {}", hints), palette.muted_style()));

    frame.render_widget(Paragraph::new(Line::from(spans)).style(palette.base()), area);
}
