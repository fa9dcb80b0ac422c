//! Blocking alert dialog
//!
//! Every failed user action ends up here as a single titled message that must
//! be dismissed before the next action.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::error::ExpenseError;
use crate::tui::theme::Palette;

/// Title and message of an alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    /// Extra hint for recovery, if any
    pub hint: Option<String>,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Build the alert for a failed action
    pub fn from_error(error: &ExpenseError) -> Self {
        let hint = match error {
            ExpenseError::NoSelection(_) => Some("Pick a row with Enter first"),
            ExpenseError::FileIo(_) => {
                Some("Changes are kept in memory until the next successful save")
            }
            ExpenseError::FileFormat { .. } => {
                Some("Only the lines before the bad one were loaded; changes are disabled")
            }
            _ => None,
        };

        Self {
            title: error.title().to_string(),
            message: error.message(),
            hint: hint.map(str::to_string),
        }
    }
}

/// Widget for rendering an alert
pub struct AlertDialog<'a> {
    alert: &'a Alert,
    palette: Palette,
}

impl<'a> AlertDialog<'a> {
    pub fn new(alert: &'a Alert, palette: Palette) -> Self {
        Self { alert, palette }
    }
}

impl Widget for AlertDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = self.palette;
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .style(palette.base())
            .border_style(Style::default().fg(palette.error).bg(palette.background))
            .title(format!(" {} ", self.alert.title))
            .title_style(
                Style::default()
                    .fg(palette.error)
                    .bg(palette.background)
                    .add_modifier(Modifier::BOLD),
            );

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Min(1),    // Message
                Constraint::Length(1), // Hint
                Constraint::Length(1), // Close hint
            ])
            .split(inner);

        Paragraph::new(self.alert.message.as_str())
            .style(palette.base())
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        if let Some(hint) = &self.alert.hint {
            Paragraph::new(hint.as_str())
                .style(palette.muted_style())
                .render(chunks[1], buf);
        }

        Paragraph::new("Press Enter or Esc to close")
            .style(palette.muted_style())
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}

/// Calculate the area for an alert (centered in parent)
pub fn alert_area(parent: Rect) -> Rect {
    let width = ((u32::from(parent.width) * 60 / 100) as u16)
        .clamp(30, 70)
        .min(parent.width);
    let height = 9.min(parent.height);

    let x = parent.x + (parent.width - width) / 2;
    let y = parent.y + (parent.height - height) / 2;

    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_from_validation_error() {
        let alert = Alert::from_error(&ExpenseError::Validation("Please fill all fields".into()));

        assert_eq!(alert.title, "Input Error");
        assert_eq!(alert.message, "Please fill all fields");
        assert!(alert.hint.is_none());
    }

    #[test]
    fn test_alert_from_no_selection() {
        let alert =
            Alert::from_error(&ExpenseError::NoSelection("Select an expense to delete".into()));

        assert_eq!(alert.title, "No Selection");
        assert!(alert.hint.is_some());
    }

    #[test]
    fn test_alert_area_fits_small_terminal() {
        let parent = Rect::new(0, 0, 20, 5);
        let area = alert_area(parent);
        assert!(area.width <= parent.width);
        assert!(area.height <= parent.height);
    }
}
