//! Layout definitions for the TUI
//!
//! One column: header, input form, search bar, expense table, total line and
//! status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title and theme toggle hint
    pub header: Rect,
    /// Amount and category fields
    pub form: Rect,
    pub search: Rect,
    pub table: Rect,
    pub total: Rect,
    /// Key hints and the last status message
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(3), // Form
                Constraint::Length(3), // Search
                Constraint::Min(3),    // Table
                Constraint::Length(1), // Total
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            form: chunks[1],
            search: chunks[2],
            table: chunks[3],
            total: chunks[4],
            status_bar: chunks[5],
        }
    }
}

/// Layout for the two input fields side by side
pub struct FormLayout {
    pub amount: Rect,
    pub category: Rect,
}

impl FormLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        Self {
            amount: chunks[0],
            category: chunks[1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_fills_area() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = AppLayout::new(area);

        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.form.height, 3);
        assert_eq!(layout.status_bar.y, 23);
        assert_eq!(layout.table.height, 24 - 1 - 3 - 3 - 1 - 1);
    }

    #[test]
    fn test_form_layout_splits_width() {
        let layout = FormLayout::new(Rect::new(0, 0, 100, 3));
        assert_eq!(layout.amount.width + layout.category.width, 100);
    }
}
