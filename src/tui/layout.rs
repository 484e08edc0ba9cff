//! Layout definitions for the TUI
//!
//! Summary cards and budget gauge on top, transactions and categories side
//! by side, status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the dashboard
pub struct AppLayout {
    /// Income / expenses / balance cards
    pub summary: Rect,
    pub budget: Rect,
    pub transactions: Rect,
    pub categories: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Summary cards
                Constraint::Length(3), // Budget gauge
                Constraint::Min(5),    // Lists
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(40), Constraint::Length(28)])
            .split(vertical[2]);

        Self {
            summary: vertical[0],
            budget: vertical[1],
            transactions: body[0],
            categories: body[1],
            status_bar: vertical[3],
        }
    }
}

/// Split the summary strip into three equal cards
pub fn summary_cards(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fixed() {
        let outer = Rect::new(0, 0, 100, 40);
        let rect = centered_rect_fixed(50, 10, outer);
        assert_eq!(rect, Rect::new(25, 15, 50, 10));

        let small = centered_rect_fixed(50, 10, Rect::new(0, 0, 20, 5));
        assert_eq!(small.width, 20);
        assert_eq!(small.height, 5);
    }

    #[test]
    fn test_layout_fills_area() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.summary.height, 3);
        assert_eq!(layout.status_bar.y, 29);
        assert_eq!(layout.categories.width, 28);
    }
}
