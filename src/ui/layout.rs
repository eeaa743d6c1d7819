//! Layout management and calculations

use crate::constants::{NAV_HEIGHT, TOAST_WIDTH};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into navigation bar, page body and a one-line status bar
    #[must_use]
    pub fn main_layout(area: Rect) -> [Rect; 3] {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(NAV_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);
        [chunks[0], chunks[1], chunks[2]]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines.min(r.height)),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Area of a toast `offset` rows down the stack in the top-right corner.
    ///
    /// Returns `None` once the stack would run off the screen.
    #[must_use]
    pub fn toast_area(area: Rect, offset: u16, height: u16) -> Option<Rect> {
        let width = TOAST_WIDTH.min(area.width);
        let y = area.y.checked_add(1)?.checked_add(offset)?;
        if y.saturating_add(height) > area.bottom() {
            return None;
        }
        Some(Rect::new(area.right().saturating_sub(width + 1), y, width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_layout_reserves_nav_and_status() {
        let [nav, body, status] = LayoutManager::main_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(nav.height, NAV_HEIGHT);
        assert_eq!(status.height, 1);
        assert_eq!(body.height, 24 - NAV_HEIGHT - 1);
    }

    #[test]
    fn test_toasts_stop_at_screen_bottom() {
        let area = Rect::new(0, 0, 80, 10);
        assert!(LayoutManager::toast_area(area, 0, 4).is_some());
        assert!(LayoutManager::toast_area(area, 4, 4).is_some());
        assert!(LayoutManager::toast_area(area, 8, 4).is_none());
    }
}
