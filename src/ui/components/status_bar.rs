//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render page key hints, or a loading notice while a route change is pending
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, page_hints: &str, loading: bool) {
        let (status_text, status_color) = if loading {
            ("Loading page...".to_string(), Color::Yellow)
        } else if page_hints.is_empty() {
            ("Tab/1-3: navigate • G: logs • q: quit".to_string(), Color::Gray)
        } else {
            (format!("{page_hints} • Tab/1-3: navigate • G: logs • q: quit"), Color::Gray)
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
