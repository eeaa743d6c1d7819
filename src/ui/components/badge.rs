use crate::utils::color::convert_theme_color;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// Create a padded badge on a theme color background
#[must_use]
pub fn create_badge(text: &str, color: &str) -> Span<'static> {
    let style = Style::default()
        .bg(convert_theme_color(color))
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    Span::styled(format!(" {text} "), style)
}

/// Badge of a two-way choice: highlighted when active, dimmed otherwise
#[must_use]
pub fn create_choice_badge(text: &str, active: bool) -> Span<'static> {
    if active {
        create_badge(text, "purple")
    } else {
        Span::styled(format!(" {text} "), Style::default().fg(Color::DarkGray))
    }
}
