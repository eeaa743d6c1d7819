use ratatui::style::Color;

/// Convert theme color names (as used by badges and headers) to terminal colors
#[must_use]
pub fn convert_theme_color(color: &str) -> Color {
    match color.to_lowercase().as_str() {
        "primary" | "blue" => Color::Rgb(65, 128, 255),
        "blue-dark" => Color::Rgb(0, 51, 102),
        "secondary" | "gray" | "grey" => Color::Rgb(128, 128, 128),
        "success" | "green" => Color::Rgb(54, 147, 7),
        "danger" | "red" => Color::Rgb(220, 76, 62),
        "warning" | "yellow" => Color::Rgb(252, 186, 25),
        "info" | "teal" => Color::Rgb(20, 143, 173),
        "purple" => Color::Rgb(105, 46, 194),
        "purple-light" => Color::Rgb(164, 105, 200),
        "light" | "white" => Color::White,
        "dark" | "black" => Color::Black,
        _ => Color::Rgb(65, 128, 255), // Default to primary
    }
}
