use crate::constants::TOAST_WIDTH;
use crate::icons::{Icon, IconService};
use crate::ui::core::{ToastContent, ToastLevel};
use crate::ui::layout::LayoutManager;
use crate::utils::color::convert_theme_color;
use crate::utils::text::wrap_words;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub content: ToastContent,
}

impl Toast {
    pub fn new(content: ToastContent) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
        }
    }
}

fn level_icon(level: ToastLevel) -> (Icon, &'static str) {
    match level {
        ToastLevel::Info => (Icon::Bell, "info"),
        ToastLevel::Success => (Icon::Check, "success"),
        ToastLevel::Warning => (Icon::ExclamationCircle, "warning"),
        ToastLevel::Error => (Icon::TimesCircle, "danger"),
    }
}

/// Stack toasts in the top-right corner, newest last
pub fn view(f: &mut Frame, area: Rect, toasts: &[Toast], icons: &IconService) {
    let mut offset = 0u16;
    for toast in toasts {
        let (icon, color) = level_icon(toast.content.level);
        let body_width = usize::from(TOAST_WIDTH.saturating_sub(4));
        let body = wrap_words(&toast.content.body, body_width);
        let height = u16::try_from(body.len()).unwrap_or(u16::MAX).saturating_add(2);

        let Some(toast_area) = LayoutManager::toast_area(area, offset, height) else {
            break;
        };
        offset = offset.saturating_add(height);

        let title = Line::from(vec![
            Span::raw(" "),
            icons.render(icon, Some(convert_theme_color(color))),
            Span::styled(
                format!(" {} ", toast.content.title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(convert_theme_color(color)));

        f.render_widget(Clear, toast_area);
        f.render_widget(
            Paragraph::new(body.into_iter().map(Line::from).collect::<Vec<_>>()).block(block),
            toast_area,
        );
    }
}
