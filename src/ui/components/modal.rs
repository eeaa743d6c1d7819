//! Modal dialog rendered over the active page.
//!
//! The modal carries the messages to dispatch when it is dismissed or when one
//! of its action buttons is chosen, so the shell stays in charge of effects.

use crate::ui::layout::LayoutManager;
use crate::utils::color::convert_theme_color;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ModalAction<M> {
    pub text: String,
    pub color: String,
    pub msg: M,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalContent<M> {
    pub title: String,
    pub body: String,
    pub on_close_msg: Box<M>,
    pub actions: Vec<ModalAction<M>>,
}

impl<M> ModalContent<M> {
    pub fn new(title: impl Into<String>, body: impl Into<String>, on_close_msg: M) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            on_close_msg: Box::new(on_close_msg),
            actions: Vec::new(),
        }
    }

    pub fn with_action(mut self, text: impl Into<String>, color: impl Into<String>, msg: M) -> Self {
        self.actions.push(ModalAction {
            text: text.into(),
            color: color.into(),
            msg,
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalState<M> {
    pub open: bool,
    pub content: ModalContent<M>,
    pub selected_action: usize,
    pub scroll: u16,
}

impl<M> ModalState<M> {
    /// Closed modal whose close message is `noop`
    pub fn closed(noop: M) -> Self {
        Self {
            open: false,
            content: ModalContent::new("", "", noop),
            selected_action: 0,
            scroll: 0,
        }
    }

    /// Largest scroll offset that still shows the last body line
    pub fn max_scroll(&self) -> u16 {
        let lines = self.content.body.lines().count().saturating_sub(1);
        u16::try_from(lines).unwrap_or(u16::MAX)
    }
}

/// Key actions a modal understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMsg {
    Close,
    Select(usize),
    Activate(usize),
    Scroll(u16),
}

pub fn handle_key<M>(state: &ModalState<M>, key: &KeyEvent) -> Option<ModalMsg> {
    let action_count = state.content.actions.len();
    match key.code {
        KeyCode::Esc => Some(ModalMsg::Close),
        KeyCode::Enter if action_count == 0 => Some(ModalMsg::Close),
        KeyCode::Enter => Some(ModalMsg::Activate(state.selected_action.min(action_count - 1))),
        KeyCode::Left | KeyCode::BackTab if action_count > 0 => {
            Some(ModalMsg::Select((state.selected_action + action_count - 1) % action_count))
        }
        KeyCode::Right | KeyCode::Tab if action_count > 0 => {
            Some(ModalMsg::Select((state.selected_action + 1) % action_count))
        }
        KeyCode::Down | KeyCode::Char('j') if state.scroll < state.max_scroll() => {
            Some(ModalMsg::Scroll(state.scroll + 1))
        }
        KeyCode::Up | KeyCode::Char('k') if state.scroll > 0 => Some(ModalMsg::Scroll(state.scroll - 1)),
        _ => None,
    }
}

pub fn view<M>(f: &mut Frame, area: Rect, state: &ModalState<M>) {
    if !state.open {
        return;
    }
    let body_lines = u16::try_from(state.content.body.lines().count()).unwrap_or(u16::MAX);
    let height = body_lines.saturating_add(6).clamp(7, area.height.saturating_sub(2).max(7));
    let dialog_area = LayoutManager::centered_rect_lines(60, height, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", state.content.title))
        .style(Style::default().fg(Color::White));
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let [body_area, actions_area] = Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(inner);

    let body = Paragraph::new(state.content.body.as_str())
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0));
    f.render_widget(body, body_area);

    let footer = if state.content.actions.is_empty() {
        Line::from(Span::styled("Press Esc to close", Style::default().fg(Color::Gray)))
    } else {
        let mut spans = Vec::new();
        for (i, action) in state.content.actions.iter().enumerate() {
            let mut style = Style::default().fg(convert_theme_color(&action.color));
            if i == state.selected_action {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            spans.push(Span::styled(format!(" {} ", action.text), style));
            spans.push(Span::raw("  "));
        }
        Line::from(spans)
    };
    f.render_widget(
        Paragraph::new(vec![Line::default(), footer]).alignment(Alignment::Center),
        actions_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_with_actions() -> ModalState<&'static str> {
        ModalState {
            open: true,
            content: ModalContent::new("Quit", "Sure?", "close")
                .with_action("Cancel", "secondary", "cancel")
                .with_action("Quit", "danger", "quit"),
            selected_action: 0,
            scroll: 0,
        }
    }

    #[test]
    fn test_action_selection_wraps() {
        let modal = open_with_actions();
        assert_eq!(
            handle_key(&modal, &KeyEvent::from(KeyCode::Left)),
            Some(ModalMsg::Select(1))
        );
        assert_eq!(
            handle_key(&modal, &KeyEvent::from(KeyCode::Enter)),
            Some(ModalMsg::Activate(0))
        );
    }

    #[test]
    fn test_enter_closes_modal_without_actions() {
        let mut modal = open_with_actions();
        modal.content.actions.clear();
        assert_eq!(handle_key(&modal, &KeyEvent::from(KeyCode::Enter)), Some(ModalMsg::Close));
    }

    #[test]
    fn test_scroll_stops_at_last_body_line() {
        let mut modal = open_with_actions();
        assert_eq!(handle_key(&modal, &KeyEvent::from(KeyCode::Down)), None);
        assert_eq!(handle_key(&modal, &KeyEvent::from(KeyCode::Up)), None);

        modal.content.body = "one\ntwo\nthree".to_string();
        assert_eq!(modal.max_scroll(), 2);
        assert_eq!(
            handle_key(&modal, &KeyEvent::from(KeyCode::Char('j'))),
            Some(ModalMsg::Scroll(1))
        );
        modal.scroll = 2;
        assert_eq!(handle_key(&modal, &KeyEvent::from(KeyCode::Down)), None);
        assert_eq!(
            handle_key(&modal, &KeyEvent::from(KeyCode::Up)),
            Some(ModalMsg::Scroll(1))
        );
    }
}
