//! Form fields: a generic wrapper holding validation errors around a typed
//! input child.
//!
//! The wrapper owns the error list and the child owns the raw input buffer
//! and its parsed value. Editing the child clears stale errors once the
//! parsed value changes.

pub mod date;
pub mod number;

use crate::ui::core::{Cmd, Component, Immutable, UpdateReturn};
use crossterm::event::KeyEvent;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::fmt;

pub use date::{DateChild, DateMsg, DateParams};
pub use number::{NumberChild, NumberMsg, NumberParams};

pub type DateField = FieldState<DateChild>;
pub type NumberField = FieldState<NumberChild>;

/// Typed input wrapped by [`FieldState`]
pub trait FieldChild: Clone + fmt::Debug {
    type Params;
    type Value: Clone + PartialEq + fmt::Debug;
    type Msg: fmt::Debug + Clone + Send + 'static;

    fn init(params: Self::Params) -> Self;

    fn update(&mut self, msg: Self::Msg);

    /// Parsed value, `None` while the input is empty or unparseable
    fn value(&self) -> Option<Self::Value>;

    /// Raw text as typed
    fn input(&self) -> &str;

    fn key_to_msg(key: &KeyEvent) -> Option<Self::Msg>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldState<C> {
    pub errors: Vec<String>,
    pub child: C,
}

pub struct FieldParams<P> {
    pub errors: Vec<String>,
    pub child: P,
}

impl<P: Default> Default for FieldParams<P> {
    fn default() -> Self {
        Self {
            errors: Vec::new(),
            child: P::default(),
        }
    }
}

impl<C: FieldChild> Component for FieldState<C> {
    type Params = FieldParams<C::Params>;
    type Msg = C::Msg;

    fn init(params: Self::Params) -> Self {
        Self {
            errors: params.errors,
            child: C::init(params.child),
        }
    }

    fn update(state: Immutable<Self>, msg: Self::Msg) -> UpdateReturn<Self, Self::Msg> {
        let state = state.update(|field| {
            let before = field.child.value();
            field.child.update(msg);
            if field.child.value() != before {
                field.errors.clear();
            }
        });
        (state, Cmd::none())
    }
}

pub fn get_value<C: FieldChild>(state: &FieldState<C>) -> Option<C::Value> {
    state.child.value()
}

/// Replace the error list of a field
pub fn set_errors<C: FieldChild>(state: Immutable<FieldState<C>>, errors: Vec<String>) -> Immutable<FieldState<C>> {
    if state.errors == errors {
        return state;
    }
    state.update(|field| field.errors = errors)
}

pub fn is_valid<C: FieldChild>(state: &FieldState<C>) -> bool {
    state.errors.is_empty()
}

/// Display options for a field
#[derive(Debug, Clone, Default)]
pub struct FieldProps<'a> {
    pub label: &'a str,
    pub required: bool,
    pub disabled: bool,
    pub placeholder: &'a str,
    pub prefix: Option<&'a str>,
    pub focused: bool,
}

/// Label line, input line and one line per error
pub fn view_lines<C: FieldChild>(state: &FieldState<C>, props: &FieldProps<'_>) -> Vec<Line<'static>> {
    let mut label = vec![Span::styled(
        props.label.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if props.required {
        label.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }

    let marker = if props.focused { "> " } else { "  " };
    let mut input = vec![Span::styled(marker, Style::default().fg(Color::Cyan))];
    if let Some(prefix) = props.prefix {
        input.push(Span::styled(prefix.to_string(), Style::default().fg(Color::Gray)));
    }

    let text = state.child.input();
    let text_style = if props.disabled {
        Style::default().fg(Color::DarkGray)
    } else if !is_valid(state) {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };
    if text.is_empty() {
        input.push(Span::styled(
            props.placeholder.to_string(),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ));
    } else {
        input.push(Span::styled(text.to_string(), text_style));
    }
    if props.focused && !props.disabled {
        input.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
    }

    let mut lines = vec![Line::from(label), Line::from(input)];
    lines.extend(
        state
            .errors
            .iter()
            .map(|error| Line::from(Span::styled(format!("  ! {error}"), Style::default().fg(Color::Red)))),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number_field() -> Immutable<NumberField> {
        Immutable::new(NumberField::init(FieldParams::default()))
    }

    #[test]
    fn test_editing_clears_errors() {
        let field = set_errors(number_field(), vec!["Required".to_string()]);
        assert!(!is_valid(&field));

        let (field, cmd) = NumberField::update(field, NumberMsg::Input('4'));
        assert!(cmd.is_none());
        assert!(is_valid(&field));
        assert_eq!(get_value(&field), Some(4.0));
    }

    #[test]
    fn test_rejected_input_keeps_errors() {
        let field = set_errors(number_field(), vec!["Required".to_string()]);
        let (field, _) = NumberField::update(field, NumberMsg::Input('x'));
        assert_eq!(field.errors, vec!["Required".to_string()]);
    }

    #[test]
    fn test_view_lines_show_errors_and_prefix() {
        let field = set_errors(number_field(), vec!["Must be positive".to_string()]);
        let props = FieldProps {
            label: "Budget",
            required: true,
            prefix: Some("$"),
            placeholder: "0.00",
            ..FieldProps::default()
        };
        let lines = view_lines(&field, &props);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].to_string(), "Budget *");
        assert_eq!(lines[1].to_string(), "  $0.00");
        assert_eq!(lines[2].to_string(), "  ! Must be positive");
    }
}
