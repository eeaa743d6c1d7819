//! Table component. Owns selection state only; the caller supplies head and
//! body cell descriptors on every render.

use crate::ui::core::{Cmd, Component, Immutable, UpdateReturn};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table, TableState as WidgetTableState},
    Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub id_namespace: String,
    pub selected: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableParams {
    pub id_namespace: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableMsg {
    Select(Option<usize>),
}

/// Column heading and its width
#[derive(Debug, Clone)]
pub struct HeadCell {
    pub children: Line<'static>,
    pub width: Constraint,
}

impl HeadCell {
    pub fn new(children: impl Into<Line<'static>>, width: Constraint) -> Self {
        Self {
            children: children.into(),
            width,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BodyCell {
    pub children: Line<'static>,
}

impl BodyCell {
    pub fn new(children: impl Into<Line<'static>>) -> Self {
        Self {
            children: children.into(),
        }
    }

    /// Plain text content, styles dropped
    pub fn text(&self) -> String {
        self.children.to_string()
    }
}

impl Component for TableState {
    type Params = TableParams;
    type Msg = TableMsg;

    fn init(params: TableParams) -> Self {
        Self {
            id_namespace: params.id_namespace,
            selected: None,
        }
    }

    fn update(state: Immutable<Self>, msg: TableMsg) -> UpdateReturn<Self, TableMsg> {
        match msg {
            TableMsg::Select(selected) => {
                if state.selected == selected {
                    return (state, Cmd::none());
                }
                (state.update(|table| table.selected = selected), Cmd::none())
            }
        }
    }
}

/// Row id in the table's namespace, e.g. `user-list-table-row-3`
pub fn row_id(state: &TableState, index: usize) -> String {
    format!("{}-row-{index}", state.id_namespace)
}

/// Selection message for a navigation key, clamped to `row_count`
pub fn handle_key(state: &TableState, key: &KeyEvent, row_count: usize) -> Option<TableMsg> {
    if row_count == 0 {
        return None;
    }
    let last = row_count - 1;
    let target = match (key.code, state.selected) {
        (KeyCode::Down, None) | (KeyCode::Home, _) => 0,
        (KeyCode::Up, None) | (KeyCode::End, _) => last,
        (KeyCode::Down, Some(i)) => (i + 1).min(last),
        (KeyCode::Up, Some(i)) => i.saturating_sub(1).min(last),
        (KeyCode::Esc, Some(_)) => return Some(TableMsg::Select(None)),
        _ => return None,
    };
    (state.selected != Some(target)).then_some(TableMsg::Select(Some(target)))
}

pub fn view(f: &mut Frame, area: Rect, state: &TableState, title: &str, head: &[HeadCell], rows: &[Vec<BodyCell>]) {
    let header = Row::new(head.iter().map(|cell| Cell::from(cell.children.clone())))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);
    let body = rows
        .iter()
        .map(|row| Row::new(row.iter().map(|cell| Cell::from(cell.children.clone()))));
    let widths: Vec<Constraint> = head.iter().map(|cell| cell.width).collect();

    let table = Table::new(body, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut widget_state = WidgetTableState::default().with_selected(state.selected.filter(|i| *i < rows.len()));
    f.render_stateful_widget(table, area, &mut widget_state);
}
