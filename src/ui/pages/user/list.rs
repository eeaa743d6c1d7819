//! User list page: every user in the directory, one table row each.

use super::helpers::{badge_color, map_user_type_to_display_type};
use crate::constants::{
    BADGE_ACTIVE, BADGE_INACTIVE, HEADING_USER_LIST, HEAD_ACCOUNT_TYPE, HEAD_ADMIN, HEAD_NAME, HEAD_STATUS,
    TITLE_USER_LIST, USER_LIST_TABLE_ID,
};
use crate::icons::Icon;
use crate::ui::components::badge::create_badge;
use crate::ui::components::table::{self, BodyCell, HeadCell, TableMsg, TableParams, TableState};
use crate::ui::core::{
    update_component_child, AppContext, Component, GlobalMsg, Immutable, PageComponent, PageMetadata, SharedState,
    UpdateReturn,
};
use crate::utils::color::convert_theme_color;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListState {
    pub table: Immutable<TableState>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserListMsg {
    Table(TableMsg),
}

pub fn table_head_cells() -> Vec<HeadCell> {
    vec![
        HeadCell::new(HEAD_STATUS, Constraint::Length(12)),
        HeadCell::new(HEAD_ACCOUNT_TYPE, Constraint::Length(16)),
        HeadCell::new(HEAD_NAME, Constraint::Min(20)),
        HeadCell::new(HEAD_ADMIN, Constraint::Length(8)),
    ]
}

/// Body rows for every user currently in the directory
pub fn table_body_rows(ctx: &AppContext) -> Vec<Vec<BodyCell>> {
    ctx.users
        .all_users()
        .into_iter()
        .map(|user| {
            let status = if user.active { BADGE_ACTIVE } else { BADGE_INACTIVE };
            let admin = if user.admin {
                Line::from(ctx.icons.render(Icon::Check, Some(convert_theme_color("success"))))
            } else {
                Line::default()
            };
            vec![
                BodyCell::new(create_badge(status, badge_color(user.active))),
                BodyCell::new(map_user_type_to_display_type(user.user_type)),
                BodyCell::new(user.name),
                BodyCell::new(admin),
            ]
        })
        .collect()
}

impl PageComponent for UserListState {
    type Msg = UserListMsg;

    fn init(_shared: &SharedState, _ctx: &AppContext) -> Self {
        Self {
            table: Immutable::new(TableState::init(TableParams {
                id_namespace: USER_LIST_TABLE_ID.to_string(),
            })),
        }
    }

    fn update(state: Immutable<Self>, msg: UserListMsg) -> UpdateReturn<Self, GlobalMsg<UserListMsg>> {
        match msg {
            UserListMsg::Table(msg) => update_component_child(
                state,
                |page: &Self| Some(page.table.clone()),
                |page: &mut Self, table| page.table = table,
                msg,
                |msg| GlobalMsg::Local(UserListMsg::Table(msg)),
            ),
        }
    }

    fn view(state: &Self, f: &mut Frame, area: Rect, ctx: &AppContext) {
        let [heading_area, table_area] = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

        let heading = Paragraph::new(Line::from(Span::styled(
            HEADING_USER_LIST,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        f.render_widget(heading, heading_area);

        table::view(
            f,
            table_area,
            &state.table,
            TITLE_USER_LIST,
            &table_head_cells(),
            &table_body_rows(ctx),
        );
    }

    fn handle_key(state: &Self, key: &KeyEvent, ctx: &AppContext) -> Option<UserListMsg> {
        let row_count = ctx.users.all_users().len();
        table::handle_key(&state.table, key, row_count).map(UserListMsg::Table)
    }

    fn metadata(_state: &Self) -> PageMetadata {
        PageMetadata::new(TITLE_USER_LIST).with_hints("↑/↓: select user")
    }
}
