//! Top navigation bar. Selecting a link asks the shell for a route change;
//! the shell highlights the link once the page is ready.

use crate::constants::TITLE_LANDING;
use crate::icons::{Icon, IconService};
use crate::ui::core::{Cmd, GlobalMsg, Immutable, Route, UpdateReturn};
use crate::utils::color::convert_theme_color;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub route: Route,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub links: Vec<NavLink>,
    pub active_link: Route,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMsg {
    Next,
    Previous,
    Select(usize),
    Highlight(Route),
}

impl NavState {
    pub fn init(active_link: Route) -> Self {
        Self {
            links: Route::ALL
                .iter()
                .map(|route| NavLink {
                    label: route.label().to_string(),
                    route: *route,
                })
                .collect(),
            active_link,
        }
    }

    fn active_index(&self) -> usize {
        self.links
            .iter()
            .position(|link| link.route == self.active_link)
            .unwrap_or(0)
    }

    pub fn update(state: Immutable<Self>, msg: NavMsg) -> UpdateReturn<Self, GlobalMsg<NavMsg>> {
        let len = state.links.len();
        if len == 0 {
            return (state, Cmd::none());
        }
        let target = match msg {
            NavMsg::Next => (state.active_index() + 1) % len,
            NavMsg::Previous => (state.active_index() + len - 1) % len,
            NavMsg::Select(index) if index < len => index,
            NavMsg::Select(index) => {
                log::warn!("Nav: no link at index {index}");
                return (state, Cmd::none());
            }
            NavMsg::Highlight(route) => {
                if state.active_link == route {
                    return (state, Cmd::none());
                }
                return (state.update(|nav| nav.active_link = route), Cmd::none());
            }
        };

        let route = state.links[target].route;
        if route == state.active_link {
            return (state, Cmd::none());
        }
        (state, Cmd::msg(GlobalMsg::NewRoute(route)))
    }

    pub fn handle_key(key: &KeyEvent) -> Option<NavMsg> {
        match key.code {
            KeyCode::Tab => Some(NavMsg::Next),
            KeyCode::BackTab => Some(NavMsg::Previous),
            KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|n| NavMsg::Select(n as usize - 1)),
            _ => None,
        }
    }

    pub fn view(f: &mut Frame, area: Rect, state: &NavState, icons: &IconService) {
        let titles: Vec<Line> = state
            .links
            .iter()
            .enumerate()
            .map(|(i, link)| Line::from(format!("{} {}", i + 1, link.label)))
            .collect();

        let title = Line::from(vec![
            Span::raw(" "),
            icons.render(Icon::Buyer, Some(convert_theme_color("primary"))),
            Span::styled(format!(" {TITLE_LANDING} "), Style::default().add_modifier(Modifier::BOLD)),
        ]);

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::ALL).title(title))
            .select(state.active_index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(convert_theme_color("primary"))
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            );
        f.render_widget(tabs, area);
    }
}
