use crate::constants::{LANDING_TAGLINE, TITLE_LANDING};
use crate::icons::Icon;
use crate::ui::core::{AppContext, GlobalMsg, Immutable, PageComponent, PageMetadata, Session, SharedState, UpdateReturn};
use crate::utils::color::convert_theme_color;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingState {
    pub session: Option<Session>,
}

/// The landing page reacts to no messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LandingMsg {}

impl PageComponent for LandingState {
    type Msg = LandingMsg;

    fn init(shared: &SharedState, _ctx: &AppContext) -> Self {
        Self {
            session: shared.session.clone(),
        }
    }

    fn update(_state: Immutable<Self>, msg: LandingMsg) -> UpdateReturn<Self, GlobalMsg<LandingMsg>> {
        match msg {}
    }

    fn view(state: &Self, f: &mut Frame, area: Rect, ctx: &AppContext) {
        let icons = &ctx.icons;
        let mut lines = vec![
            Line::default(),
            Line::from(Span::styled(
                TITLE_LANDING,
                Style::default()
                    .fg(convert_theme_color("blue-dark"))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(LANDING_TAGLINE),
            Line::default(),
        ];
        if let Some(session) = &state.session {
            lines.push(Line::from(format!("Signed in as {}", session.user_name)));
            lines.push(Line::default());
        }
        lines.push(Line::from(vec![
            icons.render(Icon::Buyer, Some(convert_theme_color("info"))),
            Span::raw(" Buyers describe their project in phases  "),
            icons.render(Icon::Vendor, Some(convert_theme_color("purple"))),
            Span::raw(" Vendors respond with their team"),
        ]));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Press 2 to browse users or 3 to describe a project",
            Style::default().fg(Color::Gray),
        )));

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn handle_key(_state: &Self, _key: &KeyEvent, _ctx: &AppContext) -> Option<LandingMsg> {
        None
    }

    fn metadata(_state: &Self) -> PageMetadata {
        PageMetadata::new(TITLE_LANDING)
    }
}
