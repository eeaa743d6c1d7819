use super::{AppState, PageState};
use crate::ui::components::{modal, toasts, NavState, StatusBar};
use crate::ui::core::{AppContext, PageComponent, PageMetadata};
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

fn page_metadata(page: &PageState) -> PageMetadata {
    match page {
        PageState::Landing(state) => PageComponent::metadata(&**state),
        PageState::UserList(state) => PageComponent::metadata(&**state),
        PageState::DescribeProject(state) => PageComponent::metadata(&**state),
    }
}

fn view_page(f: &mut Frame, area: Rect, page: &PageState, ctx: &AppContext) {
    match page {
        PageState::Landing(state) => PageComponent::view(&**state, f, area, ctx),
        PageState::UserList(state) => PageComponent::view(&**state, f, area, ctx),
        PageState::DescribeProject(state) => PageComponent::view(&**state, f, area, ctx),
    }
}

pub fn view(f: &mut Frame, state: &AppState, ctx: &AppContext) {
    let area = f.area();
    let [nav_area, body_area, status_area] = LayoutManager::main_layout(area);

    NavState::view(f, nav_area, &state.nav, &ctx.icons);

    let hints = match (&state.page, state.ready) {
        (Some(page), true) => {
            view_page(f, body_area, page, ctx);
            page_metadata(page).hints
        }
        _ => {
            let loading = Paragraph::new("Loading...")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray));
            f.render_widget(loading, body_area);
            String::new()
        }
    };

    StatusBar::render(f, status_area, &hints, state.transition_loading > 0);
    toasts::view(f, body_area, &state.toasts, &ctx.icons);
    modal::view(f, area, &state.modal);
}
