use super::{AppMsg, AppState};
use crate::ui::components::{ModalState, NavState};
use crate::ui::core::{AppContext, Cmd, Immutable, SharedState, UpdateReturn};

/// Initial shell state and the command that loads the landing page
pub fn init(ctx: &AppContext) -> UpdateReturn<AppState, AppMsg> {
    let landing_route = ctx.config.ui.landing_route;
    let state = AppState {
        ready: false,
        transition_loading: 0,
        toasts: Vec::new(),
        modal: ModalState::closed(AppMsg::Noop),
        shared: SharedState::default(),
        active_route: landing_route,
        nav: Immutable::new(NavState::init(landing_route)),
        page: None,
        exit: false,
    };
    (Immutable::new(state), Cmd::msg(AppMsg::NewRoute(landing_route)))
}
