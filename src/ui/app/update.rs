use super::{AppMsg, AppState, PageState, RoutedPage};
use crate::constants::{MAX_TOASTS, MODAL_LOGS_TITLE, MODAL_QUIT_BODY, MODAL_QUIT_TITLE};
use crate::ui::components::{modal, ModalContent, ModalMsg, NavMsg, NavState, Toast};
use crate::ui::core::{AppContext, Cmd, GlobalMsg, Immutable, UpdateReturn};
use crate::ui::pages::{DescribeProjectState, LandingState, UserListState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn update(state: Immutable<AppState>, msg: AppMsg, ctx: &AppContext) -> UpdateReturn<AppState, AppMsg> {
    match msg {
        AppMsg::Noop => (state, Cmd::none()),
        AppMsg::NewRoute(route) => {
            log::info!("Router: navigating to {route:?}");
            let state = state.update(|app| app.transition_loading += 1);
            (state, Cmd::msg(AppMsg::PageReady(route)))
        }
        AppMsg::PageReady(route) => {
            let page = PageState::init(route, &state.shared, ctx);
            let (nav, nav_cmd) = NavState::update(state.nav.clone(), NavMsg::Highlight(route));
            let state = state.update(|app| {
                app.page = Some(page);
                app.active_route = route;
                app.transition_loading = app.transition_loading.saturating_sub(1);
                app.ready = true;
                app.nav = nav;
            });
            (state, nav_cmd.map(AppMsg::Nav))
        }
        AppMsg::ShowToast(content) => {
            log::debug!("Toast: {} - {}", content.title, content.body);
            let toast = Toast::new(content);
            let dismiss = Cmd::after(ctx.config.ui.toast_timeout(), AppMsg::DismissToast(toast.id));
            let state = state.update(|app| {
                app.toasts.push(toast);
                if app.toasts.len() > MAX_TOASTS {
                    let overflow = app.toasts.len() - MAX_TOASTS;
                    app.toasts.drain(..overflow);
                }
            });
            (state, dismiss)
        }
        AppMsg::DismissToast(id) => {
            if !state.toasts.iter().any(|toast| toast.id == id) {
                return (state, Cmd::none());
            }
            (state.update(|app| app.toasts.retain(|toast| toast.id != id)), Cmd::none())
        }
        AppMsg::ShowModal(content) => open_modal(state, content),
        AppMsg::CloseModal => {
            if !state.modal.open {
                return (state, Cmd::none());
            }
            let on_close = (*state.modal.content.on_close_msg).clone();
            (state.update(|app| app.modal.open = false), Cmd::msg(on_close))
        }
        AppMsg::Modal(msg) => match msg {
            ModalMsg::Close => update(state, AppMsg::CloseModal, ctx),
            ModalMsg::Activate(index) => update(state, AppMsg::ModalAction(index), ctx),
            ModalMsg::Select(index) => {
                if index >= state.modal.content.actions.len() {
                    return (state, Cmd::none());
                }
                (state.update(|app| app.modal.selected_action = index), Cmd::none())
            }
            ModalMsg::Scroll(offset) => {
                let offset = offset.min(state.modal.max_scroll());
                if offset == state.modal.scroll {
                    return (state, Cmd::none());
                }
                (state.update(|app| app.modal.scroll = offset), Cmd::none())
            }
        },
        AppMsg::ModalAction(index) => {
            if !state.modal.open {
                return (state, Cmd::none());
            }
            let Some(action) = state.modal.content.actions.get(index) else {
                log::warn!("Modal: no action at index {index}");
                return (state, Cmd::none());
            };
            let msg = action.msg.clone();
            (state.update(|app| app.modal.open = false), Cmd::msg(msg))
        }
        AppMsg::ShowLogs => {
            let lines = ctx.logs.lines();
            let body = if lines.is_empty() {
                "No log lines captured yet.".to_string()
            } else {
                lines.join("\n")
            };
            open_modal(state, ModalContent::new(MODAL_LOGS_TITLE, body, AppMsg::Noop))
        }
        AppMsg::RequestQuit => {
            let content = ModalContent::new(MODAL_QUIT_TITLE, MODAL_QUIT_BODY, AppMsg::Noop)
                .with_action("Cancel", "secondary", AppMsg::Noop)
                .with_action("Quit", "danger", AppMsg::Quit);
            open_modal(state, content)
        }
        AppMsg::Quit => {
            log::info!("Quitting");
            (state.update(|app| app.exit = true), Cmd::none())
        }
        AppMsg::Nav(msg) => match msg {
            GlobalMsg::Local(msg) => {
                let (nav, cmd) = NavState::update(state.nav.clone(), msg);
                if Immutable::ptr_eq(&nav, &state.nav) {
                    return (state, cmd.map(AppMsg::Nav));
                }
                (state.update(|app| app.nav = nav), cmd.map(AppMsg::Nav))
            }
            GlobalMsg::NewRoute(route) => update(state, AppMsg::NewRoute(route), ctx),
            GlobalMsg::Toast(toast) => update(state, AppMsg::ShowToast(toast), ctx),
        },
        AppMsg::Landing(msg) => update_page::<LandingState>(state, msg, ctx),
        AppMsg::UserList(msg) => update_page::<UserListState>(state, msg, ctx),
        AppMsg::DescribeProject(msg) => update_page::<DescribeProjectState>(state, msg, ctx),
    }
}

fn open_modal(state: Immutable<AppState>, content: ModalContent<AppMsg>) -> UpdateReturn<AppState, AppMsg> {
    let state = state.update(|app| {
        app.modal.open = true;
        app.modal.content = content;
        app.modal.selected_action = 0;
        app.modal.scroll = 0;
    });
    (state, Cmd::none())
}

/// Unwrap a page's message: shell requests go to the shell, local messages
/// go to the page only while it is live.
fn update_page<P: RoutedPage>(
    state: Immutable<AppState>,
    msg: GlobalMsg<P::Msg>,
    ctx: &AppContext,
) -> UpdateReturn<AppState, AppMsg> {
    match msg {
        GlobalMsg::NewRoute(route) => update(state, AppMsg::NewRoute(route), ctx),
        GlobalMsg::Toast(toast) => update(state, AppMsg::ShowToast(toast), ctx),
        GlobalMsg::Local(msg) => {
            let Some(page) = state.page.as_ref().and_then(P::from_page).cloned() else {
                log::debug!("Dropping message for inactive page {:?}: {msg:?}", P::ROUTE);
                return (state, Cmd::none());
            };
            let (page, cmd) = P::update(page, msg);
            let state = state.update(|app| app.page = Some(P::into_page(page)));
            (state, cmd.map(P::wrap))
        }
    }
}

/// Translate a key press into a shell message.
///
/// An open modal takes every key. Otherwise the page sees the key first and
/// global shortcuts apply to whatever it leaves alone.
pub fn handle_key(state: &AppState, key: &KeyEvent, ctx: &AppContext) -> Option<AppMsg> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(AppMsg::Quit);
    }
    if state.modal.open {
        return modal::handle_key(&state.modal, key).map(AppMsg::Modal);
    }

    let page_msg = match &state.page {
        Some(PageState::Landing(page)) => page_key::<LandingState>(page, key, ctx),
        Some(PageState::UserList(page)) => page_key::<UserListState>(page, key, ctx),
        Some(PageState::DescribeProject(page)) => page_key::<DescribeProjectState>(page, key, ctx),
        None => None,
    };
    if page_msg.is_some() {
        return page_msg;
    }

    match key.code {
        KeyCode::Char('q') => Some(AppMsg::RequestQuit),
        KeyCode::Char('G') => Some(AppMsg::ShowLogs),
        _ => NavState::handle_key(key).map(|msg| AppMsg::Nav(GlobalMsg::Local(msg))),
    }
}

fn page_key<P: RoutedPage>(page: &Immutable<P>, key: &KeyEvent, ctx: &AppContext) -> Option<AppMsg> {
    P::handle_key(page, key, ctx).map(|msg| P::wrap(GlobalMsg::Local(msg)))
}
