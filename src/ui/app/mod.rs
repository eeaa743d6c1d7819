//! Application shell: global state, routing between pages, toasts, the modal
//! and the navigation bar.

mod init;
mod update;
mod view;

pub use init::init;
pub use update::{handle_key, update};
pub use view::view;

use crate::ui::components::{ModalContent, ModalMsg, ModalState, NavMsg, NavState, Toast};
use crate::ui::core::{
    AppContext, GlobalMsg, Immutable, PageComponent, Route, SharedState, ToastContent,
};
use crate::ui::pages::{
    DescribeProjectMsg, DescribeProjectState, LandingMsg, LandingState, UserListMsg, UserListState,
};
use uuid::Uuid;

/// State of the page under the active route
#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Landing(Immutable<LandingState>),
    UserList(Immutable<UserListState>),
    DescribeProject(Immutable<DescribeProjectState>),
}

impl PageState {
    pub fn route(&self) -> Route {
        match self {
            PageState::Landing(_) => Route::Landing,
            PageState::UserList(_) => Route::UserList,
            PageState::DescribeProject(_) => Route::DescribeProject,
        }
    }

    pub fn init(route: Route, shared: &SharedState, ctx: &AppContext) -> Self {
        match route {
            Route::Landing => PageState::Landing(Immutable::new(LandingState::init(shared, ctx))),
            Route::UserList => PageState::UserList(Immutable::new(UserListState::init(shared, ctx))),
            Route::DescribeProject => {
                PageState::DescribeProject(Immutable::new(DescribeProjectState::init(shared, ctx)))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub ready: bool,
    pub transition_loading: u32,
    pub toasts: Vec<Toast>,
    pub modal: ModalState<AppMsg>,
    pub shared: SharedState,
    pub active_route: Route,
    pub nav: Immutable<NavState>,
    /// At most one live page, the one under `active_route`
    pub page: Option<PageState>,
    pub exit: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    Noop,
    NewRoute(Route),
    PageReady(Route),
    ShowToast(ToastContent),
    DismissToast(Uuid),
    ShowModal(ModalContent<AppMsg>),
    CloseModal,
    Modal(ModalMsg),
    ModalAction(usize),
    ShowLogs,
    RequestQuit,
    Quit,
    Nav(GlobalMsg<NavMsg>),
    Landing(GlobalMsg<LandingMsg>),
    UserList(GlobalMsg<UserListMsg>),
    DescribeProject(GlobalMsg<DescribeProjectMsg>),
}

/// Ties a page type to its route, its slot in [`PageState`] and its [`AppMsg`] variant
pub trait RoutedPage: PageComponent + 'static {
    const ROUTE: Route;

    fn from_page(page: &PageState) -> Option<&Immutable<Self>>;

    fn into_page(state: Immutable<Self>) -> PageState;

    fn wrap(msg: GlobalMsg<Self::Msg>) -> AppMsg;
}

impl RoutedPage for LandingState {
    const ROUTE: Route = Route::Landing;

    fn from_page(page: &PageState) -> Option<&Immutable<Self>> {
        match page {
            PageState::Landing(state) => Some(state),
            _ => None,
        }
    }

    fn into_page(state: Immutable<Self>) -> PageState {
        PageState::Landing(state)
    }

    fn wrap(msg: GlobalMsg<LandingMsg>) -> AppMsg {
        AppMsg::Landing(msg)
    }
}

impl RoutedPage for UserListState {
    const ROUTE: Route = Route::UserList;

    fn from_page(page: &PageState) -> Option<&Immutable<Self>> {
        match page {
            PageState::UserList(state) => Some(state),
            _ => None,
        }
    }

    fn into_page(state: Immutable<Self>) -> PageState {
        PageState::UserList(state)
    }

    fn wrap(msg: GlobalMsg<UserListMsg>) -> AppMsg {
        AppMsg::UserList(msg)
    }
}

impl RoutedPage for DescribeProjectState {
    const ROUTE: Route = Route::DescribeProject;

    fn from_page(page: &PageState) -> Option<&Immutable<Self>> {
        match page {
            PageState::DescribeProject(state) => Some(state),
            _ => None,
        }
    }

    fn into_page(state: Immutable<Self>) -> PageState {
        PageState::DescribeProject(state)
    }

    fn wrap(msg: GlobalMsg<DescribeProjectMsg>) -> AppMsg {
        AppMsg::DescribeProject(msg)
    }
}
