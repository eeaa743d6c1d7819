use super::cmd::Cmd;
use super::context::{AppContext, SharedState};
use super::immutable::Immutable;
use super::msg::GlobalMsg;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use std::fmt;

/// New state plus the side effects the update asked for
pub type UpdateReturn<S, M> = (Immutable<S>, Cmd<M>);

/// A self-contained UI unit: its state type, its messages, and how it starts and changes.
///
/// Views take component-specific props, so they live next to each component
/// rather than on this trait.
pub trait Component: Clone + Sized {
    type Params;
    type Msg: fmt::Debug + Clone + Send + 'static;

    fn init(params: Self::Params) -> Self;

    fn update(state: Immutable<Self>, msg: Self::Msg) -> UpdateReturn<Self, Self::Msg>;
}

/// Metadata the shell shows for the active page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    /// Page-specific key hints for the status bar
    pub hints: String,
}

impl PageMetadata {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            hints: String::new(),
        }
    }

    pub fn with_hints(mut self, hints: impl Into<String>) -> Self {
        self.hints = hints.into();
        self
    }
}

/// A routable page. Pages may ask the shell for a route change or a toast
/// through [`GlobalMsg`].
pub trait PageComponent: Clone + Sized {
    type Msg: fmt::Debug + Clone + Send + 'static;

    fn init(shared: &SharedState, ctx: &AppContext) -> Self;

    fn update(state: Immutable<Self>, msg: Self::Msg) -> UpdateReturn<Self, GlobalMsg<Self::Msg>>;

    fn view(state: &Self, f: &mut Frame, area: Rect, ctx: &AppContext);

    /// Translate a key press into a page message
    fn handle_key(state: &Self, key: &KeyEvent, ctx: &AppContext) -> Option<Self::Msg>;

    fn metadata(state: &Self) -> PageMetadata;
}

/// Run a child component's update inside its parent.
///
/// `get_child` locates the child snapshot, `set_child` splices the updated
/// child back into a copy of the parent, and `map_child_msg` wraps every
/// message produced by the child's commands into the parent's message type.
/// When the child cannot be located the parent snapshot is returned as is.
pub fn update_component_child<P, C, PM, G, S, F>(
    state: Immutable<P>,
    get_child: G,
    set_child: S,
    child_msg: C::Msg,
    map_child_msg: F,
) -> UpdateReturn<P, PM>
where
    P: Clone,
    C: Component,
    PM: Send + 'static,
    G: FnOnce(&P) -> Option<Immutable<C>>,
    S: FnOnce(&mut P, Immutable<C>),
    F: Fn(C::Msg) -> PM + Send + Sync + 'static,
{
    let Some(child) = get_child(&state) else {
        return (state, Cmd::none());
    };
    let (child, cmd) = C::update(child, child_msg);
    let state = state.update(|parent| set_child(parent, child));
    (state, cmd.map(map_child_msg))
}
