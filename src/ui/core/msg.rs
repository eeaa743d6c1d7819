use super::route::Route;

/// Severity of a toast, which picks its color and icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastContent {
    pub level: ToastLevel,
    pub title: String,
    pub body: String,
}

impl ToastContent {
    pub fn new(level: ToastLevel, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(ToastLevel::Info, title, body)
    }

    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(ToastLevel::Success, title, body)
    }

    pub fn warning(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(ToastLevel::Warning, title, body)
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(ToastLevel::Error, title, body)
    }
}

/// A component message, or a request addressed to the application shell
#[derive(Debug, Clone, PartialEq)]
pub enum GlobalMsg<M> {
    Local(M),
    NewRoute(Route),
    Toast(ToastContent),
}

impl<M> GlobalMsg<M> {
    pub fn map<N>(self, f: impl FnOnce(M) -> N) -> GlobalMsg<N> {
        match self {
            GlobalMsg::Local(msg) => GlobalMsg::Local(f(msg)),
            GlobalMsg::NewRoute(route) => GlobalMsg::NewRoute(route),
            GlobalMsg::Toast(toast) => GlobalMsg::Toast(toast),
        }
    }
}
