use crate::config::Config;
use crate::icons::IconService;
use crate::logger::LogBuffer;
use crate::users::{InMemoryUserDirectory, UserDirectory, UserType};
use std::sync::Arc;

/// Signed-in user, shared by every page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_name: String,
    pub user_type: UserType,
}

/// State shared across pages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedState {
    pub session: Option<Session>,
}

/// Services and settings available to every view and page
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub users: Arc<dyn UserDirectory>,
    pub icons: IconService,
    pub logs: LogBuffer,
}

impl AppContext {
    pub fn new(config: Config, users: Arc<dyn UserDirectory>, logs: LogBuffer) -> Self {
        let icons = IconService::new(config.ui.icon_theme);
        Self {
            config,
            users,
            icons,
            logs,
        }
    }

    /// Default configuration with the given users and no log capture
    pub fn with_users(users: impl UserDirectory + 'static) -> Self {
        Self::new(Config::default(), Arc::new(users), LogBuffer::new(0))
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::with_users(InMemoryUserDirectory::sample())
    }
}
