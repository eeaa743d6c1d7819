use serde::{Deserialize, Serialize};

/// Pages reachable through the router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    #[default]
    Landing,
    UserList,
    DescribeProject,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Landing, Route::UserList, Route::DescribeProject];

    /// Label shown in the navigation bar
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Route::Landing => "Home",
            Route::UserList => "Users",
            Route::DescribeProject => "Describe Project",
        }
    }
}
