//! User directory collaborator.
//!
//! The user list page reads the full directory on every render through the
//! [`UserDirectory`] trait. Two sources exist: the built-in sample users and a
//! JSON file named in the configuration.

use crate::config::UsersConfig;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Kind of marketplace account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Buyer,
    Vendor,
    ProgramStaff,
}

/// A user account as held by the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub active: bool,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub name: String,
    pub admin: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum UserDirectoryError {
    #[error("Failed to read user directory {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse user directory {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Source of every user shown by the user list page
pub trait UserDirectory: Send + Sync {
    fn all_users(&self) -> Vec<User>;
}

static SAMPLE_USERS: Lazy<Vec<User>> = Lazy::new(|| {
    vec![
        User {
            active: true,
            user_type: UserType::ProgramStaff,
            name: "Program Staff".to_string(),
            admin: true,
        },
        User {
            active: true,
            user_type: UserType::Buyer,
            name: "Public Sector Buyer".to_string(),
            admin: false,
        },
        User {
            active: false,
            user_type: UserType::Buyer,
            name: "Former Buyer".to_string(),
            admin: false,
        },
        User {
            active: true,
            user_type: UserType::Vendor,
            name: "Vendor Incorporated".to_string(),
            admin: false,
        },
        User {
            active: false,
            user_type: UserType::Vendor,
            name: "Dormant Vendor Ltd.".to_string(),
            admin: false,
        },
    ]
});

/// Directory backed by a fixed list of users
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    users: Vec<User>,
}

impl InMemoryUserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Directory seeded with the built-in sample users
    pub fn sample() -> Self {
        Self::new(SAMPLE_USERS.clone())
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn all_users(&self) -> Vec<User> {
        self.users.clone()
    }
}

/// Directory loaded from a JSON array of users
#[derive(Debug, Clone)]
pub struct JsonUserDirectory {
    path: PathBuf,
    users: Vec<User>,
}

impl JsonUserDirectory {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, UserDirectoryError> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|source| UserDirectoryError::Read {
            path: path.clone(),
            source,
        })?;
        let users: Vec<User> = serde_json::from_str(&content).map_err(|source| UserDirectoryError::Parse {
            path: path.clone(),
            source,
        })?;
        log::info!("Loaded {} users from {}", users.len(), path.display());
        Ok(Self { path, users })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UserDirectory for JsonUserDirectory {
    fn all_users(&self) -> Vec<User> {
        self.users.clone()
    }
}

/// Build the configured directory
pub fn directory_from_config(config: &UsersConfig) -> Result<Arc<dyn UserDirectory>, UserDirectoryError> {
    match &config.source {
        Some(path) => Ok(Arc::new(JsonUserDirectory::load(path)?)),
        None => Ok(Arc::new(InMemoryUserDirectory::sample())),
    }
}
