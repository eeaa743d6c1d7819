//! Core UI functionality for the Marketplace application.
//!
//! This module contains the building blocks every component is written
//! against: immutable state snapshots, side-effect commands, the component
//! traits, routing and message wrappers, shared context and the terminal
//! event and background task plumbing.
//!
//! # Architecture
//!
//! The UI follows an init/update/view architecture:
//!
//! 1. **State** lives in [`Immutable`] snapshots; updates copy only the changed path
//! 2. **Messages** are closed enums per component, matched exhaustively
//! 3. **Updates** are pure: `(state, msg) -> (state, Cmd)`
//! 4. **Commands** ([`Cmd`]) describe side effects that resolve to further messages
//! 5. **Composition** wraps child messages with explicit mapping functions
//!    (see [`update_component_child`])

pub mod cmd;
pub mod component;
pub mod context;
pub mod event_handler;
pub mod immutable;
pub mod msg;
pub mod route;
pub mod task_manager;

// Re-export core types for easier access from other modules
pub use cmd::Cmd;
pub use component::{update_component_child, Component, PageComponent, PageMetadata, UpdateReturn};
pub use context::{AppContext, Session, SharedState};
pub use event_handler::{EventHandler, EventType};
pub use immutable::Immutable;
pub use msg::{GlobalMsg, ToastContent, ToastLevel};
pub use route::Route;
pub use task_manager::{TaskId, TaskManager};
