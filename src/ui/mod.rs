//! UI module for the Marketplace terminal front-end
//!
//! This module handles all user interface components, rendering, and user interactions.

pub mod app;
pub mod components;
pub mod core;
pub mod layout;
pub mod pages;
pub mod renderer;

pub use layout::LayoutManager;
pub use renderer::{run_app, AppComponent};
