//! Utility modules for the Marketplace application.
//!
//! # Available Utilities
//!
//! - [`color`] - Mapping of theme color names to terminal colors
//! - [`datetime`] - Date parsing and formatting for form inputs
//! - [`text`] - Word wrapping for pre-laid-out views

pub mod color;
pub mod datetime;
pub mod text;
