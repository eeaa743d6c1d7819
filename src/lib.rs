//! Marketplace - A Terminal User Interface (TUI) for the Digital Marketplace
//!
//! This library provides the front-end of the Digital Marketplace procurement
//! platform as a terminal application: a user directory listing, the
//! multi-phase "describe your project" wizard, reusable form fields, a table
//! component and an icon library, composed by an application shell with
//! routing, toasts, modals and navigation.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`icons`] - Closed icon set rendered as terminal glyphs
//! * [`users`] - User directory collaborator and its data sources
//! * [`validation`] - Validation rules for wizard values
//! * [`ui`] - Component framework, components, pages and the app shell
//! * [`utils`] - Utility functions and helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging setup and in-memory log capture
pub mod logger;

/// User directory data source
pub mod users;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date handling and text layout
pub mod utils;

/// Validation of project description values
pub mod validation;
