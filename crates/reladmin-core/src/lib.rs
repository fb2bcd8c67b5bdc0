//! # reladmin-core
//!
//! Core infrastructure shared by every reladmin crate: the error type,
//! project settings, logging setup, and small text/HTML utilities.
//!
//! ## Modules
//!
//! - [`error`] - The [`AdminError`] enum and [`AdminResult`] alias
//! - [`logging`] - Tracing subscriber setup and span helpers
//! - [`settings`] - [`Settings`] and the global [`SETTINGS`] cell
//! - [`settings_loader`] - TOML and environment loading for settings
//! - [`utils`] - Text and HTML helpers

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;
pub mod utils;

pub use error::{AdminError, AdminResult};
pub use settings::{LazySettings, Settings, SETTINGS};
