//! Global settings for a reladmin project.
//!
//! Settings are plain data. Construct them directly, or load them from
//! TOML via [`Settings::from_toml_str`] / [`Settings::from_toml_file`]
//! (see [`crate::settings_loader`]), then install them once into the
//! process-wide [`SETTINGS`] cell.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Project-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // ── Core ───────────────────────────────────────────────────────
    /// Debug mode. Enables human-readable log output.
    pub debug: bool,

    // ── Admin ──────────────────────────────────────────────────────
    /// Namespace used when reversing admin view names (`{name}:...`).
    pub admin_site_name: String,

    /// Path prefix under which admin URLs are mounted.
    pub admin_url_prefix: String,

    // ── Logging ────────────────────────────────────────────────────
    /// Log level directive understood by `tracing_subscriber`'s
    /// `EnvFilter` (e.g. `"info"`, `"reladmin_admin=debug"`).
    pub log_level: String,

    // ── Escape hatch ───────────────────────────────────────────────
    /// Arbitrary extra settings not modeled as typed fields.
    pub extra: HashMap<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            admin_site_name: "admin".to_string(),
            admin_url_prefix: "/admin".to_string(),
            log_level: "info".to_string(),
            extra: HashMap::new(),
        }
    }
}

/// Lazily-initialized global settings container.
///
/// Mirrors the usual "configure once at startup, read everywhere"
/// lifecycle. Reading before configuring is a programmer error and
/// panics with an explicit message.
pub struct LazySettings {
    inner: OnceLock<Settings>,
}

impl LazySettings {
    /// Creates an empty, unconfigured container.
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// Installs the settings.
    ///
    /// # Panics
    ///
    /// Panics if settings have already been configured.
    pub fn configure(&self, settings: Settings) {
        self.inner
            .set(settings)
            .expect("Settings have already been configured");
    }

    /// Returns the installed settings.
    ///
    /// # Panics
    ///
    /// Panics if settings have not been configured yet.
    pub fn get(&self) -> &Settings {
        self.inner
            .get()
            .expect("Settings have not been configured. Call SETTINGS.configure() first.")
    }

    /// Whether [`LazySettings::configure`] has run.
    pub fn is_configured(&self) -> bool {
        self.inner.get().is_some()
    }
}

impl Default for LazySettings {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide settings instance.
pub static SETTINGS: LazySettings = LazySettings::new();
