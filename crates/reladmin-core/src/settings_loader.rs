//! Loading [`Settings`] from TOML files and the environment.
//!
//! TOML values are merged over the defaults, so a settings file only
//! needs to name the keys it changes. Application-specific keys go
//! under the `[extra]` table and surface as [`Settings::extra`].

use std::path::Path;

use crate::error::{AdminError, AdminResult};
use crate::settings::Settings;

impl Settings {
    /// Parses settings from a TOML string, merged over the defaults.
    pub fn from_toml_str(content: &str) -> AdminResult<Self> {
        let toml_value: toml::Value = content
            .parse()
            .map_err(|e| AdminError::ConfigurationError(format!("Failed to parse TOML: {e}")))?;

        let mut json = serde_json::to_value(Self::default()).map_err(|e| {
            AdminError::ConfigurationError(format!("Failed to serialize defaults: {e}"))
        })?;
        merge_json(&mut json, toml_to_json(toml_value));

        serde_json::from_value(json).map_err(|e| {
            AdminError::ConfigurationError(format!("Failed to deserialize settings: {e}"))
        })
    }

    /// Reads and parses a TOML settings file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> AdminResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            AdminError::ConfigurationError(format!(
                "Failed to read settings file '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Reads a TOML settings file, then applies environment overrides.
    pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> AdminResult<Self> {
        let mut settings = Self::from_toml_file(path)?;
        settings.apply_env_overrides();
        Ok(settings)
    }

    /// Builds settings from the defaults plus environment overrides.
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        settings.apply_env_overrides();
        settings
    }

    /// Applies `RELADMIN_*` environment variables over the current
    /// values. Unparseable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(debug) = std::env::var("RELADMIN_DEBUG") {
            if let Ok(parsed) = debug.parse::<bool>() {
                self.debug = parsed;
            }
        }
        if let Ok(log_level) = std::env::var("RELADMIN_LOG_LEVEL") {
            self.log_level = log_level;
        }
        if let Ok(site_name) = std::env::var("RELADMIN_SITE_NAME") {
            self.admin_site_name = site_name;
        }
        if let Ok(prefix) = std::env::var("RELADMIN_URL_PREFIX") {
            self.admin_url_prefix = prefix;
        }
    }
}

// ============================================================
// Helpers
// ============================================================

/// Converts a `toml::Value` tree into the equivalent `serde_json::Value`.
fn toml_to_json(value: toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s),
        toml::Value::Integer(i) => serde_json::Value::Number(i.into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
        toml::Value::Boolean(b) => serde_json::Value::Bool(b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => serde_json::Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

/// Recursively merges `overlay` into `base`. Objects merge key by key,
/// every other value type replaces the base value.
fn merge_json(base: &mut serde_json::Value, overlay: serde_json::Value) {
    match (base, overlay) {
        (serde_json::Value::Object(base_map), serde_json::Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base_slot, overlay_value) => *base_slot = overlay_value,
    }
}
