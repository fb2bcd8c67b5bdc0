//! Error types for the reladmin framework.
//!
//! All fallible operations return [`AdminResult`], which wraps the
//! [`AdminError`] enum.

use thiserror::Error;

/// The unified error type for the framework.
#[derive(Error, Debug)]
pub enum AdminError {
    // ── Resolution errors ──────────────────────────────────────────

    /// A model, admin, URL pattern, or link field could not be found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A declaration is incomplete or inconsistent and cannot be
    /// rendered.
    #[error("Improperly configured: {0}")]
    ImproperlyConfigured(String),

    // ── Configuration errors ───────────────────────────────────────

    /// Settings could not be loaded or parsed.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// Convenience alias used across all reladmin crates.
pub type AdminResult<T> = Result<T, AdminError>;
