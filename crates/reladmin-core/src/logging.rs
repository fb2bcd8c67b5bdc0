//! Logging setup built on `tracing`.
//!
//! Call [`setup_logging`] once at startup. The output format follows
//! [`Settings::debug`]: human-readable in debug mode, JSON otherwise.

use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

use crate::settings::Settings;

/// Initializes the global tracing subscriber.
///
/// The filter directive comes from [`Settings::log_level`], falling
/// back to `info` when the directive does not parse. Calling this more
/// than once is a no-op.
pub fn setup_logging(settings: &Settings) {
    let filter =
        EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a span covering link rendering for one model instance.
pub fn render_span(model_key: &str) -> tracing::Span {
    tracing::info_span!("render_links", model = model_key)
}
