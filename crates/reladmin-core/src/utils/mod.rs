//! Shared utility helpers.

pub mod html;
pub mod text;

pub use html::escape_html;
pub use text::{capfirst, underscore_label};
