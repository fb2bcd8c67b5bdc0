//! # reladmin
//!
//! Declarative relation links for admin interfaces. An admin names the
//! relations it wants links for; the site synthesizes read-only
//! `{relation}_link` fields rendering anchors to the related record's
//! edit page or to a filtered changelist.
//!
//! This crate re-exports the member crates under short names: `admin`
//! for the site and link machinery, `models` for model metadata, and
//! `core` for settings, errors, and logging.

/// Core settings, errors, logging, and text utilities.
pub use reladmin_core as core;

/// Model metadata, field definitions, and the model registry.
pub use reladmin_models as models;

/// The admin site and declarative relation links.
pub use reladmin_admin as admin;

pub use reladmin_admin::{AdminSite, LinkDecl, ModelAdmin};
pub use reladmin_core::{AdminError, AdminResult, Settings, SETTINGS};
pub use reladmin_models::{Model, ModelInstance, ModelMeta, RelatedRef, Value};
