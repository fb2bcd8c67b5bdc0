//! # reladmin-models
//!
//! Model metadata and relation resolution. Models describe themselves
//! through a static [`ModelMeta`], implement [`ModelInstance`] for
//! per-record access, and are collected in a [`ModelRegistry`] so
//! relations can be resolved across the whole application.
//!
//! ## Modules
//!
//! - [`fields`] - [`FieldDef`], [`FieldType`], and [`OnDelete`]
//! - [`meta`] - [`ModelMeta`] and [`OrderBy`]
//! - [`model`] - The [`Model`] / [`ModelInstance`] traits and [`RelatedRef`]
//! - [`registry`] - [`ModelRegistry`] and reverse-relation lookup
//! - [`value`] - The dynamic [`Value`] type

pub mod fields;
pub mod meta;
pub mod model;
pub mod registry;
pub mod value;

pub use fields::{FieldDef, FieldType, OnDelete};
pub use meta::{ModelMeta, OrderBy};
pub use model::{Model, ModelInstance, RelatedRef};
pub use registry::{ModelRegistry, ReverseRelation};
pub use value::Value;
