//! The model traits and the [`RelatedRef`] handle.
//!
//! Models are split into two traits: [`ModelInstance`] carries the
//! per-record behavior the admin needs (primary key, display string,
//! relation access) and stays object-safe, while [`Model`] adds the
//! static [`ModelMeta`] hook.

use crate::meta::ModelMeta;
use crate::value::Value;

/// A lightweight handle to a related record.
///
/// This is what [`ModelInstance::related`] hands back: enough identity
/// to build an admin URL plus a display string for the anchor text,
/// without borrowing the related instance itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RelatedRef {
    /// App label of the related model.
    pub app_label: String,
    /// Lowercase name of the related model.
    pub model_name: String,
    /// Primary key of the related record. [`Value::Null`] when the
    /// record is unsaved.
    pub pk: Value,
    /// Display string of the related record.
    pub display: String,
}

impl RelatedRef {
    /// Builds a reference to `target`.
    pub fn to<M: Model>(target: &M) -> Self {
        let meta = M::meta();
        Self {
            app_label: meta.app_label.to_string(),
            model_name: meta.model_name.to_string(),
            pk: target.pk().unwrap_or(Value::Null),
            display: target.display(),
        }
    }
}

/// Per-record behavior of a model.
pub trait ModelInstance {
    /// The primary key, or `None` when the record is unsaved.
    fn pk(&self) -> Option<Value>;

    /// The human-readable representation of this record.
    fn display(&self) -> String;

    /// Resolves a forward relation by field name.
    ///
    /// Returns `None` both for unknown names and for relations that
    /// are currently null.
    fn related(&self, name: &str) -> Option<RelatedRef>;
}

/// A registered model type.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
///
/// use reladmin_models::fields::{FieldDef, FieldType};
/// use reladmin_models::meta::{ModelMeta, OrderBy};
/// use reladmin_models::model::{Model, ModelInstance, RelatedRef};
/// use reladmin_models::value::Value;
///
/// struct Author {
///     id: i64,
///     name: String,
/// }
///
/// static META: LazyLock<ModelMeta> = LazyLock::new(|| ModelMeta {
///     app_label: "blog",
///     model_name: "author",
///     verbose_name: "author".to_string(),
///     verbose_name_plural: "authors".to_string(),
///     ordering: vec![OrderBy::asc("name")],
///     fields: vec![
///         FieldDef::new("id", FieldType::BigAutoField).primary_key(),
///         FieldDef::new("name", FieldType::CharField).max_length(100),
///     ],
/// });
///
/// impl ModelInstance for Author {
///     fn pk(&self) -> Option<Value> {
///         Some(Value::Int(self.id))
///     }
///
///     fn display(&self) -> String {
///         self.name.clone()
///     }
///
///     fn related(&self, _name: &str) -> Option<RelatedRef> {
///         None
///     }
/// }
///
/// impl Model for Author {
///     fn meta() -> &'static ModelMeta {
///         &META
///     }
/// }
///
/// assert_eq!(Author::meta().model_key(), "blog.author");
/// ```
pub trait Model: ModelInstance + Send + Sync + 'static {
    /// Static metadata for this model type.
    fn meta() -> &'static ModelMeta;
}
