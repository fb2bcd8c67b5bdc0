//! Static metadata describing a model.

use crate::fields::FieldDef;

/// One entry in a model's default ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    /// Column to order by.
    pub column: String,
    /// Whether to sort descending.
    pub descending: bool,
}

impl OrderBy {
    /// Ascending order on `column`.
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            descending: false,
        }
    }

    /// Descending order on `column`.
    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            descending: true,
        }
    }
}

/// Metadata for one model: identity, naming, ordering, and fields.
///
/// Instances are built once per model and handed out as `&'static`
/// references, typically from a `LazyLock` inside the model's
/// [`Model::meta`](crate::model::Model::meta) implementation.
#[derive(Debug, Clone)]
pub struct ModelMeta {
    /// Application the model belongs to.
    pub app_label: &'static str,
    /// Lowercase model name.
    pub model_name: &'static str,
    /// Human-readable singular name.
    pub verbose_name: String,
    /// Human-readable plural name.
    pub verbose_name_plural: String,
    /// Default ordering.
    pub ordering: Vec<OrderBy>,
    /// Field definitions.
    pub fields: Vec<FieldDef>,
}

impl ModelMeta {
    /// The `"app_label.model_name"` key this model is registered under.
    pub fn model_key(&self) -> String {
        format!("{}.{}", self.app_label, self.model_name)
    }

    /// Looks up a field by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}
