//! Field definitions that make up a model's metadata.

use serde::{Deserialize, Serialize};

/// Referential action attached to a relation field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OnDelete {
    /// Delete dependent rows.
    #[default]
    Cascade,
    /// Refuse the delete while dependents exist.
    Protect,
    /// Null out the pointing column.
    SetNull,
    /// Reset the pointing column to its default.
    SetDefault,
    /// Leave dependents untouched.
    DoNothing,
}

/// The concrete type of a model field.
///
/// Relation variants name their target as an `"app_label.model_name"`
/// key, matching [`crate::meta::ModelMeta::model_key`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FieldType {
    AutoField,
    BigAutoField,
    CharField,
    TextField,
    IntegerField,
    BigIntegerField,
    FloatField,
    BooleanField,
    DateTimeField,
    UuidField,
    ForeignKey {
        to: String,
        on_delete: OnDelete,
        related_name: Option<String>,
    },
    OneToOneField {
        to: String,
        on_delete: OnDelete,
        related_name: Option<String>,
    },
    ManyToManyField {
        to: String,
        related_name: Option<String>,
    },
}

/// A single field on a model.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Field name as written on the model.
    pub name: &'static str,
    /// Concrete field type.
    pub field_type: FieldType,
    /// Whether this field is the primary key.
    pub primary_key: bool,
    /// Whether the field admits NULL.
    pub null: bool,
    /// Maximum length for character fields.
    pub max_length: Option<u32>,
    /// Human-readable name. Defaults to the field name with
    /// underscores replaced by spaces.
    pub verbose_name: String,
}

impl FieldDef {
    /// Creates a field definition with the given name and type.
    pub fn new(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            primary_key: false,
            null: false,
            max_length: None,
            verbose_name: name.replace('_', " "),
        }
    }

    /// Marks this field as the primary key.
    #[must_use]
    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Allows NULL values.
    #[must_use]
    pub const fn nullable(mut self) -> Self {
        self.null = true;
        self
    }

    /// Sets the maximum length.
    #[must_use]
    pub const fn max_length(mut self, length: u32) -> Self {
        self.max_length = Some(length);
        self
    }

    /// Overrides the human-readable name.
    #[must_use]
    pub fn verbose_name(mut self, name: impl Into<String>) -> Self {
        self.verbose_name = name.into();
        self
    }

    /// Whether this field points at another model.
    pub const fn is_relation(&self) -> bool {
        matches!(
            self.field_type,
            FieldType::ForeignKey { .. }
                | FieldType::OneToOneField { .. }
                | FieldType::ManyToManyField { .. }
        )
    }

    /// The `"app.model"` key of the related model, for relation fields.
    pub fn related_model(&self) -> Option<&str> {
        match &self.field_type {
            FieldType::ForeignKey { to, .. }
            | FieldType::OneToOneField { to, .. }
            | FieldType::ManyToManyField { to, .. } => Some(to),
            _ => None,
        }
    }

    /// The explicit `related_name` of a relation field, when set.
    pub fn related_name(&self) -> Option<&str> {
        match &self.field_type {
            FieldType::ForeignKey { related_name, .. }
            | FieldType::OneToOneField { related_name, .. }
            | FieldType::ManyToManyField { related_name, .. } => related_name.as_deref(),
            _ => None,
        }
    }

    /// The accessor name the related model sees this relation under.
    ///
    /// `model_name` is the name of the model declaring this field.
    /// Foreign keys and many-to-many fields default to
    /// `{model_name}_set`; one-to-one fields default to the bare model
    /// name. An explicit `related_name` wins in every case.
    pub fn reverse_accessor(&self, model_name: &str) -> Option<String> {
        match &self.field_type {
            FieldType::ForeignKey { related_name, .. }
            | FieldType::ManyToManyField { related_name, .. } => Some(
                related_name
                    .clone()
                    .unwrap_or_else(|| format!("{model_name}_set")),
            ),
            FieldType::OneToOneField { related_name, .. } => Some(
                related_name
                    .clone()
                    .unwrap_or_else(|| model_name.to_string()),
            ),
            _ => None,
        }
    }
}
