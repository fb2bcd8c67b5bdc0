//! The model registry: lookup of model metadata by key, and relation
//! resolution across registered models.

use std::collections::HashMap;

use crate::meta::ModelMeta;
use crate::model::Model;

/// A reverse relation discovered by [`ModelRegistry::reverse_relation`].
#[derive(Debug, Clone)]
pub struct ReverseRelation {
    /// Metadata of the model holding the pointing field.
    pub related_meta: &'static ModelMeta,
    /// Name of the pointing field on that model.
    pub field_name: String,
    /// Accessor name the relation was found under.
    pub accessor: String,
}

/// All model metadata known to a site, keyed by `"app.model"`.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    metas: HashMap<String, &'static ModelMeta>,
}

impl ModelRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a model type.
    pub fn register<M: Model>(&mut self) {
        self.register_meta(M::meta());
    }

    /// Registers model metadata directly.
    pub fn register_meta(&mut self, meta: &'static ModelMeta) {
        let key = meta.model_key();
        tracing::debug!(model = %key, "model metadata registered");
        self.metas.insert(key, meta);
    }

    /// Looks up metadata by `"app.model"` key.
    pub fn get(&self, key: &str) -> Option<&'static ModelMeta> {
        self.metas.get(key).copied()
    }

    /// Whether the key is registered.
    pub fn is_registered(&self, key: &str) -> bool {
        self.metas.contains_key(key)
    }

    /// Removes a model, returning its metadata if it was registered.
    pub fn remove(&mut self, key: &str) -> Option<&'static ModelMeta> {
        self.metas.remove(key)
    }

    /// Number of registered models.
    pub fn len(&self) -> usize {
        self.metas.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.metas.is_empty()
    }

    /// Resolves the target metadata of a forward relation field.
    pub fn relation_target(
        &self,
        meta: &ModelMeta,
        field_name: &str,
    ) -> Option<&'static ModelMeta> {
        let field = meta.get_field(field_name)?;
        self.get(field.related_model()?)
    }

    /// Finds the model whose relation field points at `target` under
    /// the given reverse accessor name.
    ///
    /// Scans every registered model's relation fields, computing each
    /// field's reverse accessor and comparing it to `accessor`.
    pub fn reverse_relation(
        &self,
        target: &ModelMeta,
        accessor: &str,
    ) -> Option<ReverseRelation> {
        let target_key = target.model_key();
        for meta in self.metas.values().copied() {
            for field in &meta.fields {
                if field.related_model() == Some(target_key.as_str())
                    && field.reverse_accessor(meta.model_name).as_deref() == Some(accessor)
                {
                    return Some(ReverseRelation {
                        related_meta: meta,
                        field_name: field.name.to_string(),
                        accessor: accessor.to_string(),
                    });
                }
            }
        }
        None
    }
}
