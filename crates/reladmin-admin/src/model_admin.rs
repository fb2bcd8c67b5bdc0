//! Admin configuration for a single model.

use reladmin_models::registry::ModelRegistry;
use serde::{Deserialize, Serialize};

use crate::links::{synthesize, LinkDecl, LinkField, LinkKind};

/// Declarative admin options for one model.
///
/// Plain data throughout, so a configured admin can be serialized and
/// inspected. Relation links are declared in [`change_links`] and
/// [`changelist_links`]; [`ModelAdmin::synthesize_link_fields`] turns
/// them into [`LinkField`] descriptors and ensures each synthetic name
/// appears in `fields` and `readonly_fields`.
///
/// [`change_links`]: ModelAdmin::change_links
/// [`changelist_links`]: ModelAdmin::changelist_links
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelAdmin {
    /// App this admin belongs to.
    pub app_label: String,
    /// Lowercase model name.
    pub model_name: String,
    /// Human-readable singular name.
    pub verbose_name: String,
    /// Human-readable plural name.
    pub verbose_name_plural: String,
    /// Fields shown on the change form.
    pub fields: Vec<String>,
    /// Fields rendered read-only.
    pub readonly_fields: Vec<String>,
    /// Columns shown on the changelist.
    pub list_display: Vec<String>,
    /// Changelist ordering.
    pub ordering: Vec<String>,
    /// Links to single related records.
    pub change_links: Vec<LinkDecl>,
    /// Links to filtered changelists of related models.
    pub changelist_links: Vec<LinkDecl>,
    /// Synthesized link descriptors. Rebuilt by
    /// [`ModelAdmin::synthesize_link_fields`].
    #[serde(default)]
    pub link_fields: Vec<LinkField>,
}

impl ModelAdmin {
    /// Creates an admin with default naming derived from the model
    /// name.
    pub fn new(app_label: impl Into<String>, model_name: impl Into<String>) -> Self {
        let app_label = app_label.into();
        let model_name = model_name.into();
        let verbose_name = model_name.replace('_', " ");
        let verbose_name_plural = format!("{verbose_name}s");

        Self {
            app_label,
            model_name,
            verbose_name,
            verbose_name_plural,
            fields: Vec::new(),
            readonly_fields: Vec::new(),
            list_display: vec!["__str__".to_string()],
            ordering: Vec::new(),
            change_links: Vec::new(),
            changelist_links: Vec::new(),
            link_fields: Vec::new(),
        }
    }

    /// Sets the human-readable singular name.
    #[must_use]
    pub fn verbose_name(mut self, name: impl Into<String>) -> Self {
        self.verbose_name = name.into();
        self
    }

    /// Sets the human-readable plural name.
    #[must_use]
    pub fn verbose_name_plural(mut self, name: impl Into<String>) -> Self {
        self.verbose_name_plural = name.into();
        self
    }

    /// Sets the change form fields.
    #[must_use]
    pub fn fields(mut self, fields: Vec<&str>) -> Self {
        self.fields = fields.into_iter().map(String::from).collect();
        self
    }

    /// Sets the read-only fields.
    #[must_use]
    pub fn readonly_fields(mut self, fields: Vec<&str>) -> Self {
        self.readonly_fields = fields.into_iter().map(String::from).collect();
        self
    }

    /// Sets the changelist columns.
    #[must_use]
    pub fn list_display(mut self, fields: Vec<&str>) -> Self {
        self.list_display = fields.into_iter().map(String::from).collect();
        self
    }

    /// Sets the changelist ordering.
    #[must_use]
    pub fn ordering(mut self, fields: Vec<&str>) -> Self {
        self.ordering = fields.into_iter().map(String::from).collect();
        self
    }

    /// Declares change links with options.
    #[must_use]
    pub fn change_links(mut self, links: Vec<LinkDecl>) -> Self {
        self.change_links = links;
        self
    }

    /// Declares change links by bare relation name.
    #[must_use]
    pub fn change_link_fields(mut self, relations: Vec<&str>) -> Self {
        self.change_links = relations.into_iter().map(LinkDecl::from).collect();
        self
    }

    /// Declares changelist links with options.
    #[must_use]
    pub fn changelist_links(mut self, links: Vec<LinkDecl>) -> Self {
        self.changelist_links = links;
        self
    }

    /// Declares changelist links by bare accessor name.
    #[must_use]
    pub fn changelist_link_fields(mut self, accessors: Vec<&str>) -> Self {
        self.changelist_links = accessors.into_iter().map(LinkDecl::from).collect();
        self
    }

    /// The `"app.model"` key this admin is registered under.
    pub fn model_key(&self) -> String {
        format!("{}.{}", self.app_label, self.model_name)
    }

    /// Looks up a synthesized link field by name.
    pub fn link_field(&self, name: &str) -> Option<&LinkField> {
        self.link_fields.iter().find(|f| f.name == name)
    }

    /// Rebuilds the synthesized link fields from the declarations.
    ///
    /// Change links are processed before changelist links; the first
    /// declaration of a name wins and later ones are skipped with a
    /// warning. Every synthesized name is ensured to appear exactly
    /// once in `fields` and `readonly_fields`, so calling this again
    /// after the registry has grown is safe.
    pub fn synthesize_link_fields(&mut self, registry: &ModelRegistry) {
        let own_meta = registry.get(&self.model_key());
        let mut synthesized: Vec<LinkField> =
            Vec::with_capacity(self.change_links.len() + self.changelist_links.len());

        let declared = self
            .change_links
            .iter()
            .map(|decl| (decl, LinkKind::Change))
            .chain(
                self.changelist_links
                    .iter()
                    .map(|decl| (decl, LinkKind::Changelist)),
            );

        for (decl, kind) in declared {
            let field = synthesize(decl, kind, &self.app_label, own_meta, registry);
            if synthesized.iter().any(|f| f.name == field.name) {
                tracing::warn!(
                    model = %self.model_key(),
                    field = %field.name,
                    "link field already defined, skipping"
                );
                continue;
            }
            synthesized.push(field);
        }

        for field in &synthesized {
            if !self.fields.contains(&field.name) {
                self.fields.push(field.name.clone());
            }
            if !self.readonly_fields.contains(&field.name) {
                self.readonly_fields.push(field.name.clone());
            }
        }

        self.link_fields = synthesized;
    }
}
