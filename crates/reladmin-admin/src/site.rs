//! The admin site: model registration, URL wiring, and link rendering.

use std::collections::HashMap;

use reladmin_core::error::{AdminError, AdminResult};
use reladmin_core::logging::render_span;
use reladmin_core::settings::Settings;
use reladmin_models::model::{Model, ModelInstance, RelatedRef};
use reladmin_models::registry::ModelRegistry;
use reladmin_models::value::Value;

use crate::links::{encode_query_pair, link_html, LinkField, LinkKind, RenderedLink};
use crate::model_admin::ModelAdmin;
use crate::urls::UrlReverser;

/// Callback producing the anchor text for a change link.
pub type LinkLabelFn = Box<dyn Fn(&RelatedRef) -> String + Send + Sync>;

/// Per-model registry of custom link label callbacks, keyed by the
/// synthetic field name.
#[derive(Default)]
pub struct LinkLabelRegistry {
    labels: HashMap<String, LinkLabelFn>,
}

impl LinkLabelRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a label callback for a link field.
    pub fn register<F>(&mut self, field_name: impl Into<String>, label: F)
    where
        F: Fn(&RelatedRef) -> String + Send + Sync + 'static,
    {
        self.labels.insert(field_name.into(), Box::new(label));
    }

    /// Looks up the callback for a link field.
    pub fn get(&self, field_name: &str) -> Option<&LinkLabelFn> {
        self.labels.get(field_name)
    }

    /// Names of all fields with a custom label, sorted.
    pub fn label_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.labels.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for LinkLabelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkLabelRegistry")
            .field("labels", &self.label_names())
            .finish()
    }
}

/// An admin site holding model admins, their URL patterns, and the
/// model registry used for relation resolution.
///
/// The site name doubles as the URL namespace: registering a model
/// adds `{name}:{app}_{model}_change` and
/// `{name}:{app}_{model}_changelist` patterns under the configured
/// prefix. Set the prefix before registering models; existing patterns
/// are not rewritten.
pub struct AdminSite {
    name: String,
    url_prefix: String,
    registered_models: HashMap<String, ModelAdmin>,
    registry: ModelRegistry,
    urls: UrlReverser,
    label_registries: HashMap<String, LinkLabelRegistry>,
}

impl AdminSite {
    /// Creates a site with the given namespace and the `/admin`
    /// prefix.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            url_prefix: "/admin".to_string(),
            registered_models: HashMap::new(),
            registry: ModelRegistry::new(),
            urls: UrlReverser::new(),
            label_registries: HashMap::new(),
        }
    }

    /// Creates a site named and prefixed from settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.admin_site_name).url_prefix(&settings.admin_url_prefix)
    }

    /// Sets the URL prefix.
    #[must_use]
    pub fn url_prefix(mut self, prefix: &str) -> Self {
        self.url_prefix = prefix.to_string();
        self
    }

    /// The site name / URL namespace.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The URL prefix.
    pub fn url_prefix_str(&self) -> &str {
        &self.url_prefix
    }

    /// Registers a model with its admin configuration.
    ///
    /// Adds the model's metadata to the registry, wires its change and
    /// changelist URL patterns, and re-synthesizes link fields on every
    /// registered admin so declarations naming this model resolve no
    /// matter the registration order.
    pub fn register<M: Model>(&mut self, admin: ModelAdmin) {
        let meta = M::meta();
        let model_key = meta.model_key();
        if admin.model_key() != model_key {
            tracing::warn!(
                admin = %admin.model_key(),
                model = %model_key,
                "admin configured for a different model key"
            );
        }

        self.registry.register::<M>();
        self.urls.register(
            format!("{}:{}_{}_change", self.name, meta.app_label, meta.model_name),
            format!(
                "{}/{}/{}/<pk>/change/",
                self.url_prefix, meta.app_label, meta.model_name
            ),
        );
        self.urls.register(
            format!(
                "{}:{}_{}_changelist",
                self.name, meta.app_label, meta.model_name
            ),
            format!("{}/{}/{}/", self.url_prefix, meta.app_label, meta.model_name),
        );
        self.label_registries.entry(model_key.clone()).or_default();

        tracing::debug!(model = %model_key, "model admin registered");
        self.registered_models.insert(model_key, admin);
        self.resynthesize();
    }

    /// Removes a model and everything registered alongside it.
    pub fn unregister(&mut self, model_key: &str) -> Option<ModelAdmin> {
        let admin = self.registered_models.remove(model_key)?;
        self.registry.remove(model_key);
        self.label_registries.remove(model_key);

        let view_base = model_key.replace('.', "_");
        self.urls.remove(&format!("{}:{view_base}_change", self.name));
        self.urls.remove(&format!("{}:{view_base}_changelist", self.name));

        tracing::debug!(model = %model_key, "model admin unregistered");
        self.resynthesize();
        Some(admin)
    }

    /// Looks up the admin for a model key.
    pub fn get_model_admin(&self, model_key: &str) -> Option<&ModelAdmin> {
        self.registered_models.get(model_key)
    }

    /// Whether a model key is registered.
    pub fn is_registered(&self, model_key: &str) -> bool {
        self.registered_models.contains_key(model_key)
    }

    /// Registered model keys, sorted.
    pub fn registered_models(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.registered_models.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Number of registered models.
    pub fn model_count(&self) -> usize {
        self.registered_models.len()
    }

    /// The model metadata registry.
    pub fn model_registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// The URL patterns registered on this site.
    pub fn urls(&self) -> &UrlReverser {
        &self.urls
    }

    /// Registers a custom anchor-text callback for a change link
    /// field.
    pub fn set_link_label<F>(&mut self, model_key: &str, field_name: &str, label: F)
    where
        F: Fn(&RelatedRef) -> String + Send + Sync + 'static,
    {
        self.label_registries
            .entry(model_key.to_string())
            .or_default()
            .register(field_name, label);
    }

    /// The label callbacks registered for a model.
    pub fn link_labels(&self, model_key: &str) -> Option<&LinkLabelRegistry> {
        self.label_registries.get(model_key)
    }

    /// The edit-page URL for one record.
    pub fn change_url(&self, app_label: &str, model_name: &str, pk: &Value) -> AdminResult<String> {
        let viewname = format!("{}:{app_label}_{model_name}_change", self.name);
        let pk = pk.to_string();
        self.urls.reverse(&viewname, &[&pk], &HashMap::new())
    }

    /// The list-page URL for a model.
    pub fn changelist_url(&self, app_label: &str, model_name: &str) -> AdminResult<String> {
        let viewname = format!("{}:{app_label}_{model_name}_changelist", self.name);
        self.urls.reverse(&viewname, &[], &HashMap::new())
    }

    /// Renders every link field of `instance`'s admin.
    pub fn render_links<M: Model>(&self, instance: &M) -> AdminResult<Vec<RenderedLink>> {
        let model_key = M::meta().model_key();
        let admin = self.admin_for(&model_key)?;

        let span = render_span(&model_key);
        let _guard = span.enter();

        let mut rendered = Vec::with_capacity(admin.link_fields.len());
        for field in &admin.link_fields {
            let html = self.render_field(&model_key, field, instance)?;
            rendered.push(RenderedLink {
                field: field.name.clone(),
                header: field.header.clone(),
                html,
            });
        }
        Ok(rendered)
    }

    /// Renders a single link field. `Ok(None)` is an empty cell.
    pub fn render_link<M: Model>(
        &self,
        instance: &M,
        field_name: &str,
    ) -> AdminResult<Option<String>> {
        let model_key = M::meta().model_key();
        let admin = self.admin_for(&model_key)?;
        let field = admin.link_field(field_name).ok_or_else(|| {
            AdminError::NotFound(format!(
                "Link field '{field_name}' not found on '{model_key}'"
            ))
        })?;
        self.render_field(&model_key, field, instance)
    }

    fn admin_for(&self, model_key: &str) -> AdminResult<&ModelAdmin> {
        self.registered_models.get(model_key).ok_or_else(|| {
            AdminError::NotFound(format!("Model '{model_key}' is not registered"))
        })
    }

    fn render_field(
        &self,
        model_key: &str,
        field: &LinkField,
        instance: &dyn ModelInstance,
    ) -> AdminResult<Option<String>> {
        match field.kind {
            LinkKind::Change => self.render_change(model_key, field, instance),
            LinkKind::Changelist => self.render_changelist(field, instance),
        }
    }

    /// A missing or unsaved related record renders as an empty cell.
    fn render_change(
        &self,
        model_key: &str,
        field: &LinkField,
        instance: &dyn ModelInstance,
    ) -> AdminResult<Option<String>> {
        let Some(target) = instance.related(&field.relation) else {
            return Ok(None);
        };
        if target.pk.is_null() {
            return Ok(None);
        }

        let app = field.app_override.as_deref().unwrap_or(&target.app_label);
        let model = field.model_override.as_deref().unwrap_or(&target.model_name);
        let url = self.change_url(app, model, &target.pk)?;

        let label = self
            .label_registries
            .get(model_key)
            .and_then(|labels| labels.get(&field.name))
            .map_or_else(|| target.display.clone(), |label_fn| label_fn(&target));

        Ok(Some(link_html(&url, &label)))
    }

    /// An unsaved instance has nothing to filter by and renders as an
    /// empty cell. An unresolved target or missing lookup is a
    /// configuration problem and surfaces as an error.
    fn render_changelist(
        &self,
        field: &LinkField,
        instance: &dyn ModelInstance,
    ) -> AdminResult<Option<String>> {
        let Some(pk) = instance.pk() else {
            return Ok(None);
        };

        let target = field.target.as_ref().ok_or_else(|| {
            AdminError::NotFound(format!(
                "No related model found for link field '{}'",
                field.name
            ))
        })?;
        let lookup = field.lookup_filter.as_deref().ok_or_else(|| {
            AdminError::ImproperlyConfigured(format!(
                "No lookup filter for link field '{}'",
                field.name
            ))
        })?;
        let label = field.label.as_deref().ok_or_else(|| {
            AdminError::ImproperlyConfigured(format!(
                "No label for link field '{}'",
                field.name
            ))
        })?;

        let base = self.changelist_url(&target.app_label, &target.model_name)?;
        let url = format!("{base}?{}", encode_query_pair(lookup, &pk.to_string()));
        Ok(Some(link_html(&url, label)))
    }

    fn resynthesize(&mut self) {
        for admin in self.registered_models.values_mut() {
            admin.synthesize_link_fields(&self.registry);
        }
    }
}

impl std::fmt::Debug for AdminSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSite")
            .field("name", &self.name)
            .field("url_prefix", &self.url_prefix)
            .field("model_count", &self.model_count())
            .finish_non_exhaustive()
    }
}
