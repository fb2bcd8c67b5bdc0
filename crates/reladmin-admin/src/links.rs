//! Declarative link fields.
//!
//! An admin declares the relations it wants links for; this module
//! turns each declaration into a [`LinkField`] describing a synthetic
//! read-only column named `{relation}_link`. Forward relations produce
//! change links (pointing at the related record's edit page), reverse
//! relations produce changelist links (pointing at the related model's
//! list page, filtered down to records belonging to the instance).

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reladmin_core::utils::{capfirst, escape_html, underscore_label};
use reladmin_models::meta::ModelMeta;
use reladmin_models::registry::{ModelRegistry, ReverseRelation};
use serde::{Deserialize, Serialize};

/// Suffix appended to a relation name to form its link field name.
pub const LINK_FIELD_SUFFIX: &str = "_link";

/// The synthetic field name for a relation, e.g. `"author_link"`.
pub fn link_field_name(relation: &str) -> String {
    format!("{relation}{LINK_FIELD_SUFFIX}")
}

/// Which page a link field points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkKind {
    /// Edit page of a single related record.
    Change,
    /// Filtered list page of a related model.
    Changelist,
}

/// One relation link declaration, as written on a model admin.
///
/// The bare form names only the relation; options refine the column
/// header, the derived ordering, the target model, and the filter
/// lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDecl {
    /// Relation field name (forward) or reverse accessor name.
    pub relation: String,
    /// Column header and, for changelist links, the anchor text.
    pub label: Option<String>,
    /// Admin ordering expression for the synthesized column.
    pub order_field: Option<String>,
    /// Target app override.
    pub app: Option<String>,
    /// Target model override. Accepts `"model"` or `"app.model"`.
    pub model: Option<String>,
    /// Query parameter used to filter the target changelist.
    pub lookup_filter: Option<String>,
}

impl LinkDecl {
    /// Declares a link for `relation` with no options.
    pub fn new(relation: impl Into<String>) -> Self {
        Self {
            relation: relation.into(),
            ..Self::default()
        }
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the ordering expression.
    #[must_use]
    pub fn order_field(mut self, order_field: impl Into<String>) -> Self {
        self.order_field = Some(order_field.into());
        self
    }

    /// Overrides the target app.
    #[must_use]
    pub fn app(mut self, app: impl Into<String>) -> Self {
        self.app = Some(app.into());
        self
    }

    /// Overrides the target model.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the changelist filter lookup.
    #[must_use]
    pub fn lookup_filter(mut self, lookup: impl Into<String>) -> Self {
        self.lookup_filter = Some(lookup.into());
        self
    }
}

impl From<&str> for LinkDecl {
    fn from(relation: &str) -> Self {
        Self::new(relation)
    }
}

impl From<String> for LinkDecl {
    fn from(relation: String) -> Self {
        Self::new(relation)
    }
}

/// Target of a changelist link, resolved at synthesis time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTarget {
    pub app_label: String,
    pub model_name: String,
}

/// A fully synthesized link field.
///
/// Everything resolvable without an instance is resolved here;
/// rendering only adds the instance's primary key or related record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkField {
    /// Synthetic field name, `{relation}_link`.
    pub name: String,
    /// The declared relation.
    pub relation: String,
    /// Change or changelist.
    pub kind: LinkKind,
    /// Column header shown in the admin.
    pub header: String,
    /// Admin ordering expression, when derivable.
    pub order_field: Option<String>,
    /// Resolved changelist target. `None` for change links and for
    /// changelist declarations that could not be resolved.
    pub target: Option<LinkTarget>,
    /// Changelist filter lookup.
    pub lookup_filter: Option<String>,
    /// Changelist anchor text.
    pub label: Option<String>,
    /// Change-link target app override, applied over the related
    /// record's own app at render time.
    pub app_override: Option<String>,
    /// Change-link target model override.
    pub model_override: Option<String>,
}

/// Builds the [`LinkField`] for one declaration.
///
/// `own_app` and `own_meta` describe the admin's own model; `own_meta`
/// is absent when the model is not in the registry, which disables the
/// reflective parts of resolution but none of the explicit options.
pub(crate) fn synthesize(
    decl: &LinkDecl,
    kind: LinkKind,
    own_app: &str,
    own_meta: Option<&ModelMeta>,
    registry: &ModelRegistry,
) -> LinkField {
    let name = link_field_name(&decl.relation);
    let header = decl
        .label
        .clone()
        .unwrap_or_else(|| underscore_label(&decl.relation));
    let order_field = decl.order_field.clone().or_else(|| {
        own_meta.and_then(|meta| derive_order_field(meta, registry, &decl.relation))
    });

    let mut field = LinkField {
        name,
        relation: decl.relation.clone(),
        kind,
        header,
        order_field,
        target: None,
        lookup_filter: None,
        label: None,
        app_override: None,
        model_override: None,
    };

    match kind {
        LinkKind::Change => {
            field.app_override = decl.app.clone();
            field.model_override = decl.model.clone();
        }
        LinkKind::Changelist => {
            let reverse =
                own_meta.and_then(|meta| registry.reverse_relation(meta, &decl.relation));
            let target = resolve_target(decl, own_app, reverse.as_ref());
            let label = decl.label.clone().or_else(|| {
                target.as_ref().and_then(|t| {
                    registry
                        .get(&format!("{}.{}", t.app_label, t.model_name))
                        .map(|m| capfirst(&m.verbose_name_plural))
                })
            });

            field.lookup_filter = decl
                .lookup_filter
                .clone()
                .or_else(|| reverse.as_ref().map(|r| r.field_name.clone()));
            field.target = target;
            field.label = label;
        }
    }

    tracing::debug!(field = %field.name, kind = ?field.kind, "link field synthesized");
    field
}

/// Resolves a changelist declaration's target model.
///
/// Resolution order: a dotted `"app.model"` override, a bare model
/// override combined with the `app` option or the admin's own app, and
/// finally the model discovered through the reverse relation. The
/// `app` option also applies over the reflective result.
fn resolve_target(
    decl: &LinkDecl,
    own_app: &str,
    reverse: Option<&ReverseRelation>,
) -> Option<LinkTarget> {
    if let Some(model_option) = &decl.model {
        let lowered = model_option.to_lowercase();
        if let Some((app, model)) = lowered.split_once('.') {
            return Some(LinkTarget {
                app_label: app.to_string(),
                model_name: model.to_string(),
            });
        }
        return Some(LinkTarget {
            app_label: decl.app.clone().unwrap_or_else(|| own_app.to_string()),
            model_name: lowered,
        });
    }

    reverse.map(|r| LinkTarget {
        app_label: decl
            .app
            .clone()
            .unwrap_or_else(|| r.related_meta.app_label.to_string()),
        model_name: r.related_meta.model_name.to_string(),
    })
}

/// Derives the admin ordering expression from the related model's
/// default ordering. Forward relations reach the related model through
/// the declared field, reverse accessors through the registry's
/// reverse lookup.
fn derive_order_field(
    own_meta: &ModelMeta,
    registry: &ModelRegistry,
    relation: &str,
) -> Option<String> {
    let related = match own_meta.get_field(relation) {
        Some(field) => registry.get(field.related_model()?)?,
        None => registry.reverse_relation(own_meta, relation)?.related_meta,
    };
    let first = related.ordering.first()?;
    Some(format!("{relation}__{}", first.column))
}

/// Renders the anchor markup. Both pieces are HTML-escaped.
pub(crate) fn link_html(url: &str, label: &str) -> String {
    format!(
        "<a href=\"{}\" class=\"changelink\">{}</a>",
        escape_html(url),
        escape_html(label)
    )
}

/// Builds one percent-encoded `key=value` query pair.
pub(crate) fn encode_query_pair(key: &str, value: &str) -> String {
    format!(
        "{}={}",
        utf8_percent_encode(key, NON_ALPHANUMERIC),
        utf8_percent_encode(value, NON_ALPHANUMERIC)
    )
}

/// A rendered link cell: the synthetic field name, its column header,
/// and the anchor markup. `html` is `None` when the cell is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedLink {
    pub field: String,
    pub header: String,
    pub html: Option<String>,
}
