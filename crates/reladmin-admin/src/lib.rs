//! # reladmin-admin
//!
//! The admin site and its declarative relation links. A model admin
//! lists the relations it wants links for; registration synthesizes a
//! read-only `{relation}_link` field per declaration, and rendering
//! produces the anchor markup for a given model instance.
//!
//! ## Modules
//!
//! - [`links`] - Link declarations, synthesis, and anchor markup
//! - [`model_admin`] - Per-model admin configuration
//! - [`site`] - [`AdminSite`]: registration, URLs, and rendering
//! - [`urls`] - Named URL patterns and reversal
//!
//! ## Example
//!
//! ```
//! use std::sync::LazyLock;
//!
//! use reladmin_admin::{AdminSite, ModelAdmin};
//! use reladmin_models::fields::{FieldDef, FieldType, OnDelete};
//! use reladmin_models::meta::{ModelMeta, OrderBy};
//! use reladmin_models::model::{Model, ModelInstance, RelatedRef};
//! use reladmin_models::value::Value;
//!
//! struct Author {
//!     id: i64,
//!     name: String,
//! }
//!
//! static AUTHOR_META: LazyLock<ModelMeta> = LazyLock::new(|| ModelMeta {
//!     app_label: "blog",
//!     model_name: "author",
//!     verbose_name: "author".to_string(),
//!     verbose_name_plural: "authors".to_string(),
//!     ordering: vec![OrderBy::asc("name")],
//!     fields: vec![
//!         FieldDef::new("id", FieldType::BigAutoField).primary_key(),
//!         FieldDef::new("name", FieldType::CharField).max_length(100),
//!     ],
//! });
//!
//! impl ModelInstance for Author {
//!     fn pk(&self) -> Option<Value> {
//!         Some(Value::Int(self.id))
//!     }
//!
//!     fn display(&self) -> String {
//!         self.name.clone()
//!     }
//!
//!     fn related(&self, _name: &str) -> Option<RelatedRef> {
//!         None
//!     }
//! }
//!
//! impl Model for Author {
//!     fn meta() -> &'static ModelMeta {
//!         &AUTHOR_META
//!     }
//! }
//!
//! struct Article {
//!     id: i64,
//!     title: String,
//!     author: Option<Author>,
//! }
//!
//! static ARTICLE_META: LazyLock<ModelMeta> = LazyLock::new(|| ModelMeta {
//!     app_label: "blog",
//!     model_name: "article",
//!     verbose_name: "article".to_string(),
//!     verbose_name_plural: "articles".to_string(),
//!     ordering: vec![],
//!     fields: vec![
//!         FieldDef::new("id", FieldType::BigAutoField).primary_key(),
//!         FieldDef::new("title", FieldType::CharField).max_length(200),
//!         FieldDef::new(
//!             "author",
//!             FieldType::ForeignKey {
//!                 to: "blog.author".to_string(),
//!                 on_delete: OnDelete::Cascade,
//!                 related_name: Some("articles".to_string()),
//!             },
//!         )
//!         .nullable(),
//!     ],
//! });
//!
//! impl ModelInstance for Article {
//!     fn pk(&self) -> Option<Value> {
//!         Some(Value::Int(self.id))
//!     }
//!
//!     fn display(&self) -> String {
//!         self.title.clone()
//!     }
//!
//!     fn related(&self, name: &str) -> Option<RelatedRef> {
//!         match name {
//!             "author" => self.author.as_ref().map(RelatedRef::to),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! impl Model for Article {
//!     fn meta() -> &'static ModelMeta {
//!         &ARTICLE_META
//!     }
//! }
//!
//! let mut site = AdminSite::new("admin");
//! site.register::<Author>(ModelAdmin::new("blog", "author"));
//! site.register::<Article>(
//!     ModelAdmin::new("blog", "article").change_link_fields(vec!["author"]),
//! );
//!
//! let article = Article {
//!     id: 1,
//!     title: "Hello".to_string(),
//!     author: Some(Author {
//!         id: 7,
//!         name: "Ada".to_string(),
//!     }),
//! };
//!
//! let html = site.render_link(&article, "author_link").unwrap();
//! assert_eq!(
//!     html.as_deref(),
//!     Some("<a href=\"/admin/blog/author/7/change/\" class=\"changelink\">Ada</a>"),
//! );
//! ```

pub mod links;
pub mod model_admin;
pub mod site;
pub mod urls;

pub use links::{
    link_field_name, LinkDecl, LinkField, LinkKind, LinkTarget, RenderedLink, LINK_FIELD_SUFFIX,
};
pub use model_admin::ModelAdmin;
pub use site::{AdminSite, LinkLabelFn, LinkLabelRegistry};
pub use urls::{UrlPattern, UrlReverser};
