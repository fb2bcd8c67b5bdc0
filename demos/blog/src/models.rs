//! Demo models. In a full application these impls would come from a
//! derive macro; here they are written out by hand.

use std::sync::LazyLock;

use reladmin_models::fields::{FieldDef, FieldType, OnDelete};
use reladmin_models::meta::{ModelMeta, OrderBy};
use reladmin_models::model::{Model, ModelInstance, RelatedRef};
use reladmin_models::value::Value;

pub struct Author {
    pub id: i64,
    pub name: String,
    pub email: String,
}

static AUTHOR_META: LazyLock<ModelMeta> = LazyLock::new(|| ModelMeta {
    app_label: "blog",
    model_name: "author",
    verbose_name: "author".to_string(),
    verbose_name_plural: "authors".to_string(),
    ordering: vec![OrderBy::asc("name")],
    fields: vec![
        FieldDef::new("id", FieldType::BigAutoField).primary_key(),
        FieldDef::new("name", FieldType::CharField).max_length(100),
        FieldDef::new("email", FieldType::CharField).max_length(254),
    ],
});

impl ModelInstance for Author {
    fn pk(&self) -> Option<Value> {
        (self.id != 0).then_some(Value::Int(self.id))
    }

    fn display(&self) -> String {
        self.name.clone()
    }

    fn related(&self, _name: &str) -> Option<RelatedRef> {
        None
    }
}

impl Model for Author {
    fn meta() -> &'static ModelMeta {
        &AUTHOR_META
    }
}

pub struct Article {
    pub id: i64,
    pub title: String,
    pub author: Option<Author>,
    pub published: bool,
}

static ARTICLE_META: LazyLock<ModelMeta> = LazyLock::new(|| ModelMeta {
    app_label: "blog",
    model_name: "article",
    verbose_name: "article".to_string(),
    verbose_name_plural: "articles".to_string(),
    ordering: vec![OrderBy::desc("id")],
    fields: vec![
        FieldDef::new("id", FieldType::BigAutoField).primary_key(),
        FieldDef::new("title", FieldType::CharField).max_length(200),
        FieldDef::new(
            "author",
            FieldType::ForeignKey {
                to: "blog.author".to_string(),
                on_delete: OnDelete::Cascade,
                related_name: Some("articles".to_string()),
            },
        )
        .nullable(),
        FieldDef::new("published", FieldType::BooleanField),
    ],
});

impl ModelInstance for Article {
    fn pk(&self) -> Option<Value> {
        (self.id != 0).then_some(Value::Int(self.id))
    }

    fn display(&self) -> String {
        self.title.clone()
    }

    fn related(&self, name: &str) -> Option<RelatedRef> {
        match name {
            "author" => self.author.as_ref().map(RelatedRef::to),
            _ => None,
        }
    }
}

impl Model for Article {
    fn meta() -> &'static ModelMeta {
        &ARTICLE_META
    }
}
