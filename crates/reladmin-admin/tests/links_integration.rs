//! End-to-end tests for declarative relation links: model admins are
//! registered on a real site, link fields are synthesized, and the
//! rendered anchors are checked character for character.

use std::sync::LazyLock;

use reladmin_admin::{AdminSite, LinkDecl, LinkKind, ModelAdmin};
use reladmin_core::error::AdminError;
use reladmin_models::fields::{FieldDef, FieldType, OnDelete};
use reladmin_models::meta::{ModelMeta, OrderBy};
use reladmin_models::model::{Model, ModelInstance, RelatedRef};
use reladmin_models::value::Value;

// ── Helpers ────────────────────────────────────────────────────────

struct Reporter {
    id: i64,
    name: String,
}

static REPORTER_META: LazyLock<ModelMeta> = LazyLock::new(|| ModelMeta {
    app_label: "news",
    model_name: "reporter",
    verbose_name: "reporter".to_string(),
    verbose_name_plural: "reporters".to_string(),
    ordering: vec![OrderBy::asc("name")],
    fields: vec![
        FieldDef::new("id", FieldType::BigAutoField).primary_key(),
        FieldDef::new("name", FieldType::CharField).max_length(100),
    ],
});

impl ModelInstance for Reporter {
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

impl Model for Reporter {
    fn meta() -> &'static ModelMeta {
        &REPORTER_META
    }
}

struct Story {
    id: i64,
    title: String,
    reporter: Option<Reporter>,
}

static STORY_META: LazyLock<ModelMeta> = LazyLock::new(|| ModelMeta {
    app_label: "news",
    model_name: "story",
    verbose_name: "story".to_string(),
    verbose_name_plural: "stories".to_string(),
    ordering: vec![OrderBy::desc("id")],
    fields: vec![
        FieldDef::new("id", FieldType::BigAutoField).primary_key(),
        FieldDef::new("title", FieldType::CharField).max_length(200),
        FieldDef::new(
            "reporter",
            FieldType::ForeignKey {
                to: "news.reporter".to_string(),
                on_delete: OnDelete::Cascade,
                related_name: Some("stories".to_string()),
            },
        )
        .nullable(),
    ],
});

impl ModelInstance for Story {
    fn pk(&self) -> Option<Value> {
        (self.id != 0).then_some(Value::Int(self.id))
    }

    fn display(&self) -> String {
        self.title.clone()
    }

    fn related(&self, name: &str) -> Option<RelatedRef> {
        match name {
            "reporter" => self.reporter.as_ref().map(RelatedRef::to),
            _ => None,
        }
    }
}

impl Model for Story {
    fn meta() -> &'static ModelMeta {
        &STORY_META
    }
}

// Same model name as Reporter under a different app, for override
// scenarios.
struct ArchivedReporter;

static ARCHIVED_REPORTER_META: LazyLock<ModelMeta> = LazyLock::new(|| ModelMeta {
    app_label: "archive",
    model_name: "reporter",
    verbose_name: "reporter".to_string(),
    verbose_name_plural: "reporters".to_string(),
    ordering: vec![],
    fields: vec![
        FieldDef::new("id", FieldType::BigAutoField).primary_key(),
        FieldDef::new("name", FieldType::CharField).max_length(100),
    ],
});

impl ModelInstance for ArchivedReporter {
    fn pk(&self) -> Option<Value> {
        None
    }

    fn display(&self) -> String {
        String::new()
    }

    fn related(&self, _name: &str) -> Option<RelatedRef> {
        None
    }
}

impl Model for ArchivedReporter {
    fn meta() -> &'static ModelMeta {
        &ARCHIVED_REPORTER_META
    }
}

struct Publisher {
    id: Option<uuid::Uuid>,
    name: String,
}

static PUBLISHER_META: LazyLock<ModelMeta> = LazyLock::new(|| ModelMeta {
    app_label: "news",
    model_name: "publisher",
    verbose_name: "publisher".to_string(),
    verbose_name_plural: "publishers".to_string(),
    ordering: vec![],
    fields: vec![
        FieldDef::new("id", FieldType::UuidField).primary_key(),
        FieldDef::new("name", FieldType::CharField).max_length(100),
    ],
});

impl ModelInstance for Publisher {
    fn pk(&self) -> Option<Value> {
        self.id.map(Value::Uuid)
    }

    fn display(&self) -> String {
        self.name.clone()
    }

    fn related(&self, _name: &str) -> Option<RelatedRef> {
        None
    }
}

impl Model for Publisher {
    fn meta() -> &'static ModelMeta {
        &PUBLISHER_META
    }
}

struct Imprint;

static IMPRINT_META: LazyLock<ModelMeta> = LazyLock::new(|| ModelMeta {
    app_label: "news",
    model_name: "imprint",
    verbose_name: "imprint".to_string(),
    verbose_name_plural: "imprints".to_string(),
    ordering: vec![],
    fields: vec![
        FieldDef::new("id", FieldType::BigAutoField).primary_key(),
        FieldDef::new("name", FieldType::CharField).max_length(100),
        FieldDef::new(
            "publisher",
            FieldType::ForeignKey {
                to: "news.publisher".to_string(),
                on_delete: OnDelete::Cascade,
                related_name: None,
            },
        ),
    ],
});

impl ModelInstance for Imprint {
    fn pk(&self) -> Option<Value> {
        None
    }

    fn display(&self) -> String {
        String::new()
    }

    fn related(&self, _name: &str) -> Option<RelatedRef> {
        None
    }
}

impl Model for Imprint {
    fn meta() -> &'static ModelMeta {
        &IMPRINT_META
    }
}

fn reporter(id: i64, name: &str) -> Reporter {
    Reporter {
        id,
        name: name.to_string(),
    }
}

fn story(id: i64, title: &str, by: Option<Reporter>) -> Story {
    Story {
        id,
        title: title.to_string(),
        reporter: by,
    }
}

/// Site with the default admins: reporters link out to their stories,
/// stories link back to their reporter.
fn news_site() -> AdminSite {
    let mut site = AdminSite::new("admin");
    site.register::<Reporter>(
        ModelAdmin::new("news", "reporter")
            .fields(vec!["name"])
            .list_display(vec!["name", "stories_link"])
            .changelist_link_fields(vec!["stories"]),
    );
    site.register::<Story>(
        ModelAdmin::new("news", "story")
            .fields(vec!["title", "reporter"])
            .change_link_fields(vec!["reporter"]),
    );
    site
}

/// Site where the story admin is supplied by the test.
fn site_with_story_admin(story_admin: ModelAdmin) -> AdminSite {
    let mut site = AdminSite::new("admin");
    site.register::<Reporter>(ModelAdmin::new("news", "reporter"));
    site.register::<ArchivedReporter>(ModelAdmin::new("archive", "reporter"));
    site.register::<Story>(story_admin);
    site
}

// ═══════════════════════════════════════════════════════════════════
// 1. Synthesis and field-list membership
// ═══════════════════════════════════════════════════════════════════

#[test]
fn synthesized_names_appear_exactly_once() {
    let site = news_site();

    let story_admin = site.get_model_admin("news.story").unwrap();
    assert_eq!(story_admin.fields, vec!["title", "reporter", "reporter_link"]);
    assert_eq!(story_admin.readonly_fields, vec!["reporter_link"]);

    let reporter_admin = site.get_model_admin("news.reporter").unwrap();
    assert_eq!(reporter_admin.fields, vec!["name", "stories_link"]);
    assert_eq!(reporter_admin.readonly_fields, vec!["stories_link"]);
}

#[test]
fn membership_survives_repeated_registration() {
    let mut site = news_site();
    // Registering another model re-synthesizes every admin.
    site.register::<Publisher>(ModelAdmin::new("news", "publisher"));
    site.register::<Imprint>(ModelAdmin::new("news", "imprint"));

    let story_admin = site.get_model_admin("news.story").unwrap();
    let links = story_admin
        .fields
        .iter()
        .filter(|f| *f == "reporter_link")
        .count();
    assert_eq!(links, 1);
    assert_eq!(story_admin.readonly_fields, vec!["reporter_link"]);
}

// ═══════════════════════════════════════════════════════════════════
// 2. Change links
// ═══════════════════════════════════════════════════════════════════

#[test]
fn change_link_renders_edit_anchor() {
    let site = news_site();
    let story = story(1, "Flood on Main St", Some(reporter(7, "Lois Lane")));

    let html = site.render_link(&story, "reporter_link").unwrap();
    assert_eq!(
        html.as_deref(),
        Some("<a href=\"/admin/news/reporter/7/change/\" class=\"changelink\">Lois Lane</a>")
    );
}

#[test]
fn change_link_with_null_relation_is_empty() {
    let site = news_site();
    let story = story(1, "Unsigned editorial", None);
    assert_eq!(site.render_link(&story, "reporter_link").unwrap(), None);
}

#[test]
fn change_link_with_unsaved_target_is_empty() {
    let site = news_site();
    let story = story(1, "Draft byline", Some(reporter(0, "New Hire")));
    assert_eq!(site.render_link(&story, "reporter_link").unwrap(), None);
}

#[test]
fn change_link_escapes_display_text() {
    let site = news_site();
    let story = story(1, "Q&A", Some(reporter(3, "O'Brien <jr> & \"Co\"")));

    let html = site.render_link(&story, "reporter_link").unwrap().unwrap();
    assert!(html.contains(">O&#x27;Brien &lt;jr&gt; &amp; &quot;Co&quot;</a>"));
    assert!(!html.contains("<jr>"));
}

#[test]
fn change_link_custom_label_callback() {
    let mut site = news_site();
    site.set_link_label("news.story", "reporter_link", |related| {
        format!("Reporter #{}", related.pk)
    });

    let story = story(1, "Scoop", Some(reporter(7, "Lois Lane")));
    let html = site.render_link(&story, "reporter_link").unwrap().unwrap();
    assert!(html.contains(">Reporter #7</a>"));
}

// ═══════════════════════════════════════════════════════════════════
// 3. Changelist links
// ═══════════════════════════════════════════════════════════════════

#[test]
fn changelist_link_filters_by_reverse_field() {
    let site = news_site();
    let lois = reporter(7, "Lois Lane");

    let html = site.render_link(&lois, "stories_link").unwrap();
    assert_eq!(
        html.as_deref(),
        Some("<a href=\"/admin/news/story/?reporter=7\" class=\"changelink\">Stories</a>")
    );
}

#[test]
fn changelist_link_for_unsaved_instance_is_empty() {
    let site = news_site();
    let unsaved = reporter(0, "New Hire");
    assert_eq!(site.render_link(&unsaved, "stories_link").unwrap(), None);
}

#[test]
fn changelist_link_with_uuid_primary_key() {
    let mut site = news_site();
    site.register::<Publisher>(
        ModelAdmin::new("news", "publisher").changelist_link_fields(vec!["imprint_set"]),
    );
    site.register::<Imprint>(ModelAdmin::new("news", "imprint"));

    let publisher = Publisher {
        id: Some(uuid::Uuid::parse_str("1f0d7a5c-8f2e-4b77-9c2a-3d8d5b6e4a10").unwrap()),
        name: "Daily Planet Press".to_string(),
    };

    let html = site.render_link(&publisher, "imprint_set_link").unwrap().unwrap();
    assert_eq!(
        html,
        "<a href=\"/admin/news/imprint/?publisher=1f0d7a5c%2D8f2e%2D4b77%2D9c2a%2D3d8d5b6e4a10\" \
         class=\"changelink\">Imprints</a>"
    );
}

// ═══════════════════════════════════════════════════════════════════
// 4. Labels and headers
// ═══════════════════════════════════════════════════════════════════

#[test]
fn default_headers_derive_from_relation_names() {
    let site = news_site();
    let story_admin = site.get_model_admin("news.story").unwrap();
    assert_eq!(story_admin.link_field("reporter_link").unwrap().header, "Reporter");

    let reporter_admin = site.get_model_admin("news.reporter").unwrap();
    assert_eq!(reporter_admin.link_field("stories_link").unwrap().header, "Stories");
}

#[test]
fn label_option_replaces_header_exactly() {
    let site = site_with_story_admin(
        ModelAdmin::new("news", "story")
            .change_links(vec![LinkDecl::new("reporter").label("Byline")]),
    );
    let admin = site.get_model_admin("news.story").unwrap();
    assert_eq!(admin.link_field("reporter_link").unwrap().header, "Byline");
}

#[test]
fn label_option_replaces_changelist_anchor_text() {
    let mut site = AdminSite::new("admin");
    site.register::<Reporter>(
        ModelAdmin::new("news", "reporter")
            .changelist_links(vec![LinkDecl::new("stories").label("All stories")]),
    );
    site.register::<Story>(ModelAdmin::new("news", "story"));

    let html = site
        .render_link(&reporter(7, "Lois Lane"), "stories_link")
        .unwrap()
        .unwrap();
    assert!(html.contains(">All stories</a>"));

    let admin = site.get_model_admin("news.reporter").unwrap();
    assert_eq!(admin.link_field("stories_link").unwrap().header, "All stories");
}

// ═══════════════════════════════════════════════════════════════════
// 5. Target overrides
// ═══════════════════════════════════════════════════════════════════

#[test]
fn change_link_app_override_bypasses_reflection() {
    let site = site_with_story_admin(
        ModelAdmin::new("news", "story")
            .change_links(vec![LinkDecl::new("reporter").app("archive")]),
    );

    let story = story(1, "Cold case", Some(reporter(7, "Lois Lane")));
    let html = site.render_link(&story, "reporter_link").unwrap().unwrap();
    assert!(html.contains("href=\"/admin/archive/reporter/7/change/\""));
}

#[test]
fn changelist_link_dotted_model_override() {
    let mut site = AdminSite::new("admin");
    site.register::<Reporter>(
        ModelAdmin::new("news", "reporter")
            .changelist_links(vec![LinkDecl::new("stories").model("Archive.Reporter")]),
    );
    site.register::<Story>(ModelAdmin::new("news", "story"));
    site.register::<ArchivedReporter>(ModelAdmin::new("archive", "reporter"));

    let html = site
        .render_link(&reporter(7, "Lois Lane"), "stories_link")
        .unwrap()
        .unwrap();
    // Target comes from the override; the filter still comes from the
    // reverse relation, and the label from the overridden target.
    assert_eq!(
        html,
        "<a href=\"/admin/archive/reporter/?reporter=7\" class=\"changelink\">Reporters</a>"
    );
}

#[test]
fn changelist_link_lookup_filter_override() {
    let mut site = AdminSite::new("admin");
    site.register::<Reporter>(
        ModelAdmin::new("news", "reporter")
            .changelist_links(vec![LinkDecl::new("stories").lookup_filter("byline")]),
    );
    site.register::<Story>(ModelAdmin::new("news", "story"));

    let html = site
        .render_link(&reporter(7, "Lois Lane"), "stories_link")
        .unwrap()
        .unwrap();
    assert!(html.contains("?byline=7"));
}

// ═══════════════════════════════════════════════════════════════════
// 6. Ordering derivation
// ═══════════════════════════════════════════════════════════════════

#[test]
fn order_field_derives_from_target_ordering() {
    let site = news_site();
    let admin = site.get_model_admin("news.story").unwrap();
    assert_eq!(
        admin.link_field("reporter_link").unwrap().order_field.as_deref(),
        Some("reporter__name")
    );
}

#[test]
fn order_field_option_wins() {
    let site = site_with_story_admin(
        ModelAdmin::new("news", "story")
            .change_links(vec![LinkDecl::new("reporter").order_field("reporter__id")]),
    );
    let admin = site.get_model_admin("news.story").unwrap();
    assert_eq!(
        admin.link_field("reporter_link").unwrap().order_field.as_deref(),
        Some("reporter__id")
    );
}

#[test]
fn reverse_order_derives_from_related_model_ordering() {
    // Stories default to "-id"; the sort key keeps the column without
    // the direction prefix.
    let site = news_site();
    let admin = site.get_model_admin("news.reporter").unwrap();
    assert_eq!(
        admin.link_field("stories_link").unwrap().order_field.as_deref(),
        Some("stories__id")
    );
}

#[test]
fn reverse_order_absent_when_related_model_is_unordered() {
    let mut site = news_site();
    site.register::<Publisher>(
        ModelAdmin::new("news", "publisher").changelist_link_fields(vec!["imprint_set"]),
    );
    site.register::<Imprint>(ModelAdmin::new("news", "imprint"));

    let admin = site.get_model_admin("news.publisher").unwrap();
    assert!(admin.link_field("imprint_set_link").unwrap().order_field.is_none());
}

// ═══════════════════════════════════════════════════════════════════
// 7. Collisions
// ═══════════════════════════════════════════════════════════════════

#[test]
fn first_declaration_wins_on_collision() {
    let site = site_with_story_admin(
        ModelAdmin::new("news", "story")
            .change_links(vec![LinkDecl::new("reporter")])
            .changelist_links(vec![LinkDecl::new("reporter")]),
    );

    let admin = site.get_model_admin("news.story").unwrap();
    assert_eq!(admin.link_fields.len(), 1);
    assert_eq!(admin.link_fields[0].kind, LinkKind::Change);
}

// ═══════════════════════════════════════════════════════════════════
// 8. Error propagation
// ═══════════════════════════════════════════════════════════════════

#[test]
fn unresolvable_changelist_target_is_not_found() {
    let mut site = AdminSite::new("admin");
    site.register::<Reporter>(
        ModelAdmin::new("news", "reporter").changelist_link_fields(vec!["ghosts"]),
    );

    let err = site
        .render_link(&reporter(7, "Lois Lane"), "ghosts_link")
        .unwrap_err();
    assert!(matches!(err, AdminError::NotFound(_)));
}

#[test]
fn resolved_target_without_lookup_is_improperly_configured() {
    let mut site = AdminSite::new("admin");
    // The target is named explicitly but nothing points back at
    // reporters, so no lookup filter can be derived.
    site.register::<Reporter>(
        ModelAdmin::new("news", "reporter")
            .changelist_links(vec![LinkDecl::new("ghosts").model("news.story").label("Ghosts")]),
    );
    site.register::<Story>(ModelAdmin::new("news", "story"));

    let err = site
        .render_link(&reporter(7, "Lois Lane"), "ghosts_link")
        .unwrap_err();
    assert!(matches!(err, AdminError::ImproperlyConfigured(_)));
}

#[test]
fn unregistered_model_is_not_found() {
    let site = AdminSite::new("admin");
    let err = site.render_links(&reporter(7, "Lois Lane")).unwrap_err();
    assert!(matches!(err, AdminError::NotFound(_)));
}

#[test]
fn unknown_link_field_is_not_found() {
    let site = news_site();
    let err = site
        .render_link(&reporter(7, "Lois Lane"), "missing_link")
        .unwrap_err();
    assert!(matches!(err, AdminError::NotFound(_)));
}

// ═══════════════════════════════════════════════════════════════════
// 9. Rendering all links at once
// ═══════════════════════════════════════════════════════════════════

#[test]
fn render_links_covers_every_field() {
    let site = news_site();
    let story = story(1, "Flood on Main St", Some(reporter(7, "Lois Lane")));

    let rendered = site.render_links(&story).unwrap();
    assert_eq!(rendered.len(), 1);
    assert_eq!(rendered[0].field, "reporter_link");
    assert_eq!(rendered[0].header, "Reporter");
    assert!(rendered[0].html.as_deref().unwrap().contains("Lois Lane"));
}

#[test]
fn render_links_keeps_empty_cells() {
    let site = news_site();
    let rendered = site.render_links(&story(1, "Unsigned", None)).unwrap();
    assert_eq!(rendered.len(), 1);
    assert_eq!(rendered[0].html, None);
}
