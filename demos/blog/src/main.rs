//! Blog demo: declarative relation links on a small admin site.
//!
//! Articles link forward to their author's edit page; authors link
//! back to a changelist filtered down to their articles. Run with
//! `cargo run -p blog-demo`.

mod models;

use std::path::Path;

use reladmin_admin::{AdminSite, ModelAdmin};
use reladmin_core::error::AdminResult;
use reladmin_core::logging::setup_logging;
use reladmin_core::settings::{Settings, SETTINGS};

use crate::models::{Article, Author};

fn load_settings() -> Settings {
    for path in ["settings.toml", "demos/blog/settings.toml"] {
        if Path::new(path).exists() {
            match Settings::from_toml_file_with_env(path) {
                Ok(settings) => return settings,
                Err(err) => {
                    eprintln!("Ignoring settings file {path}: {err}");
                    break;
                }
            }
        }
    }
    Settings::from_env()
}

fn build_site() -> AdminSite {
    let mut site = AdminSite::from_settings(SETTINGS.get());
    site.register::<Author>(
        ModelAdmin::new("blog", "author")
            .fields(vec!["name", "email"])
            .list_display(vec!["name", "articles_link"])
            .changelist_link_fields(vec!["articles"]),
    );
    site.register::<Article>(
        ModelAdmin::new("blog", "article")
            .fields(vec!["title", "author", "published"])
            .list_display(vec!["title", "author_link"])
            .change_link_fields(vec!["author"]),
    );
    site
}

fn sample_authors() -> Vec<Author> {
    vec![
        Author {
            id: 1,
            name: "Lois Lane".to_string(),
            email: "lois@dailyplanet.example".to_string(),
        },
        Author {
            id: 2,
            name: "Clark Kent".to_string(),
            email: "clark@dailyplanet.example".to_string(),
        },
    ]
}

fn sample_articles() -> Vec<Article> {
    vec![
        Article {
            id: 1,
            title: "Flood on Main St".to_string(),
            author: Some(Author {
                id: 1,
                name: "Lois Lane".to_string(),
                email: "lois@dailyplanet.example".to_string(),
            }),
            published: true,
        },
        Article {
            id: 2,
            title: "City budget passes".to_string(),
            author: Some(Author {
                id: 2,
                name: "Clark Kent".to_string(),
                email: "clark@dailyplanet.example".to_string(),
            }),
            published: true,
        },
        Article {
            id: 3,
            title: "Unsigned editorial".to_string(),
            author: None,
            published: false,
        },
    ]
}

fn show_article_links(site: &AdminSite, articles: &[Article]) -> AdminResult<()> {
    println!("Articles");
    println!("========");
    for article in articles {
        for link in site.render_links(article)? {
            let cell = link.html.unwrap_or_default();
            println!("{:<20} {:<14} {cell}", article.title, link.header);
        }
    }
    println!();
    Ok(())
}

fn show_author_links(site: &AdminSite, authors: &[Author]) -> AdminResult<()> {
    println!("Authors");
    println!("=======");
    for author in authors {
        for link in site.render_links(author)? {
            let cell = link.html.unwrap_or_default();
            println!("{:<20} {:<14} {cell}", author.name, link.header);
        }
    }
    println!();
    Ok(())
}

fn main() -> AdminResult<()> {
    SETTINGS.configure(load_settings());
    setup_logging(SETTINGS.get());
    tracing::info!("starting blog demo");

    let site = build_site();
    tracing::info!(models = site.model_count(), "admin site ready");

    show_article_links(&site, &sample_articles())?;
    show_author_links(&site, &sample_authors())?;

    tracing::info!("done");
    Ok(())
}
