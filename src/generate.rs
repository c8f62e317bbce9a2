//! HTML site generation.
//!
//! Composes every page definition, renders each composed page to a complete
//! HTML document with maud, and writes the result under the output directory.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── style.css                  # Theme tokens + static/style.css
//! ├── index.html                 # /
//! ├── demo/index.html            # /demo
//! ├── about/index.html           # /about
//! └── architecture/index.html    # /architecture
//! ```
//!
//! Pages are composed and rendered in parallel; the returned list follows
//! declaration order regardless.

use crate::config::{self, SiteConfig, SiteMeta};
use crate::media::{MediaConfiguration, media_markup};
use crate::page::{ComposedSection, Page, PageDefinition, SectionContent, SectionError, SectionHeading, compose};
use crate::render::units_markup;
use crate::site;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Section(#[from] SectionError),
    #[error("no page is routed at `{0}`")]
    UnknownRoute(String),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// One page written to disk.
#[derive(Debug)]
pub struct GeneratedPage {
    pub page: Page,
    /// Path relative to the output directory.
    pub path: String,
}

/// Compose every page of the site with the given media configuration.
pub fn compose_site(
    config: &SiteConfig,
    media: &MediaConfiguration,
) -> Result<Vec<Page>, GenerateError> {
    let definitions = site::site_pages(config, media)?;
    Ok(definitions
        .par_iter()
        .map(|definition| compose(definition, &config.theme))
        .collect())
}

/// Composed page tree as pretty JSON, optionally narrowed to one route.
pub fn pages_json(pages: &[Page], route: Option<&str>) -> Result<String, GenerateError> {
    match route {
        None => Ok(serde_json::to_string_pretty(pages)?),
        Some(route) => {
            let page = pages
                .iter()
                .find(|p| p.route == route)
                .ok_or_else(|| GenerateError::UnknownRoute(route.to_string()))?;
            Ok(serde_json::to_string_pretty(page)?)
        }
    }
}

/// Build the whole site: compose, render and write every route plus `style.css`.
pub fn build(
    config: &SiteConfig,
    media: &MediaConfiguration,
    output_dir: &Path,
) -> Result<Vec<GeneratedPage>, GenerateError> {
    let definitions = site::site_pages(config, media)?;
    generate(&definitions, config, output_dir)
}

pub fn generate(
    definitions: &[PageDefinition],
    config: &SiteConfig,
    output_dir: &Path,
) -> Result<Vec<GeneratedPage>, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let css = format!(
        "{}\n\n{}",
        config::generate_theme_css(&config.theme),
        CSS_STATIC
    );
    fs::write(output_dir.join("style.css"), css)?;

    let rendered: Vec<(Page, String, Markup)> = definitions
        .par_iter()
        .map(|definition| {
            let page = compose(definition, &config.theme);
            let html = render_page(&page, &config.site);
            (page, definition.output_path(), html)
        })
        .collect();

    let mut generated = Vec::with_capacity(rendered.len());
    for (page, path, html) in rendered {
        let target = output_dir.join(&path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, html.into_string())?;
        tracing::info!(route = %page.route, path = %path, "wrote page");
        generated.push(GeneratedPage { page, path });
    }

    Ok(generated)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, description: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(description);
                title { (title) }
                link rel="stylesheet" href="/style.css";
            }
            body {
                (content)
            }
        }
    }
}

/// Eyebrow, title lines, lede and actions. Nothing when the heading is empty.
///
/// The second title line is set in the accent gradient. The first section of
/// a page gets the `h1`.
fn heading_markup(heading: &SectionHeading, top_level: bool) -> Markup {
    if heading.is_empty() {
        return html! {};
    }

    let lines = html! {
        @for (idx, line) in heading.title.iter().enumerate() {
            @if idx > 0 { br; }
            @if idx == 1 {
                span.text-gradient { (line) }
            } @else {
                (line)
            }
        }
    };

    html! {
        header.section-heading {
            @if let Some(eyebrow) = &heading.eyebrow {
                p.eyebrow { (eyebrow) }
            }
            @if !heading.title.is_empty() {
                @if top_level {
                    h1.section-title { (lines) }
                } @else {
                    h2.section-title { (lines) }
                }
            }
            @if let Some(lede) = &heading.lede {
                p.lede { (lede) }
            }
            @if !heading.actions.is_empty() {
                div.actions {
                    @for action in &heading.actions {
                        a class=(action.css_class()) href=(action.href) { (action.label) }
                    }
                }
            }
        }
    }
}

fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

/// Renders one composed section: heading plus units, media slot or prose.
fn section_markup(section: &ComposedSection, site: &SiteMeta, top_level: bool) -> Markup {
    let content = match &section.content {
        SectionContent::Units {
            template, units, ..
        } => units_markup(template.arrangement, units),
        SectionContent::Media { mode, locator } => {
            let media = MediaConfiguration::from(locator.clone());
            media_markup(*mode, &media, &site.product)
        }
        SectionContent::Prose { paragraphs } => html! {
            div.prose {
                @for paragraph in paragraphs {
                    (PreEscaped(markdown_to_html(paragraph)))
                }
            }
        },
    };

    html! {
        section id=(section.id) class={ "section section-" (section.id) } {
            (heading_markup(&section.heading, top_level))
            (content)
        }
    }
}

fn render_page(page: &Page, site: &SiteMeta) -> Markup {
    let content = html! {
        main.page data-route=(page.route) {
            @for (idx, section) in page.sections.iter().enumerate() {
                (section_markup(section, site, idx == 0))
            }
        }
    };
    base_document(&page.title, &site.description, content)
}

// ============================================================================
// Tests
// ============================================================================
