//! Page definitions and composition.
//!
//! A [`PageDefinition`] is a fixed, ordered list of [`SectionDescriptor`]s for
//! one route. [`compose`] turns it into a [`Page`]: one [`ComposedSection`] per
//! descriptor, in declaration order, nothing dropped.
//!
//! Descriptors are checked as they are built. A descriptor whose template does
//! not fit its collection is a [`SectionError`] at definition time, so
//! composing is infallible.

use crate::config::ThemeTokens;
use crate::content::{
    ConfigurationError, ContentCollection, ContentRecord, FeatureRecord, MetricRecord, RecordShape,
    StepRecord,
};
use crate::layout::{LayoutTemplate, MappingError};
use crate::media::{MediaConfiguration, PresentationMode, select_presentation};
use crate::render::{VisualUnit, render};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SectionError {
    #[error("section `{section}`: {source}")]
    Configuration {
        section: String,
        source: ConfigurationError,
    },
    #[error("section `{section}`: {source}")]
    Mapping {
        section: String,
        source: MappingError,
    },
}

/// Attach a section id to a collection error.
///
/// ```ignore
/// let stages = registry::pipeline_stages().map_err(in_section("pipeline"))?;
/// ```
pub fn in_section(section: &str) -> impl Fn(ConfigurationError) -> SectionError + '_ {
    move |source| SectionError::Configuration {
        section: section.to_string(),
        source,
    }
}

/// Text shown above a section's content.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SectionHeading {
    /// Small uppercase label above the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<String>,
    /// Title lines; the second line, if any, is set in the accent gradient.
    pub title: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lede: Option<String>,
    /// Call-to-action links shown under the lede.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Action {
    pub label: String,
    pub href: String,
    /// Filled button; otherwise outlined.
    pub primary: bool,
}

impl Action {
    pub fn css_class(&self) -> &'static str {
        if self.primary {
            "btn btn-primary"
        } else {
            "btn btn-outline"
        }
    }
}

impl SectionHeading {
    pub fn new(title: &[&str]) -> Self {
        Self {
            eyebrow: None,
            title: title.iter().map(|s| s.to_string()).collect(),
            lede: None,
            actions: Vec::new(),
        }
    }

    pub fn eyebrow(mut self, eyebrow: &str) -> Self {
        self.eyebrow = Some(eyebrow.to_string());
        self
    }

    pub fn lede(mut self, lede: &str) -> Self {
        self.lede = Some(lede.to_string());
        self
    }

    pub fn action(mut self, label: &str, href: &str, primary: bool) -> Self {
        self.actions.push(Action {
            label: label.to_string(),
            href: href.to_string(),
            primary,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.eyebrow.is_none()
            && self.title.is_empty()
            && self.lede.is_none()
            && self.actions.is_empty()
    }
}

/// What a section renders. One variant per record shape keeps the shapes
/// closed while letting a page mix them.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    Steps(ContentCollection<StepRecord>, LayoutTemplate),
    Metrics(ContentCollection<MetricRecord>, LayoutTemplate),
    Features(ContentCollection<FeatureRecord>, LayoutTemplate),
    Media(MediaConfiguration),
    /// Markdown paragraphs.
    Prose(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionDescriptor {
    pub id: String,
    pub heading: SectionHeading,
    pub body: SectionBody,
}

impl SectionDescriptor {
    /// A section driven by a validated content collection.
    ///
    /// `template` is checked against the record shape and the collection length
    /// here, so a mismatch surfaces at definition time rather than at render time.
    pub fn collection<R>(
        id: &str,
        heading: SectionHeading,
        collection: ContentCollection<R>,
        template: LayoutTemplate,
    ) -> Result<Self, SectionError>
    where
        R: ContentRecord,
        SectionBody: FromCollection<R>,
    {
        let mapping_err = |source| SectionError::Mapping {
            section: id.to_string(),
            source,
        };
        template.check::<R>().map_err(mapping_err)?;
        template.check_highlight(collection.len()).map_err(mapping_err)?;

        Ok(Self {
            id: id.to_string(),
            heading,
            body: SectionBody::from_collection(collection, template),
        })
    }

    pub fn media(id: &str, heading: SectionHeading, config: MediaConfiguration) -> Self {
        Self {
            id: id.to_string(),
            heading,
            body: SectionBody::Media(config),
        }
    }

    pub fn prose(id: &str, heading: SectionHeading, paragraphs: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            heading,
            body: SectionBody::Prose(paragraphs.iter().map(|p| p.to_string()).collect()),
        }
    }
}

/// Backslash-escapes every ASCII punctuation character so `text` reads as
/// literal characters when interpolated into prose markdown.
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_punctuation() {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Wraps a typed collection into the matching [`SectionBody`] variant.
pub trait FromCollection<R> {
    fn from_collection(collection: ContentCollection<R>, template: LayoutTemplate) -> Self;
}

impl FromCollection<StepRecord> for SectionBody {
    fn from_collection(collection: ContentCollection<StepRecord>, template: LayoutTemplate) -> Self {
        SectionBody::Steps(collection, template)
    }
}

impl FromCollection<MetricRecord> for SectionBody {
    fn from_collection(collection: ContentCollection<MetricRecord>, template: LayoutTemplate) -> Self {
        SectionBody::Metrics(collection, template)
    }
}

impl FromCollection<FeatureRecord> for SectionBody {
    fn from_collection(
        collection: ContentCollection<FeatureRecord>,
        template: LayoutTemplate,
    ) -> Self {
        SectionBody::Features(collection, template)
    }
}

/// The fixed ordered list of sections composing one route.
#[derive(Debug, Clone, PartialEq)]
pub struct PageDefinition {
    /// Route path, e.g. `/` or `/demo`.
    pub route: String,
    /// Document `<title>`.
    pub title: String,
    pub sections: Vec<SectionDescriptor>,
}

impl PageDefinition {
    pub fn new(route: &str, title: &str, sections: Vec<SectionDescriptor>) -> Self {
        Self {
            route: route.to_string(),
            title: title.to_string(),
            sections,
        }
    }

    /// Output file for this route, relative to the site root.
    ///
    /// `/` → `index.html`, `/demo` → `demo/index.html`.
    pub fn output_path(&self) -> String {
        let trimmed = self.route.trim_matches('/');
        if trimmed.is_empty() {
            "index.html".to_string()
        } else {
            format!("{trimmed}/index.html")
        }
    }
}

// ============================================================================
// Composition
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub route: String,
    pub title: String,
    pub sections: Vec<ComposedSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedSection {
    pub id: String,
    pub heading: SectionHeading,
    pub content: SectionContent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionContent {
    Units {
        shape: RecordShape,
        template: LayoutTemplate,
        units: Vec<VisualUnit>,
    },
    Media {
        mode: PresentationMode,
        #[serde(skip_serializing_if = "Option::is_none")]
        locator: Option<String>,
    },
    Prose {
        paragraphs: Vec<String>,
    },
}

impl SectionContent {
    /// Rendered units, paragraphs for prose, 1 for a media slot.
    pub fn unit_count(&self) -> usize {
        match self {
            SectionContent::Units { units, .. } => units.len(),
            SectionContent::Media { .. } => 1,
            SectionContent::Prose { paragraphs } => paragraphs.len(),
        }
    }
}

/// Compose every section of `definition`, in order.
pub fn compose(definition: &PageDefinition, theme: &ThemeTokens) -> Page {
    let sections = definition
        .sections
        .iter()
        .map(|descriptor| {
            let content = compose_body(&descriptor.body, theme);
            tracing::debug!(
                route = %definition.route,
                section = %descriptor.id,
                units = content.unit_count(),
                "composed section"
            );
            ComposedSection {
                id: descriptor.id.clone(),
                heading: descriptor.heading.clone(),
                content,
            }
        })
        .collect();

    Page {
        route: definition.route.clone(),
        title: definition.title.clone(),
        sections,
    }
}

fn compose_body(body: &SectionBody, theme: &ThemeTokens) -> SectionContent {
    match body {
        SectionBody::Steps(c, t) => units(c, t, theme),
        SectionBody::Metrics(c, t) => units(c, t, theme),
        SectionBody::Features(c, t) => units(c, t, theme),
        SectionBody::Media(config) => {
            let mode = select_presentation(config);
            SectionContent::Media {
                mode,
                locator: config.locator().map(str::to_string),
            }
        }
        SectionBody::Prose(paragraphs) => SectionContent::Prose {
            paragraphs: paragraphs.clone(),
        },
    }
}

fn units<R: ContentRecord>(
    collection: &ContentCollection<R>,
    template: &LayoutTemplate,
    theme: &ThemeTokens,
) -> SectionContent {
    SectionContent::Units {
        shape: R::SHAPE,
        template: template.clone(),
        units: render(collection, template, theme),
    }
}
