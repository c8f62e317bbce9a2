//! # Structura Site
//!
//! Static builder for the StructuraAI marketing site. Every page is a fixed,
//! ordered list of sections, and nearly every section is the same mechanism:
//! a small literal collection of records mapped through a layout template into
//! a repeated visual structure.
//!
//! # Architecture
//!
//! ```text
//! registry  →  ContentCollection<R>          (validated literal records)
//! site      →  PageDefinition                (sections + templates per route)
//! page      →  Page                          (compose: render every section in order)
//! generate  →  dist/                         (maud HTML + style.css)
//! ```
//!
//! Everything up to [`page::compose`] is pure. Only [`generate`] touches the
//! filesystem, and it composes pages in parallel with rayon because nothing
//! is shared between them.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Record shapes (`StepRecord`, `MetricRecord`, `FeatureRecord`) and validated collections |
//! | [`registry`] | One literal, validated collection per content domain |
//! | [`layout`] | Layout templates: arrangement, field → region mapping, highlight |
//! | [`render`] | Section renderer: collection + template → visual units, and their HTML |
//! | [`media`] | Demo video presence switch: embedded player or placeholder |
//! | [`page`] | Section descriptors, page definitions, and the page composer |
//! | [`site`] | The four routes and the sections each is built from |
//! | [`config`] | `site.toml` loading, merging over stock defaults, validation, theme CSS |
//! | [`generate`] | HTML documents and output files |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Fail at Definition, Not at Render
//!
//! A collection is validated when it is built (non-empty, required fields
//! present, ordinals contiguous from 1), and a template is checked against
//! its record shape when the section descriptor is built. By the time a page
//! is composed there is nothing left to go wrong, so [`page::compose`] and
//! [`render::render`] return plain values.
//!
//! ## One Switch for the Demo Video
//!
//! Whether the demo page shows a player is decided in exactly one place,
//! [`media::select_presentation`], and only by whether the configured URL is
//! blank. The URL itself is never parsed; the browser loads it.
//!
//! ## Theme Tokens Are Configuration
//!
//! Colours live in `[theme]` of `site.toml` and are passed into the renderer
//! and the CSS emitter explicitly. The highlighted pipeline stage takes its
//! accent from the same tokens the stylesheet uses.

pub mod config;
pub mod content;
pub mod generate;
pub mod layout;
pub mod media;
pub mod output;
pub mod page;
pub mod registry;
pub mod render;
pub mod site;

#[cfg(test)]
pub(crate) mod test_helpers;
