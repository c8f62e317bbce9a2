//! Demo video presence switch.
//!
//! The demo page shows either an embedded player or a "coming soon" panel.
//! The choice depends on one thing: whether the configured video locator is
//! empty once surrounding whitespace is removed. The locator itself is never
//! parsed or fetched here; the browser loads it through the iframe.

use maud::{Markup, html};
use serde::Serialize;

/// A single optional resource locator, read once when the page is composed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaConfiguration {
    locator: Option<String>,
}

impl MediaConfiguration {
    pub fn new(locator: &str) -> Self {
        Self {
            locator: Some(locator.to_string()),
        }
    }

    pub fn absent() -> Self {
        Self { locator: None }
    }

    /// The trimmed locator, or `None` when nothing usable is configured.
    pub fn locator(&self) -> Option<&str> {
        self.locator
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

impl From<Option<String>> for MediaConfiguration {
    fn from(locator: Option<String>) -> Self {
        Self { locator }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationMode {
    Embedded,
    Placeholder,
}

/// `Embedded` iff the locator is non-empty after trimming.
pub fn select_presentation(config: &MediaConfiguration) -> PresentationMode {
    match config.locator() {
        Some(_) => PresentationMode::Embedded,
        None => PresentationMode::Placeholder,
    }
}

const IFRAME_ALLOW: &str = "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

/// Render the media slot for the selected mode.
///
/// `Embedded` with no locator cannot come out of [`select_presentation`]; if a
/// caller forces it anyway the placeholder is shown.
pub fn media_markup(mode: PresentationMode, config: &MediaConfiguration, product: &str) -> Markup {
    match (mode, config.locator()) {
        (PresentationMode::Embedded, Some(src)) => html! {
            div.media-frame.media-embedded {
                iframe src=(src)
                    title={ (product) " Demo Video" }
                    allow=(IFRAME_ALLOW)
                    allowfullscreen {}
            }
        },
        _ => html! {
            div.media-frame.media-placeholder {
                div.play-button aria-hidden="true" {
                    svg width="32" height="32" viewBox="0 0 24 24" fill="currentColor" {
                        polygon points="5 3 19 12 5 21 5 3" {}
                    }
                }
                p.placeholder-title { "Demo Video Coming Soon" }
                p.placeholder-hint {
                    "Set " code { "media.video_url" } " in " code { "site.toml" } " to publish your video."
                }
                span.sheet-label.top-left { "AR-DEMO / SHEET 01" }
                span.sheet-label.bottom-right { "SCALE: FULL" }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_placeholder() {
        let mode = select_presentation(&MediaConfiguration::new(""));
        assert_eq!(mode, PresentationMode::Placeholder);
    }

    #[test]
    fn whitespace_only_is_placeholder() {
        let mode = select_presentation(&MediaConfiguration::new("   "));
        assert_eq!(mode, PresentationMode::Placeholder);
        let mode = select_presentation(&MediaConfiguration::new("\t\n"));
        assert_eq!(mode, PresentationMode::Placeholder);
    }

    #[test]
    fn absent_is_placeholder() {
        assert_eq!(
            select_presentation(&MediaConfiguration::absent()),
            PresentationMode::Placeholder
        );
        assert_eq!(
            select_presentation(&MediaConfiguration::from(None)),
            PresentationMode::Placeholder
        );
    }

    #[test]
    fn url_is_embedded() {
        let mode = select_presentation(&MediaConfiguration::new("https://example.com/embed/abc"));
        assert_eq!(mode, PresentationMode::Embedded);
    }

    #[test]
    fn malformed_locator_still_embedded() {
        // Only emptiness is inspected.
        let mode = select_presentation(&MediaConfiguration::new("not a url"));
        assert_eq!(mode, PresentationMode::Embedded);
    }

    #[test]
    fn locator_is_trimmed() {
        let config = MediaConfiguration::new("  https://example.com/embed/abc \n");
        assert_eq!(config.locator(), Some("https://example.com/embed/abc"));
    }

    #[test]
    fn embedded_markup_has_iframe() {
        let config = MediaConfiguration::new("https://example.com/embed/abc");
        let mode = select_presentation(&config);
        let html = media_markup(mode, &config, "StructuraAI").into_string();
        assert!(html.contains("<iframe"));
        assert!(html.contains(r#"src="https://example.com/embed/abc""#));
        assert!(html.contains("StructuraAI Demo Video"));
        assert!(!html.contains("Coming Soon"));
    }

    #[test]
    fn placeholder_markup_has_no_iframe() {
        let config = MediaConfiguration::new("");
        let mode = select_presentation(&config);
        let html = media_markup(mode, &config, "StructuraAI").into_string();
        assert!(!html.contains("<iframe"));
        assert!(html.contains("Demo Video Coming Soon"));
    }

    #[test]
    fn forced_embedded_without_locator_falls_back() {
        let html =
            media_markup(PresentationMode::Embedded, &MediaConfiguration::absent(), "X").into_string();
        assert!(html.contains("media-placeholder"));
    }

    #[test]
    fn locator_is_escaped() {
        let config = MediaConfiguration::new(r#"https://example.com/"><script>"#);
        let html = media_markup(select_presentation(&config), &config, "X").into_string();
        assert!(!html.contains("<script>"));
    }
}
