//! Site configuration module.
//!
//! Handles loading, validating, and merging `site.toml`. Stock defaults are
//! serialized to a TOML table and the user's file is merged on top, so a config
//! file only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "StructuraAI — Autonomous Pre-Construction Intelligence Engine"
//! description = "Transform civil blueprints into executable construction strategies."
//! product = "StructuraAI"
//!
//! [media]
//! video_url = ""            # Empty = "coming soon" placeholder on /demo
//!
//! [theme]
//! background = "#07090C"
//! surface = "#0D1117"
//! surface_alt = "#131920"
//! primary = "#F59E0B"
//! primary_hover = "#D97706"
//! accent = "#1D4ED8"
//! muted = "#6B7280"
//! muted_light = "#9CA3AF"
//! border = "#1F2937"
//! border_light = "#374151"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::media::MediaConfiguration;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Document metadata shared by every page.
    pub site: SiteMeta,
    /// Demo video settings.
    pub media: MediaConfig,
    /// Colour tokens injected into rendering and CSS.
    pub theme: ThemeTokens,
}

impl SiteConfig {
    /// Validate config values after merging.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation("site.title must not be empty".into()));
        }
        if self.site.product.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.product must not be empty".into(),
            ));
        }
        for (name, value) in self.theme.tokens() {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "theme.{name} must not be empty"
                )));
            }
        }
        Ok(())
    }

    /// The demo page's media configuration.
    pub fn media_configuration(&self) -> MediaConfiguration {
        MediaConfiguration::new(&self.media.video_url)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    /// `<title>` of the home page; other pages prefix it with their own name.
    pub title: String,
    /// `<meta name="description">` content.
    pub description: String,
    /// Product name used in headings and the placeholder panel.
    pub product: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "StructuraAI — Autonomous Pre-Construction Intelligence Engine".to_string(),
            description: "Transform civil blueprints into executable construction strategies."
                .to_string(),
            product: "StructuraAI".to_string(),
        }
    }
}

/// Demo video settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MediaConfig {
    /// Embed URL of the demo video. Empty keeps the placeholder panel.
    pub video_url: String,
}

/// Named colour tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeTokens {
    pub background: String,
    pub surface: String,
    pub surface_alt: String,
    pub primary: String,
    pub primary_hover: String,
    pub accent: String,
    pub muted: String,
    pub muted_light: String,
    pub border: String,
    pub border_light: String,
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self {
            background: "#07090C".to_string(),
            surface: "#0D1117".to_string(),
            surface_alt: "#131920".to_string(),
            primary: "#F59E0B".to_string(),
            primary_hover: "#D97706".to_string(),
            accent: "#1D4ED8".to_string(),
            muted: "#6B7280".to_string(),
            muted_light: "#9CA3AF".to_string(),
            border: "#1F2937".to_string(),
            border_light: "#374151".to_string(),
        }
    }
}

impl ThemeTokens {
    /// Token name/value pairs in a fixed order.
    pub fn tokens(&self) -> [(&'static str, &str); 10] {
        [
            ("background", self.background.as_str()),
            ("surface", self.surface.as_str()),
            ("surface_alt", self.surface_alt.as_str()),
            ("primary", self.primary.as_str()),
            ("primary_hover", self.primary_hover.as_str()),
            ("accent", self.accent.as_str()),
            ("muted", self.muted.as_str()),
            ("muted_light", self.muted_light.as_str()),
            ("border", self.border.as_str()),
            ("border_light", self.border_light.as_str()),
        ]
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from the given file, falling back to stock defaults when the
/// file is absent.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `site.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# StructuraAI site configuration
# ==============================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Document metadata
# ---------------------------------------------------------------------------
[site]
title = "StructuraAI — Autonomous Pre-Construction Intelligence Engine"
description = "Transform civil blueprints into executable construction strategies."
# Product name used in headings.
product = "StructuraAI"

# ---------------------------------------------------------------------------
# Demo video
# ---------------------------------------------------------------------------
[media]
# Embed URL (e.g. https://www.youtube.com/embed/VIDEO_ID).
# Leave empty to show the "Demo Video Coming Soon" placeholder.
video_url = ""

# ---------------------------------------------------------------------------
# Theme tokens
# ---------------------------------------------------------------------------
[theme]
background = "#07090C"
surface = "#0D1117"
surface_alt = "#131920"
primary = "#F59E0B"
primary_hover = "#D97706"
accent = "#1D4ED8"
muted = "#6B7280"
muted_light = "#9CA3AF"
border = "#1F2937"
border_light = "#374151"
"##
}

/// Generate CSS custom properties from theme tokens.
pub fn generate_theme_css(theme: &ThemeTokens) -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in theme.tokens() {
        css.push_str(&format!("    --color-{}: {};\n", name.replace('_', "-"), value));
    }
    css.push('}');
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_theme() {
        let config = SiteConfig::default();
        assert_eq!(config.theme.background, "#07090C");
        assert_eq!(config.theme.primary, "#F59E0B");
    }

    #[test]
    fn default_media_is_empty() {
        let config = SiteConfig::default();
        assert_eq!(config.media.video_url, "");
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[theme]
primary = "#FF8800"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.theme.primary, "#FF8800");
        assert_eq!(config.theme.background, "#07090C");
        assert_eq!(config.site.product, "StructuraAI");
    }

    #[test]
    fn parse_media_url() {
        let toml = r#"
[media]
video_url = "https://www.youtube.com/embed/abc"
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.media.video_url, "https://www.youtube.com/embed/abc");
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("site.toml")).unwrap();
        assert_eq!(config.theme.surface, "#0D1117");
        assert_eq!(config.media.video_url, "");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site.toml");
        fs::write(
            &path,
            r##"
[site]
product = "Structura"

[theme]
accent = "#123456"
"##,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.site.product, "Structura");
        assert_eq!(config.theme.accent, "#123456");
        assert_eq!(config.theme.border, "#1F2937");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site.toml");
        fs::write(&path, "this is not valid toml [[[").unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site.toml");
        fs::write(
            &path,
            r#"
[theme]
primary = "  "
"#,
        )
        .unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str(
            r#"
[media]
video = "https://example.com"
"#,
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str(
            r#"
[navbar]
sticky = true
"#,
        );
        assert!(result.is_err());
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_table_merge() {
        let base: toml::Value = toml::from_str(
            r##"
[theme]
primary = "#F59E0B"
accent = "#1D4ED8"
"##,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r##"
[theme]
primary = "#000000"
"##,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let theme = merged.get("theme").unwrap();
        assert_eq!(theme.get("primary").unwrap().as_str(), Some("#000000"));
        assert_eq!(theme.get("accent").unwrap().as_str(), Some("#1D4ED8"));
    }

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str(r#"video_url = """#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"video_url = "x""#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("video_url").unwrap().as_str(), Some("x"));
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_blank_title() {
        let mut config = SiteConfig::default();
        config.site.title = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("site.title"));
    }

    #[test]
    fn validate_blank_token_names_it() {
        let mut config = SiteConfig::default();
        config.theme.muted_light = " ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("theme.muted_light"));
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config.theme, ThemeTokens::default());
        assert_eq!(config.site.product, "StructuraAI");
        assert_eq!(config.media.video_url, "");
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value().unwrap();
        assert!(val.get("site").is_some());
        assert!(val.get("media").is_some());
        assert!(val.get("theme").is_some());
    }

    // =========================================================================
    // CSS generation tests
    // =========================================================================

    #[test]
    fn theme_css_includes_every_token() {
        let css = generate_theme_css(&ThemeTokens::default());
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--color-background: #07090C;"));
        assert!(css.contains("--color-surface-alt: #131920;"));
        assert!(css.contains("--color-border-light: #374151;"));
    }

    #[test]
    fn media_configuration_from_config() {
        let mut config = SiteConfig::default();
        config.media.video_url = "https://example.com/embed/abc".to_string();
        assert_eq!(
            config.media_configuration().locator(),
            Some("https://example.com/embed/abc")
        );
    }
}
