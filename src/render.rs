//! Section renderer: content collection + template → visual units.
//!
//! [`render`] is the whole mechanism. It walks the collection in order and, for
//! each record, reads the fields named by the template's mapping into the
//! matching regions. It never drops, merges, or reorders records.
//!
//! [`units_markup`] is the HTML side, used by the generator once a page has
//! been composed.

use crate::config::ThemeTokens;
use crate::content::{ContentCollection, ContentRecord};
use crate::layout::{Arrangement, LayoutTemplate, Region};
use maud::{Markup, html};
use serde::Serialize;

/// One rendered record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualUnit {
    /// 1-based position in the collection.
    pub position: usize,
    /// Regions in template order. `None` marks an optional field left empty.
    pub regions: Vec<(Region, Option<String>)>,
    /// Colour the record asks for, e.g. one bar drawn in a different hue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<UnitHighlight>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitHighlight {
    /// Theme colour for the highlighted unit's border and badge.
    pub accent: String,
    pub badge: Option<String>,
}

impl VisualUnit {
    /// Text of the first region of the given kind.
    pub fn region(&self, region: Region) -> Option<&str> {
        self.regions
            .iter()
            .find(|(r, _)| *r == region)
            .and_then(|(_, text)| text.as_deref())
    }
}

/// Map every record of `collection` to one unit via `template`.
pub fn render<R: ContentRecord>(
    collection: &ContentCollection<R>,
    template: &LayoutTemplate,
    theme: &ThemeTokens,
) -> Vec<VisualUnit> {
    collection
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let position = idx + 1;
            let regions = template
                .mapping
                .iter()
                .map(|&(field, region)| {
                    let text = record.field(field).filter(|t| !t.trim().is_empty());
                    (region, text)
                })
                .collect();
            let highlight = template
                .highlight
                .as_ref()
                .filter(|h| h.position == position)
                .map(|h| UnitHighlight {
                    accent: theme.primary.clone(),
                    badge: h.badge.clone(),
                });
            let accent = record
                .accent()
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(str::to_string);
            VisualUnit {
                position,
                regions,
                accent,
                highlight,
            }
        })
        .collect()
}

// ============================================================================
// HTML
// ============================================================================

/// Render a list of units inside the arrangement's container.
pub fn units_markup(arrangement: Arrangement, units: &[VisualUnit]) -> Markup {
    html! {
        div class=(arrangement.css_class()) style=[arrangement.css_style()] {
            @for unit in units {
                (unit_markup(arrangement, unit))
            }
        }
    }
}

fn unit_markup(arrangement: Arrangement, unit: &VisualUnit) -> Markup {
    // The highlight accent wins over the record's own.
    let style = unit
        .highlight
        .as_ref()
        .map(|h| h.accent.as_str())
        .or(unit.accent.as_deref())
        .map(|accent| format!("--unit-accent: {accent};"));
    let classes = if unit.highlight.is_some() {
        "unit highlighted"
    } else {
        "unit"
    };

    html! {
        div class=(classes) style=[style] data-position=(unit.position) {
            @if let Some(badge) = unit.highlight.as_ref().and_then(|h| h.badge.as_deref()) {
                span.unit-badge { (badge) }
            }
            @for (region, text) in &unit.regions {
                (region_markup(arrangement, *region, text.as_deref()))
            }
        }
    }
}

fn region_markup(arrangement: Arrangement, region: Region, text: Option<&str>) -> Markup {
    let class = region.css_class();
    match region {
        // Bars draw the meter as a fill; the number itself sits in Emphasis.
        Region::Meter => {
            let fill = text.and_then(|t| t.parse::<u8>().ok()).unwrap_or(0).min(100);
            html! {
                div class=(class) {
                    div.meter-fill style={ "width: " (fill) "%;" } {}
                }
            }
        }
        Region::Heading => html! {
            h3 class=(class) { (text.unwrap_or_default()) }
        },
        Region::Emphasis if arrangement == Arrangement::StatStrip => html! {
            strong class=(class) { (text.unwrap_or_default()) }
        },
        _ => html! {
            @if let Some(text) = text {
                p class=(class) { (text) }
            } @else {
                p class=(class) {}
            }
        },
    }
}
