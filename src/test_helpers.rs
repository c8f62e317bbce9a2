//! Shared test utilities for composed pages.
//!
//! Lookup helpers panic with the list of available keys on a miss, so a
//! failing test says what was there instead of just "None".
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let page = compose(&home_page(&config)?, &config.theme);
//! let pipeline = find_section(&page, "pipeline");
//! assert_eq!(highlighted_positions(pipeline), vec![7]);
//! ```

use crate::layout::Region;
use crate::media::PresentationMode;
use crate::page::{ComposedSection, Page, SectionContent};
use crate::render::VisualUnit;

// =========================================================================
// Lookups
// =========================================================================

/// Find a composed page by route. Panics if not found.
pub fn find_page<'a>(pages: &'a [Page], route: &str) -> &'a Page {
    pages.iter().find(|p| p.route == route).unwrap_or_else(|| {
        let routes: Vec<&str> = pages.iter().map(|p| p.route.as_str()).collect();
        panic!("page '{route}' not found. Available: {routes:?}")
    })
}

/// Find a section by id. Panics if not found.
pub fn find_section<'a>(page: &'a Page, id: &str) -> &'a ComposedSection {
    page.sections.iter().find(|s| s.id == id).unwrap_or_else(|| {
        panic!(
            "section '{id}' not found on {}. Available: {:?}",
            page.route,
            section_ids(page)
        )
    })
}

/// Units of a collection-backed section. Panics on media or prose sections.
pub fn section_units(section: &ComposedSection) -> &[VisualUnit] {
    match &section.content {
        SectionContent::Units { units, .. } => units,
        other => panic!("section '{}' has no units: {other:?}", section.id),
    }
}

/// The presentation chosen for the page's media slot. Panics if there is none.
pub fn media_mode(page: &Page) -> PresentationMode {
    page.sections
        .iter()
        .find_map(|s| match &s.content {
            SectionContent::Media { mode, .. } => Some(*mode),
            _ => None,
        })
        .unwrap_or_else(|| {
            panic!(
                "no media section on {}. Sections: {:?}",
                page.route,
                section_ids(page)
            )
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

pub fn section_ids(page: &Page) -> Vec<&str> {
    page.sections.iter().map(|s| s.id.as_str()).collect()
}

pub fn highlighted_positions(section: &ComposedSection) -> Vec<usize> {
    section_units(section)
        .iter()
        .filter(|u| u.highlight.is_some())
        .map(|u| u.position)
        .collect()
}

/// Text of `region` for every unit, in order. Empty regions are skipped.
pub fn region_texts(section: &ComposedSection, region: Region) -> Vec<&str> {
    section_units(section)
        .iter()
        .filter_map(|u| u.region(region))
        .collect()
}
