//! CLI output formatting.
//!
//! Every page is shown as its route followed by its sections, one line per
//! section with a positional index and a short summary of what it renders.
//!
//! ## Check
//!
//! ```text
//! / StructuraAI — Autonomous Pre-Construction Intelligence Engine
//!     001 hero (4 metric units)
//!     002 problem (4 feature units)
//!     ...
//! /demo Demo · StructuraAI
//!     001 demo-header (1 paragraph)
//!     002 video (media: placeholder)
//!     003 demo-facts (3 metric units)
//!
//! Checked 4 pages, 17 sections
//! ```
//!
//! ## Build
//!
//! ```text
//! / → index.html
//!     001 hero (4 metric units)
//!     ...
//! /demo → demo/index.html
//!     ...
//!
//! Generated 4 pages, 17 sections → dist
//! ```
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::generate::GeneratedPage;
use crate::media::PresentationMode;
use crate::page::{ComposedSection, Page, SectionContent};
use std::path::Path;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// One section line: index, id and what it renders.
///
/// ```text
/// 005 pipeline (9 step units)
/// 002 video (media: embedded)
/// ```
fn section_line(index: usize, section: &ComposedSection) -> String {
    let detail = match &section.content {
        SectionContent::Units { shape, units, .. } => plural(units.len(), &format!("{shape} unit")),
        SectionContent::Media { mode, .. } => match mode {
            PresentationMode::Embedded => "media: embedded".to_string(),
            PresentationMode::Placeholder => "media: placeholder".to_string(),
        },
        SectionContent::Prose { paragraphs } => plural(paragraphs.len(), "paragraph"),
    };
    format!("{} {} ({})", format_index(index), section.id, detail)
}

fn section_lines(page: &Page, lines: &mut Vec<String>) {
    for (idx, section) in page.sections.iter().enumerate() {
        lines.push(format!("{}{}", indent(1), section_line(idx + 1, section)));
    }
}

fn section_total<'a>(pages: impl Iterator<Item = &'a Page>) -> usize {
    pages.map(|p| p.sections.len()).sum()
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check_output(pages: &[Page]) -> Vec<String> {
    let mut lines = Vec::new();
    for page in pages {
        lines.push(format!("{} {}", page.route, page.title));
        section_lines(page, &mut lines);
    }
    lines.push(String::new());
    lines.push(format!(
        "Checked {}, {}",
        plural(pages.len(), "page"),
        plural(section_total(pages.iter()), "section")
    ));
    lines
}

pub fn print_check_output(pages: &[Page]) {
    for line in format_check_output(pages) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

pub fn format_generate_output(generated: &[GeneratedPage], output_dir: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    for entry in generated {
        lines.push(format!("{} → {}", entry.page.route, entry.path));
        section_lines(&entry.page, &mut lines);
    }
    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {} → {}",
        plural(generated.len(), "page"),
        plural(section_total(generated.iter().map(|g| &g.page)), "section"),
        output_dir.display()
    ));
    lines
}

pub fn print_generate_output(generated: &[GeneratedPage], output_dir: &Path) {
    for line in format_generate_output(generated, output_dir) {
        println!("{}", line);
    }
}
