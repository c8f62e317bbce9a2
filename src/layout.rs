//! Layout templates: how a record's fields land on the page.
//!
//! A template names an [`Arrangement`] for the whole collection and an ordered
//! field→region mapping for each record. The mapping order is also the order
//! regions appear inside a unit.
//!
//! ```text
//! Pipeline    Grid(3)     order → Index, title → Heading, detail → Body
//! Hero stats  StatStrip   value → Emphasis, label → Caption
//! Accuracy    BarChart    label → Caption, value → Emphasis, meter → Meter
//! ```

use crate::content::{ContentRecord, Field, RecordShape};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MappingError {
    #[error("template maps field `{field}` which {shape} records do not declare")]
    UndeclaredField { shape: RecordShape, field: Field },
    #[error("template highlights position {position} but the collection has {len} records")]
    HighlightOutOfRange { position: usize, len: usize },
    #[error("grid templates need at least one column")]
    ZeroColumns,
}

/// How units are arranged relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Arrangement {
    Grid { columns: u8 },
    List,
    BarChart,
    StatStrip,
}

impl Arrangement {
    pub fn css_class(&self) -> &'static str {
        match self {
            Arrangement::Grid { .. } => "layout-grid",
            Arrangement::List => "layout-list",
            Arrangement::BarChart => "layout-bars",
            Arrangement::StatStrip => "layout-stats",
        }
    }

    /// Inline style for the container. Grids pass their column count to the
    /// stylesheet as `--cols`, so any count renders.
    pub fn css_style(&self) -> Option<String> {
        match self {
            Arrangement::Grid { columns } => Some(format!("--cols: {columns};")),
            _ => None,
        }
    }
}

/// Display region inside one visual unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Index,
    Heading,
    Body,
    Emphasis,
    Caption,
    Tag,
    Meter,
}

impl Region {
    pub fn css_class(self) -> &'static str {
        match self {
            Region::Index => "unit-index",
            Region::Heading => "unit-heading",
            Region::Body => "unit-body",
            Region::Emphasis => "unit-emphasis",
            Region::Caption => "unit-caption",
            Region::Tag => "unit-tag",
            Region::Meter => "unit-meter",
        }
    }
}

/// A unit singled out for emphasis, e.g. the core metric in the pipeline grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight {
    /// 1-based position in the collection.
    pub position: usize,
    /// Optional badge text shown on the highlighted unit.
    pub badge: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutTemplate {
    pub arrangement: Arrangement,
    pub mapping: Vec<(Field, Region)>,
    pub highlight: Option<Highlight>,
}

impl LayoutTemplate {
    pub fn new(arrangement: Arrangement, mapping: &[(Field, Region)]) -> Self {
        Self {
            arrangement,
            mapping: mapping.to_vec(),
            highlight: None,
        }
    }

    pub fn highlight(mut self, position: usize, badge: Option<&str>) -> Self {
        self.highlight = Some(Highlight {
            position,
            badge: badge.map(str::to_string),
        });
        self
    }

    /// Numbered cards: ordinal, heading and body.
    pub fn step_grid(columns: u8) -> Self {
        Self::new(
            Arrangement::Grid { columns },
            &[
                (Field::Order, Region::Index),
                (Field::Title, Region::Heading),
                (Field::Detail, Region::Body),
            ],
        )
    }

    /// Numbered rows, one per step.
    pub fn step_list() -> Self {
        Self::new(
            Arrangement::List,
            &[
                (Field::Order, Region::Index),
                (Field::Title, Region::Heading),
                (Field::Detail, Region::Body),
            ],
        )
    }

    /// Cards with a heading, body text and a small tag.
    pub fn feature_grid(columns: u8) -> Self {
        Self::new(
            Arrangement::Grid { columns },
            &[
                (Field::Tag, Region::Tag),
                (Field::Title, Region::Heading),
                (Field::Description, Region::Body),
            ],
        )
    }

    /// Bullet-style rows showing only the title.
    pub fn point_list() -> Self {
        Self::new(Arrangement::List, &[(Field::Title, Region::Heading)])
    }

    /// Large number over a short label.
    pub fn stat_strip() -> Self {
        Self::new(
            Arrangement::StatStrip,
            &[
                (Field::Value, Region::Emphasis),
                (Field::Label, Region::Caption),
            ],
        )
    }

    /// Stat cards: number, label and an explanatory caption.
    pub fn metric_grid(columns: u8) -> Self {
        Self::new(
            Arrangement::Grid { columns },
            &[
                (Field::Label, Region::Caption),
                (Field::Value, Region::Emphasis),
                (Field::Caption, Region::Body),
            ],
        )
    }

    /// Horizontal bars filled to each record's meter level.
    pub fn bar_chart() -> Self {
        Self::new(
            Arrangement::BarChart,
            &[
                (Field::Label, Region::Caption),
                (Field::Value, Region::Emphasis),
                (Field::Meter, Region::Meter),
            ],
        )
    }

    /// Check the template against a record shape.
    ///
    /// Fails on the first mapped field the shape does not declare.
    pub fn check<R: ContentRecord>(&self) -> Result<(), MappingError> {
        if let Arrangement::Grid { columns: 0 } = self.arrangement {
            return Err(MappingError::ZeroColumns);
        }
        for &(field, _) in &self.mapping {
            if !R::declares(field) {
                return Err(MappingError::UndeclaredField {
                    shape: R::SHAPE,
                    field,
                });
            }
        }
        Ok(())
    }

    /// Check the highlight, if any, against a collection length.
    pub fn check_highlight(&self, len: usize) -> Result<(), MappingError> {
        match &self.highlight {
            Some(h) if h.position == 0 || h.position > len => {
                Err(MappingError::HighlightOutOfRange {
                    position: h.position,
                    len,
                })
            }
            _ => Ok(()),
        }
    }
}
