//! Content records and validated collections.
//!
//! Every section of the site is driven by a small, literal dataset. A dataset
//! is a [`ContentCollection`] of one record shape, and the declaration order is
//! the display order:
//!
//! ```text
//! StepRecord    { order, title, detail }              pipeline stages, walkthroughs
//! MetricRecord  { label, value, caption?, meter?,    stat blocks, bar charts
//!                 accent? }
//! FeatureRecord { title, description?, tag? }         cards, problems, bullet points
//! ```
//!
//! ## Validation
//!
//! Collections are checked when they are built, never when they are rendered:
//!
//! - a collection must hold at least one record
//! - required fields must not be blank
//! - explicit ordinals must run `1, 2, 3, …` in declaration order
//! - bar meters must not exceed 100
//!
//! A collection that fails any of these is a [`ConfigurationError`], and the
//! section that declares it cannot be assembled.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigurationError {
    #[error("{0} collection must contain at least one record")]
    Empty(RecordShape),
    #[error("{shape} record {position} is missing required field `{field}`")]
    MissingField {
        shape: RecordShape,
        position: usize,
        field: Field,
    },
    #[error("{shape} ordinal {ordinal} appears more than once")]
    DuplicateOrdinal { shape: RecordShape, ordinal: u32 },
    #[error("{shape} record {position} has ordinal {found}, expected {expected}")]
    NonContiguousOrdinal {
        shape: RecordShape,
        position: usize,
        expected: u32,
        found: u32,
    },
    #[error("{shape} record {position} has meter {meter}, above 100")]
    MeterOutOfRange {
        shape: RecordShape,
        position: usize,
        meter: u8,
    },
}

/// The closed set of record shapes a section can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordShape {
    Step,
    Metric,
    Feature,
}

impl std::fmt::Display for RecordShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RecordShape::Step => "step",
            RecordShape::Metric => "metric",
            RecordShape::Feature => "feature",
        };
        f.write_str(name)
    }
}

/// Named field of a record. Layout templates map these onto display regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Order,
    Title,
    Detail,
    Label,
    Value,
    Caption,
    Meter,
    Description,
    Tag,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Order => "order",
            Field::Title => "title",
            Field::Detail => "detail",
            Field::Label => "label",
            Field::Value => "value",
            Field::Caption => "caption",
            Field::Meter => "meter",
            Field::Description => "description",
            Field::Tag => "tag",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A fixed-shape content record.
///
/// `FIELDS` lists every field the shape declares, `REQUIRED` the subset that
/// must be present and non-blank. `field` returns the display text of a field,
/// or `None` when the shape does not declare it or an optional value is absent.
pub trait ContentRecord {
    const SHAPE: RecordShape;
    const FIELDS: &'static [Field];
    const REQUIRED: &'static [Field];

    fn field(&self, field: Field) -> Option<String>;

    /// Explicit display ordinal, for shapes that carry one.
    fn ordinal(&self) -> Option<u32> {
        None
    }

    /// Fill level in percent, for shapes drawn as bars.
    fn meter(&self) -> Option<u8> {
        None
    }

    /// Per-record colour overriding the theme default.
    fn accent(&self) -> Option<&str> {
        None
    }

    fn declares(field: Field) -> bool {
        Self::FIELDS.contains(&field)
    }
}

/// One stage of an ordered process. The ordinal is shown as `01`, `02`, ….
#[derive(Debug, Clone, PartialEq)]
pub struct StepRecord {
    pub order: u32,
    pub title: String,
    pub detail: String,
}

impl StepRecord {
    pub fn new(order: u32, title: &str, detail: &str) -> Self {
        Self {
            order,
            title: title.to_string(),
            detail: detail.to_string(),
        }
    }
}

impl ContentRecord for StepRecord {
    const SHAPE: RecordShape = RecordShape::Step;
    const FIELDS: &'static [Field] = &[Field::Order, Field::Title, Field::Detail];
    const REQUIRED: &'static [Field] = &[Field::Order, Field::Title, Field::Detail];

    fn field(&self, field: Field) -> Option<String> {
        match field {
            Field::Order => Some(format!("{:02}", self.order)),
            Field::Title => Some(self.title.clone()),
            Field::Detail => Some(self.detail.clone()),
            _ => None,
        }
    }

    fn ordinal(&self) -> Option<u32> {
        Some(self.order)
    }
}

/// A headline number with its label.
///
/// `meter` is a 0–100 fill level and `accent` an optional bar colour, both
/// only meaningful for bar-chart sections.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRecord {
    pub label: String,
    pub value: String,
    pub caption: Option<String>,
    pub meter: Option<u8>,
    pub accent: Option<String>,
}

impl MetricRecord {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            caption: None,
            meter: None,
            accent: None,
        }
    }

    pub fn with_caption(mut self, caption: &str) -> Self {
        self.caption = Some(caption.to_string());
        self
    }

    /// A bar-chart metric: the value is the percentage itself.
    ///
    /// Values above 100 are kept as given and rejected by the collection.
    pub fn percentage(label: &str, percent: u8) -> Self {
        Self {
            label: label.to_string(),
            value: format!("{percent}%"),
            caption: None,
            meter: Some(percent),
            accent: None,
        }
    }

    pub fn with_accent(mut self, accent: &str) -> Self {
        self.accent = Some(accent.to_string());
        self
    }
}

impl ContentRecord for MetricRecord {
    const SHAPE: RecordShape = RecordShape::Metric;
    const FIELDS: &'static [Field] = &[Field::Label, Field::Value, Field::Caption, Field::Meter];
    const REQUIRED: &'static [Field] = &[Field::Label, Field::Value];

    fn field(&self, field: Field) -> Option<String> {
        match field {
            Field::Label => Some(self.label.clone()),
            Field::Value => Some(self.value.clone()),
            Field::Caption => self.caption.clone(),
            Field::Meter => self.meter.map(|m| m.to_string()),
            _ => None,
        }
    }

    fn meter(&self) -> Option<u8> {
        self.meter
    }

    fn accent(&self) -> Option<&str> {
        self.accent.as_deref()
    }
}

/// A titled card. Problem statements and bullet points leave `tag` empty;
/// bullet points leave `description` empty as well.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    pub title: String,
    pub description: Option<String>,
    pub tag: Option<String>,
}

impl FeatureRecord {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: Some(description.to_string()),
            tag: None,
        }
    }

    pub fn point(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: None,
            tag: None,
        }
    }

    pub fn tagged(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }
}

impl ContentRecord for FeatureRecord {
    const SHAPE: RecordShape = RecordShape::Feature;
    const FIELDS: &'static [Field] = &[Field::Title, Field::Description, Field::Tag];
    const REQUIRED: &'static [Field] = &[Field::Title];

    fn field(&self, field: Field) -> Option<String> {
        match field {
            Field::Title => Some(self.title.clone()),
            Field::Description => self.description.clone(),
            Field::Tag => self.tag.clone(),
            _ => None,
        }
    }
}

/// A validated, non-empty, ordered sequence of records of one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentCollection<R> {
    records: Vec<R>,
}

impl<R: ContentRecord> ContentCollection<R> {
    /// Validate and wrap `records`. Declaration order is kept as display order.
    pub fn new(records: Vec<R>) -> Result<Self, ConfigurationError> {
        if records.is_empty() {
            return Err(ConfigurationError::Empty(R::SHAPE));
        }

        for (idx, record) in records.iter().enumerate() {
            for &field in R::REQUIRED {
                let present = record
                    .field(field)
                    .is_some_and(|value| !value.trim().is_empty());
                if !present {
                    return Err(ConfigurationError::MissingField {
                        shape: R::SHAPE,
                        position: idx + 1,
                        field,
                    });
                }
            }
            if let Some(meter) = record.meter().filter(|&m| m > 100) {
                return Err(ConfigurationError::MeterOutOfRange {
                    shape: R::SHAPE,
                    position: idx + 1,
                    meter,
                });
            }
        }

        check_ordinals::<R>(&records)?;

        Ok(Self { records })
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a validated collection.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn shape(&self) -> RecordShape {
        R::SHAPE
    }
}

impl<'a, R> IntoIterator for &'a ContentCollection<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Ordinals, when a shape has them, must read 1..=n in declaration order.
fn check_ordinals<R: ContentRecord>(records: &[R]) -> Result<(), ConfigurationError> {
    let mut seen = std::collections::BTreeSet::new();
    for (idx, record) in records.iter().enumerate() {
        let Some(found) = record.ordinal() else {
            continue;
        };
        if !seen.insert(found) {
            return Err(ConfigurationError::DuplicateOrdinal {
                shape: R::SHAPE,
                ordinal: found,
            });
        }
        let expected = idx as u32 + 1;
        if found != expected {
            return Err(ConfigurationError::NonContiguousOrdinal {
                shape: R::SHAPE,
                position: idx + 1,
                expected,
                found,
            });
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
