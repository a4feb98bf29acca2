//! Masonry grid sizing.
//!
//! # Invariants
//! - A [`SizePattern`] is never empty.
//! - `size_for(index)` is `pattern[index % len]`: no state, no randomness.

use crate::model::project::ProjectRecord;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Visual size of one grid card (also used for control sizing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardSize {
    Small,
    Medium,
    Large,
}

impl CardSize {
    pub fn parse(value: &str) -> Result<Self, LayoutError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            other => Err(LayoutError::UnknownSize(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Repeating sequence of card sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CardSize>", into = "Vec<CardSize>")]
pub struct SizePattern(Vec<CardSize>);

impl SizePattern {
    pub fn new(sizes: Vec<CardSize>) -> Result<Self, LayoutError> {
        if sizes.is_empty() {
            return Err(LayoutError::EmptyPattern);
        }
        Ok(Self(sizes))
    }

    /// Parses labels such as `["small", "small", "large"]`.
    pub fn from_labels<I, S>(labels: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sizes = labels
            .into_iter()
            .map(|label| CardSize::parse(label.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(sizes)
    }

    /// Parses a comma-separated list such as `small,small,large`.
    pub fn parse_list(value: &str) -> Result<Self, LayoutError> {
        Self::from_labels(value.split(',').filter(|part| !part.trim().is_empty()))
    }

    pub fn size_for(&self, index: usize) -> CardSize {
        self.0[index % self.0.len()]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[CardSize] {
        &self.0
    }
}

impl Default for SizePattern {
    fn default() -> Self {
        Self(vec![CardSize::Small, CardSize::Small, CardSize::Large])
    }
}

impl TryFrom<Vec<CardSize>> for SizePattern {
    type Error = LayoutError;

    fn try_from(value: Vec<CardSize>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SizePattern> for Vec<CardSize> {
    fn from(value: SizePattern) -> Self {
        value.0
    }
}

/// One grid card: a record plus its assigned size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizedProject<'a> {
    pub record: &'a ProjectRecord,
    pub size: CardSize,
}

/// Assigns sizes by position in `records`.
pub fn assign_sizes<'a>(records: &[&'a ProjectRecord], pattern: &SizePattern) -> Vec<SizedProject<'a>> {
    records
        .iter()
        .copied()
        .enumerate()
        .map(|(index, record)| SizedProject {
            record,
            size: pattern.size_for(index),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    EmptyPattern,
    UnknownSize(String),
}

impl Display for LayoutError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPattern => write!(f, "size pattern must not be empty"),
            Self::UnknownSize(value) => write!(
                f,
                "unknown card size `{value}`; expected small|medium|large"
            ),
        }
    }
}

impl Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::{CardSize, LayoutError, SizePattern};

    #[test]
    fn empty_pattern_is_rejected() {
        assert_eq!(SizePattern::new(Vec::new()), Err(LayoutError::EmptyPattern));
        assert_eq!(SizePattern::parse_list(" , "), Err(LayoutError::EmptyPattern));
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = SizePattern::from_labels(["small", "huge"]).unwrap_err();
        assert_eq!(err, LayoutError::UnknownSize("huge".to_string()));
    }

    #[test]
    fn size_for_wraps_around_pattern() {
        let pattern = SizePattern::parse_list("large, medium").unwrap();
        assert_eq!(pattern.size_for(0), CardSize::Large);
        assert_eq!(pattern.size_for(1), CardSize::Medium);
        assert_eq!(pattern.size_for(4), CardSize::Large);
    }
}
