//! Project record model.
//!
//! # Responsibility
//! - Define the canonical project shape consumed by the showcase pipeline.
//! - Accept loosely-typed JSON without failing the whole content load.
//!
//! # Invariants
//! - `tech` keeps declaration order; the first entry is the technology sort key.
//! - `year == None` means the source value was missing or not numeric.
//! - Deserialization never fails on field value shape, only on document shape.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One portfolio project as loaded from `projects.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Display title. Unique within one content store.
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    /// Free text searched case-insensitively.
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    /// Closed-set tag such as `Game Dev` or `Tools`. Matched case-sensitively.
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    /// Technology tags in declaration order.
    #[serde(default, deserialize_with = "lenient_tech")]
    pub tech: Vec<String>,
    #[serde(default, deserialize_with = "lenient_year")]
    pub year: Option<i32>,
    /// Diverted out of the grid into the highlighted slot.
    #[serde(default, deserialize_with = "lenient_flag")]
    pub featured: bool,
    /// Live demo URL.
    #[serde(
        default,
        deserialize_with = "lenient_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub demo: Option<String>,
    /// Source/repository URL.
    #[serde(
        default,
        deserialize_with = "lenient_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub link: Option<String>,
}

impl ProjectRecord {
    /// Creates a record with empty description/tech and no year.
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            category: category.into(),
            tech: Vec::new(),
            year: None,
            featured: false,
            demo: None,
            link: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tech<I, S>(mut self, tech: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tech = tech.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// Returns the technology sort key, or `None` when `tech` is empty or
    /// starts with a blank entry.
    pub fn primary_tech(&self) -> Option<&str> {
        self.tech
            .first()
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) => value,
        Value::Number(value) => value.to_string(),
        Value::Bool(value) => value.to_string(),
        _ => String::new(),
    })
}

/// Non-string and blank values decode to `None`.
fn lenient_url<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    })
}

fn lenient_tech<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(value) => Some(value),
                _ => None,
            })
            .collect(),
        Value::String(value) if !value.trim().is_empty() => vec![value],
        _ => Vec::new(),
    })
}

fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|value| value.fract() == 0.0)
                    .map(|value| value as i64)
            })
            .and_then(|value| i32::try_from(value).ok()),
        Value::String(text) => text.trim().parse::<i32>().ok(),
        _ => None,
    })
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(value) => value,
        Value::String(text) => text.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::ProjectRecord;

    #[test]
    fn primary_tech_skips_blank_first_entry() {
        let record = ProjectRecord::new("A", "Tools").with_tech(["  ", "Rust"]);
        assert_eq!(record.primary_tech(), None);

        let record = ProjectRecord::new("B", "Tools").with_tech(["Rust", "Wasm"]);
        assert_eq!(record.primary_tech(), Some("Rust"));
    }

    #[test]
    fn builder_keeps_defaults_for_untouched_fields() {
        let record = ProjectRecord::new("A", "Tools");
        assert!(record.tech.is_empty());
        assert_eq!(record.year, None);
        assert!(!record.featured);
        assert_eq!(record.demo, None);
    }
}
