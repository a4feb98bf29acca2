//! Read-only content store for projects, profile and UI copy.
//!
//! # Responsibility
//! - Parse `projects.json`, `profile.json` and `ui.json`.
//! - Expose borrowed, read-only accessors for the session lifetime.
//!
//! # Invariants
//! - `projects.json` is required; the other documents default when absent.
//! - Malformed project field values degrade per record; a malformed document
//!   shape fails the load.

use crate::model::profile::Profile;
use crate::model::project::ProjectRecord;
use log::info;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const PROJECTS_FILE: &str = "projects.json";
pub const PROFILE_FILE: &str = "profile.json";
pub const UI_TEXT_FILE: &str = "ui.json";

pub type ContentResult<T> = Result<T, ContentError>;

/// Content loading error.
#[derive(Debug)]
pub enum ContentError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Document is not valid JSON or does not decode into the expected type.
    Json {
        document: &'static str,
        source: serde_json::Error,
    },
    /// Document is valid JSON with an unsupported top-level shape.
    Shape {
        document: &'static str,
        message: String,
    },
    DuplicateTitle(String),
}

impl Display for ContentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read content `{}`: {source}", path.display())
            }
            Self::Json { document, source } => write!(f, "invalid {document}: {source}"),
            Self::Shape { document, message } => write!(f, "invalid {document}: {message}"),
            Self::DuplicateTitle(title) => write!(f, "duplicate project title: `{title}`"),
        }
    }
}

impl Error for ContentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Shape { .. } | Self::DuplicateTitle(_) => None,
        }
    }
}

/// Immutable content loaded once per session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentStore {
    projects: Vec<ProjectRecord>,
    profile: Profile,
    ui_text: BTreeMap<String, String>,
}

impl ContentStore {
    /// Builds a store from already-decoded parts.
    ///
    /// # Errors
    /// - `DuplicateTitle` when two records share a non-blank trimmed title.
    ///   Untitled records are kept and never conflict.
    pub fn new(
        projects: Vec<ProjectRecord>,
        profile: Profile,
        ui_text: BTreeMap<String, String>,
    ) -> ContentResult<Self> {
        let mut seen = BTreeSet::new();
        for record in &projects {
            let title = record.title.trim();
            if title.is_empty() {
                continue;
            }
            if !seen.insert(title) {
                return Err(ContentError::DuplicateTitle(title.to_string()));
            }
        }

        Ok(Self {
            projects,
            profile,
            ui_text,
        })
    }

    /// Parses in-memory documents. `None` documents use defaults.
    pub fn from_json_strs(
        projects: &str,
        profile: Option<&str>,
        ui_text: Option<&str>,
    ) -> ContentResult<Self> {
        let projects = parse_projects(projects)?;
        let profile = match profile {
            Some(raw) => serde_json::from_str(raw).map_err(|source| ContentError::Json {
                document: PROFILE_FILE,
                source,
            })?,
            None => Profile::default(),
        };
        let ui_text = match ui_text {
            Some(raw) => serde_json::from_str(raw).map_err(|source| ContentError::Json {
                document: UI_TEXT_FILE,
                source,
            })?,
            None => BTreeMap::new(),
        };
        Self::new(projects, profile, ui_text)
    }

    /// Loads content documents from `dir`.
    ///
    /// # Errors
    /// - `Io` when `projects.json` is missing or any present document is unreadable.
    /// - `Json`/`Shape` when a document cannot be decoded.
    pub fn load_dir(dir: impl AsRef<Path>) -> ContentResult<Self> {
        let dir = dir.as_ref();
        let projects = read_required(&dir.join(PROJECTS_FILE))?;
        let profile = read_optional(&dir.join(PROFILE_FILE))?;
        let ui_text = read_optional(&dir.join(UI_TEXT_FILE))?;

        let store = Self::from_json_strs(&projects, profile.as_deref(), ui_text.as_deref())?;
        info!(
            "event=content_load module=content status=ok projects={} categories={} ui_keys={} has_profile={}",
            store.projects.len(),
            store.categories().len(),
            store.ui_text.len(),
            profile.is_some()
        );
        Ok(store)
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn ui_text(&self, key: &str) -> Option<&str> {
        self.ui_text.get(key).map(String::as_str)
    }

    pub fn text_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.ui_text(key).unwrap_or(fallback)
    }

    /// Distinct non-empty categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.projects
            .iter()
            .map(|record| record.category.as_str())
            .filter(|category| !category.is_empty() && seen.insert(*category))
            .collect()
    }

    /// First record flagged as featured, in document order.
    pub fn featured(&self) -> Option<&ProjectRecord> {
        self.projects.iter().find(|record| record.featured)
    }

    pub fn find_project(&self, title: &str) -> Option<&ProjectRecord> {
        let title = title.trim();
        self.projects
            .iter()
            .find(|record| record.title.trim() == title)
    }
}

fn parse_projects(raw: &str) -> ContentResult<Vec<ProjectRecord>> {
    let document: Value = serde_json::from_str(raw).map_err(|source| ContentError::Json {
        document: PROJECTS_FILE,
        source,
    })?;

    let list = match document {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut map) => match map.remove("projects") {
            Some(list @ Value::Array(_)) => list,
            _ => {
                return Err(ContentError::Shape {
                    document: PROJECTS_FILE,
                    message: "expected a `projects` array".to_string(),
                })
            }
        },
        _ => {
            return Err(ContentError::Shape {
                document: PROJECTS_FILE,
                message: "expected an array or an object with `projects`".to_string(),
            })
        }
    };

    serde_json::from_value(list).map_err(|source| ContentError::Json {
        document: PROJECTS_FILE,
        source,
    })
}

fn read_required(path: &Path) -> ContentResult<String> {
    std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_optional(path: &Path) -> ContentResult<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ContentError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_projects, ContentError};

    #[test]
    fn wrapped_and_bare_arrays_are_both_accepted() {
        let bare = parse_projects(r#"[{"title": "A"}]"#).unwrap();
        let wrapped = parse_projects(r#"{"projects": [{"title": "A"}]}"#).unwrap();
        assert_eq!(bare, wrapped);
    }

    #[test]
    fn scalar_document_is_rejected() {
        let err = parse_projects("42").unwrap_err();
        assert!(matches!(err, ContentError::Shape { .. }));
    }

    #[test]
    fn non_object_record_is_a_json_error() {
        let err = parse_projects(r#"["just a string"]"#).unwrap_err();
        assert!(matches!(err, ContentError::Json { .. }));
    }
}
