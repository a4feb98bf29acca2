//! FFI use-case API for the portfolio UI host.
//!
//! # Responsibility
//! - Expose content loading and the projects-page view to Dart via FRB.
//! - Flatten borrowed core views into owned, renderer-friendly envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - A failed `load_content` keeps the previously loaded site.
//! - `showcase_view` recomputes from scratch on every call.

use folio_core::{
    build_showcase, core_version as core_version_inner, init_logging as init_logging_inner,
    ContentStore, ProjectRecord, ShowcaseQuery, ShowcaseView, SiteConfig,
};
use log::{info, warn};
use std::sync::{OnceLock, RwLock};

static LOADED_SITE: OnceLock<RwLock<Option<LoadedSite>>> = OnceLock::new();

struct LoadedSite {
    store: ContentStore,
    config: SiteConfig,
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Result of loading the content directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadContentResponse {
    pub ok: bool,
    pub project_count: u32,
    /// Category selector options in first-seen order, without the `all` sentinel.
    pub categories: Vec<String>,
    pub message: String,
}

/// One card (or the featured slot) as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseCard {
    pub title: String,
    pub description: String,
    pub category: String,
    pub tech: Vec<String>,
    pub year: Option<i32>,
    /// `small|medium|large`; empty for the featured slot.
    pub size: String,
    /// Entrance animation delay derived from the motion config.
    pub delay_ms: u32,
    pub demo: Option<String>,
    pub link: Option<String>,
}

/// Projects-page view envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseResponse {
    pub featured: Option<ShowcaseCard>,
    pub cards: Vec<ShowcaseCard>,
    pub total_matches: u32,
    /// Effective sort mode after fallback (`recent|tech`).
    pub applied_sort: String,
    pub message: String,
}

/// Loads `projects.json`, `profile.json` and `ui.json` from `content_dir`, plus an
/// optional site config file.
///
/// # FFI contract
/// - Sync call; reads small files from disk.
/// - Never panics.
/// - Replaces the cached site only on success.
#[flutter_rust_bridge::frb(sync)]
pub fn load_content(content_dir: String, config_path: Option<String>) -> LoadContentResponse {
    let store = match ContentStore::load_dir(content_dir.trim()) {
        Ok(store) => store,
        Err(err) => {
            warn!("event=ffi_load_content module=ffi status=error");
            return LoadContentResponse::failure(format!("load_content failed: {err}"));
        }
    };
    let config = match config_path.as_deref().map(str::trim) {
        Some(path) if !path.is_empty() => match SiteConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                warn!("event=ffi_load_config module=ffi status=error");
                return LoadContentResponse::failure(format!("load_content failed: {err}"));
            }
        },
        _ => SiteConfig::default(),
    };

    let response = LoadContentResponse {
        ok: true,
        project_count: u32::try_from(store.projects().len()).unwrap_or(u32::MAX),
        categories: store.categories().into_iter().map(str::to_owned).collect(),
        message: "Content loaded.".to_string(),
    };

    match site_slot().write() {
        Ok(mut slot) => *slot = Some(LoadedSite { store, config }),
        Err(_) => return LoadContentResponse::failure("load_content failed: site cache poisoned"),
    }
    info!(
        "event=ffi_load_content module=ffi status=ok projects={}",
        response.project_count
    );
    response
}

/// Builds the projects-page view for the current inputs.
///
/// Input semantics:
/// - `search`: free text; blank disables text filtering.
/// - `category`: exact category or `all`.
/// - `sort`: `recent|tech`; anything else uses the configured default.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics; returns an empty envelope with a message when no content is loaded.
#[flutter_rust_bridge::frb(sync)]
pub fn showcase_view(search: String, category: String, sort: String) -> ShowcaseResponse {
    let slot = match site_slot().read() {
        Ok(slot) => slot,
        Err(_) => return ShowcaseResponse::empty("showcase_view failed: site cache poisoned"),
    };
    match slot.as_ref() {
        Some(site) => render_showcase(site, &search, &category, &sort),
        None => ShowcaseResponse::empty("showcase_view failed: content not loaded"),
    }
}

fn render_showcase(site: &LoadedSite, search: &str, category: &str, sort: &str) -> ShowcaseResponse {
    let query = ShowcaseQuery::from_inputs(search, category, sort, site.config.default_sort);
    let view = build_showcase(site.store.projects(), &query, &site.config.grid.pattern);
    to_response(&view, &query, &site.config)
}

fn to_response(view: &ShowcaseView<'_>, query: &ShowcaseQuery, config: &SiteConfig) -> ShowcaseResponse {
    let cards = view
        .cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            to_card(
                card.record,
                card.size.as_str(),
                config.motion.delay_for(index),
            )
        })
        .collect::<Vec<_>>();
    let message = if view.is_empty() {
        "No projects match.".to_string()
    } else {
        format!("Showing {} project(s).", view.total_matches)
    };

    ShowcaseResponse {
        featured: view.featured.map(|record| to_card(record, "", 0)),
        cards,
        total_matches: u32::try_from(view.total_matches).unwrap_or(u32::MAX),
        applied_sort: query.sort.as_str().to_string(),
        message,
    }
}

fn to_card(record: &ProjectRecord, size: &str, delay_ms: u32) -> ShowcaseCard {
    ShowcaseCard {
        title: record.title.clone(),
        description: record.description.clone(),
        category: record.category.clone(),
        tech: record.tech.clone(),
        year: record.year,
        size: size.to_string(),
        delay_ms,
        demo: record.demo.clone(),
        link: record.link.clone(),
    }
}

fn site_slot() -> &'static RwLock<Option<LoadedSite>> {
    LOADED_SITE.get_or_init(|| RwLock::new(None))
}

impl LoadContentResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            project_count: 0,
            categories: Vec::new(),
            message: message.into(),
        }
    }
}

impl ShowcaseResponse {
    fn empty(message: impl Into<String>) -> Self {
        Self {
            featured: None,
            cards: Vec::new(),
            total_matches: 0,
            applied_sort: String::new(),
            message: message.into(),
        }
    }
}
