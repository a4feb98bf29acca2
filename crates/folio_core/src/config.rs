//! Site presentation configuration.
//!
//! # Responsibility
//! - Describe theme, motion timing, grid rhythm and control styling as one
//!   explicit value handed to the rendering layer at construction time.
//! - Parse and validate configuration documents.
//!
//! # Invariants
//! - A `SiteConfig` returned by `from_json_str`/`load` has passed `validate()`.
//! - Unknown keys are rejected instead of being merged silently.
//! - There is no process-wide config singleton.

use crate::showcase::layout::{CardSize, SizePattern};
use crate::showcase::sort::SortMode;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Upper bound for any single animation timing value.
pub const MAX_MOTION_MS: u32 = 10_000;

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid hex color regex"));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    pub motion: MotionConfig,
    pub grid: GridConfig,
    pub button: ButtonStyle,
    /// Sort mode used before the visitor picks one.
    pub default_sort: SortMode,
}

impl SiteConfig {
    /// Parses and validates a JSON configuration document.
    ///
    /// Missing sections fall back to defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !HEX_COLOR_RE.is_match(&self.theme.accent) {
            return Err(ConfigValidationError::InvalidAccent(
                self.theme.accent.clone(),
            ));
        }
        if self.motion.duration_ms > MAX_MOTION_MS {
            return Err(ConfigValidationError::MotionOutOfRange {
                field: "duration_ms",
                value: self.motion.duration_ms,
            });
        }
        if self.motion.stagger_ms > MAX_MOTION_MS {
            return Err(ConfigValidationError::MotionOutOfRange {
                field: "stagger_ms",
                value: self.motion.stagger_ms,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub mode: ThemeMode,
    /// `#RRGGBB` accent color.
    pub accent: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Light,
            accent: "#6c63ff".to_string(),
        }
    }
}

/// Entrance animation timing for grid cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    pub enabled: bool,
    pub duration_ms: u32,
    /// Delay added per card position.
    pub stagger_ms: u32,
}

impl MotionConfig {
    /// Entrance delay for the card at `index`; zero when motion is disabled.
    pub fn delay_for(&self, index: usize) -> u32 {
        if !self.enabled {
            return 0;
        }
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.stagger_ms.saturating_mul(index)
    }

    /// Animation duration; zero when motion is disabled.
    pub fn effective_duration_ms(&self) -> u32 {
        if self.enabled {
            self.duration_ms
        } else {
            0
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: 400,
            stagger_ms: 80,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Serialized as a list of size labels.
    pub pattern: SizePattern,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
        }
    }
}

/// Closed set of button options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ButtonStyle {
    pub variant: ButtonVariant,
    pub size: CardSize,
}

impl ButtonStyle {
    /// Class list consumed by the renderer, e.g. `btn btn-primary btn-medium`.
    pub fn class_list(&self) -> String {
        format!("btn btn-{} btn-{}", self.variant.as_str(), self.size.as_str())
    }
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            variant: ButtonVariant::Primary,
            size: CardSize::Medium,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    InvalidAccent(String),
    MotionOutOfRange { field: &'static str, value: u32 },
}

impl Display for ConfigValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAccent(value) => {
                write!(f, "theme accent `{value}` is not a #RRGGBB color")
            }
            Self::MotionOutOfRange { field, value } => write!(
                f,
                "motion {field} ({value}) exceeds {MAX_MOTION_MS} ms"
            ),
        }
    }
}

impl Error for ConfigValidationError {}

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    Invalid(ConfigValidationError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config document: {err}"),
            Self::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<ConfigValidationError> for ConfigError {
    fn from(value: ConfigValidationError) -> Self {
        Self::Invalid(value)
    }
}
