//! Tunables for the field and the app, read from `config.json`
//!
//! Every field has a default; a missing or broken config file simply
//! yields [`AppConfig::default`].

use crate::corpus::DEFAULT_MAX_ATTEMPTS;
use crate::fade::{FADE_SECS, HOVER_IN_SECS, HOVER_OUT_SECS};
use crate::style::BASE_FONT_SIZE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Fade and hover durations, in seconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeTimings {
    pub fade_in: f32,
    pub fade_out: f32,
    pub hover_in: f32,
    pub hover_out: f32,
}

impl Default for FadeTimings {
    fn default() -> Self {
        Self {
            fade_in: FADE_SECS,
            fade_out: FADE_SECS,
            hover_in: HOVER_IN_SECS,
            hover_out: HOVER_OUT_SECS,
        }
    }
}

/// Collision search parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Space kept clear around a new item, in points.
    pub margin: f32,
    /// Random positions tried before giving up for this round.
    pub attempts: usize,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            margin: 20.0,
            attempts: 11,
        }
    }
}

/// Lifecycle scheduling for the haiku field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Spawning stops while this many items are on screen.
    pub capacity: usize,
    /// Spawn attempts made once the canvas size is known.
    pub initial_spawns: usize,
    /// Delay before the first item is retired.
    pub first_die_secs: f32,
    /// Interval between later retirements.
    pub die_secs: f32,
    /// Interval between spawn attempts.
    pub spawn_secs: f32,
    pub fade: FadeTimings,
    pub placement: PlacementConfig,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            capacity: 10,
            initial_spawns: 9,
            first_die_secs: 5.0,
            die_secs: 10.0,
            spawn_secs: 10.0,
            fade: FadeTimings::default(),
            placement: PlacementConfig::default(),
        }
    }
}

/// Everything the slowHaiku binary reads at startup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Law data file; relative paths are searched, see [`resolve_asset`].
    pub data_path: PathBuf,
    /// Font file with CJK coverage.
    pub font_file: String,
    pub base_font_size: f32,
    pub fullscreen: bool,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Ceiling for haiku rejection sampling.
    pub max_pick_attempts: usize,
    pub field: FieldConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("api.json"),
            font_file: "ipamp.ttf".to_string(),
            base_font_size: BASE_FONT_SIZE,
            fullscreen: true,
            seed: None,
            max_pick_attempts: DEFAULT_MAX_ATTEMPTS,
            field: FieldConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn config_path() -> PathBuf {
        config_dir("slowhaiku").join("config.json")
    }

    /// Load from the user's config directory, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(_) => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Self::default();
            }
        };
        match serde_json::from_str(&json) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), "ignoring malformed config: {e}");
                Self::default()
            }
        }
    }
}

/// Platform config directory for `app` (e.g. `~/.config/slowhaiku`).
pub fn config_dir(app: &str) -> PathBuf {
    directories::ProjectDirs::from("", "", app)
        .map(|p| p.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp").join(app))
}

/// Find a bundled asset. Absolute paths are used as given; relative ones
/// are tried against the working directory, the executable's directory,
/// and the workspace root when running out of `target/<profile>/`.
pub fn resolve_asset(path: &Path) -> PathBuf {
    if path.is_absolute() || path.exists() {
        return path.to_path_buf();
    }
    let mut candidates = Vec::new();
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            candidates.push(dir.join(path));
            if let Some(workspace) = dir.parent().and_then(|p| p.parent()) {
                candidates.push(workspace.join(path));
                candidates.push(workspace.join("slowhaiku").join(path));
            }
        }
    }
    candidates
        .into_iter()
        .find(|p| p.exists())
        .unwrap_or_else(|| path.to_path_buf())
}
