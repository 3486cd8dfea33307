// Chunk: docs/chunks/outline_settings - Outline settings file

//! Outline settings.
//!
//! Settings live in a JSON file with camelCase keys, every key optional:
//!
//! ```json
//! { "width": 0.2, "position": "auto", "tabName": "Code Map", "enableIndent": true }
//! ```
//!
//! The file is stored at `<config dir>/codemap/settings.json`
//! (`~/Library/Application Support/codemap/settings.json` on macOS,
//! `~/.config/codemap/settings.json` on Linux).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use codemap_layout::PanelSide;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Application name used for the config directory.
pub(crate) const APP_NAME: &str = "codemap";

/// Settings file name.
const SETTINGS_FILENAME: &str = "settings.json";

/// Where the outline column goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelPosition {
    Left,
    Right,
    /// Opposite the editor's sidebar. Unrecognized values mean auto too.
    #[default]
    #[serde(other)]
    Auto,
}

impl PanelPosition {
    /// Resolves to a concrete side given where the host draws its sidebar.
    pub fn resolve(self, sidebar_on_right: bool) -> PanelSide {
        match self {
            PanelPosition::Left => PanelSide::Left,
            PanelPosition::Right => PanelSide::Right,
            PanelPosition::Auto if sidebar_on_right => PanelSide::Left,
            PanelPosition::Auto => PanelSide::Right,
        }
    }
}

/// Recognized outline settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutlineConfig {
    /// The panel's share of the window width, in `(0, 1)`.
    pub width: f64,
    pub position: PanelPosition,
    /// Title of the panel's tab.
    pub tab_name: String,
    /// Indent entries by symbol depth.
    pub enable_indent: bool,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            width: 0.2,
            position: PanelPosition::Auto,
            tab_name: "Code Map".to_string(),
            enable_indent: true,
        }
    }
}

impl OutlineConfig {
    /// Parses and validates settings JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: OutlineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width > 0.0 && self.width < 1.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidWidth(self.width))
        }
    }

    /// Reads settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Reads settings from `path`, falling back to the defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!(?path, error = %e, "ignoring outline settings");
            Self::default()
        })
    }

    /// Reads settings from the platform settings file.
    pub fn load() -> Self {
        match settings_file_path() {
            Some(path) => Self::load_or_default(&path),
            None => Self::default(),
        }
    }

    /// The side the panel is carved from for a window.
    pub fn panel_side(&self, sidebar_on_right: bool) -> PanelSide {
        self.position.resolve(sidebar_on_right)
    }
}

/// Returns the path of the platform settings file, if the config directory
/// can be determined.
pub fn settings_file_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join(APP_NAME).join(SETTINGS_FILENAME))
}
