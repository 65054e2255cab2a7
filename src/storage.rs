//! Persisted state and the static data feed.
//!
//! Two things live on disk: a one-key settings file holding the theme
//! preference, and the project data feed. Neither is load-bearing; a
//! missing or unreadable file degrades the feature and nothing else.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::models::ProjectRecord;
use crate::state::theme::ThemeSetting;

/// On-disk settings schema. Absent keys are valid states.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    theme: Option<ThemeSetting>,
}

/// Handle to the settings file in the user's config directory.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Open the store under the platform config directory
    /// (`~/.config/folio/settings.json` on Linux).
    pub fn new() -> Result<Self, StorageError> {
        let base = dirs::config_dir().ok_or(StorageError::NoConfigDir)?;
        Ok(Self::in_dir(base.join("folio")))
    }

    /// Open the store under an explicit directory. Used by tests.
    pub fn in_dir(dir: PathBuf) -> Self {
        Self {
            path: dir.join("settings.json"),
        }
    }

    /// Read the persisted theme, if any. Unreadable or malformed files
    /// count as "nothing stored".
    pub fn load_theme(&self) -> Option<ThemeSetting> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<SettingsFile>(&raw) {
            Ok(settings) => settings.theme,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "ignoring malformed settings file");
                None
            }
        }
    }

    /// Persist the theme. Creates the config directory on first write.
    pub fn save_theme(&self, theme: ThemeSetting) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let settings = SettingsFile { theme: Some(theme) };
        let json = serde_json::to_string_pretty(&settings).expect("settings serialize");
        fs::write(&self.path, json).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Load the project feed. A missing or invalid file yields an empty list;
/// the projects section simply renders nothing.
pub fn load_projects(path: &Path) -> Vec<ProjectRecord> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::info!(path = %path.display(), %err, "no project data feed");
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(projects) => projects,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid project data feed");
            Vec::new()
        }
    }
}
