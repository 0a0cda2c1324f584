//! Filesystem locations for settings documents and cached audio

use log::debug;
use std::path::{Path, PathBuf};

/// Environment variable that relocates all vocabvoice data under one root
pub const HOME_ENV: &str = "VOCABVOICE_HOME";

/// Directories used by the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    /// JSON settings documents (SearchState.json, PlaybackSettings.json)
    pub settings_dir: PathBuf,

    /// Downloaded pronunciation files (`<word>_<mode>.mp3`)
    pub audio_dir: PathBuf,
}

impl AppPaths {
    /// Locate the platform directories, honouring `VOCABVOICE_HOME`
    pub fn discover() -> Self {
        if let Ok(root) = std::env::var(HOME_ENV) {
            if !root.is_empty() {
                debug!("Using {}={}", HOME_ENV, root);
                return Self::under(root);
            }
        }

        let settings_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::APP_NAME);
        let audio_dir = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::APP_NAME)
            .join("audio");

        Self {
            settings_dir,
            audio_dir,
        }
    }

    /// Place both directories under a single root
    pub fn under(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            settings_dir: root.join("settings"),
            audio_dir: root.join("audio"),
        }
    }

    /// Path of a settings document by file name
    pub fn settings_file(&self, name: &str) -> PathBuf {
        self.settings_dir.join(name)
    }
}
