//! Settings documents persisted by the trainer

use crate::paths::AppPaths;
use crate::pronunciation::PronunciationMode;
use serde::{Deserialize, Serialize};

use super::SettingsStore;

/// Toggles of the word-list editor's search bar
///
/// Key names match the trainer's existing `SearchState.json` files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    #[serde(rename = "matchCaseIsSelected")]
    pub match_case: bool,
    #[serde(rename = "wordsIsSelected")]
    pub whole_words: bool,
    #[serde(rename = "regexIsSelected")]
    pub regex: bool,
    #[serde(rename = "numberSelected")]
    pub number: bool,
}

impl SearchSettings {
    pub const FILE_NAME: &'static str = "SearchState.json";

    pub fn store(paths: &AppPaths) -> SettingsStore<Self> {
        SettingsStore::new(paths.settings_file(Self::FILE_NAME))
    }
}

/// How words are pronounced while studying
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlaybackSettings {
    pub pronunciation: PronunciationMode,

    /// Recording volume, 0.0-1.0
    pub volume: f32,

    /// Automatic pronunciations per word; 0 disables them
    pub play_times: u32,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            pronunciation: PronunciationMode::Us,
            volume: 0.8,
            play_times: 1,
        }
    }
}

impl PlaybackSettings {
    pub const FILE_NAME: &'static str = "PlaybackSettings.json";

    pub fn store(paths: &AppPaths) -> SettingsStore<Self> {
        SettingsStore::new(paths.settings_file(Self::FILE_NAME))
    }
}
