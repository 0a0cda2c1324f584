//! Pronunciation modes (accent variants plus local speech synthesis)

use crate::VocabError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which variant of a word's audio to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PronunciationMode {
    /// American English recording
    #[default]
    #[serde(rename = "us")]
    Us,
    /// British English recording
    #[serde(rename = "uk")]
    Uk,
    /// Japanese recording
    #[serde(rename = "jp")]
    Jp,
    /// Synthesize speech on this machine instead of playing a recording
    #[serde(rename = "local TTS")]
    LocalTts,
}

impl PronunciationMode {
    /// Name used in cache file names and persisted settings
    pub fn as_str(&self) -> &'static str {
        match self {
            PronunciationMode::Us => "us",
            PronunciationMode::Uk => "uk",
            PronunciationMode::Jp => "jp",
            PronunciationMode::LocalTts => "local TTS",
        }
    }

    /// Dictionary service query parameter selecting this variant
    pub fn query_param(&self) -> Option<&'static str> {
        match self {
            PronunciationMode::Us => Some("type=2"),
            PronunciationMode::Uk => Some("type=1"),
            PronunciationMode::Jp => Some("le=jap"),
            PronunciationMode::LocalTts => None,
        }
    }

    /// Multi-word English queries fail unless spaces are sent as hyphens
    pub fn hyphenates_spaces(&self) -> bool {
        matches!(self, PronunciationMode::Us | PronunciationMode::Uk)
    }

    pub fn is_local_tts(&self) -> bool {
        *self == PronunciationMode::LocalTts
    }
}

impl fmt::Display for PronunciationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PronunciationMode {
    type Err = VocabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "us" => Ok(PronunciationMode::Us),
            "uk" => Ok(PronunciationMode::Uk),
            "jp" => Ok(PronunciationMode::Jp),
            "local tts" | "local" | "tts" => Ok(PronunciationMode::LocalTts),
            _ => Err(VocabError::UnknownMode(s.to_string())),
        }
    }
}
