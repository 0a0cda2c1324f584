//! Remote dictionary audio download

use super::PronunciationMode;
use crate::{Result, VocabError};
use log::debug;
use reqwest::blocking as http;

/// Default dictionary voice endpoint
pub const DEFAULT_SERVICE_URL: &str = "https://dict.youdao.com/dictvoice";

/// Source of raw pronunciation bytes for a URL
///
/// The resolver only talks to the network through this trait.
pub trait AudioFetcher: Send + Sync {
    /// Download the body at `url`
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Build the dictionary query URL for a word
///
/// English modes send spaces as hyphens; Japanese queries keep them.
/// Returns None for local TTS, which has no remote recording.
pub fn dictionary_url(base: &str, word: &str, mode: PronunciationMode) -> Option<String> {
    let param = mode.query_param()?;
    let query = if mode.hyphenates_spaces() {
        word.replace(' ', "-")
    } else {
        word.to_string()
    };
    Some(format!("{}?audio={}&{}", base, query, param))
}

/// Blocking HTTP fetcher
///
/// One attempt per call, no retry and no overall timeout.
pub struct HttpFetcher {
    client: http::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = http::Client::builder()
            .timeout(None)
            .user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION))
            .build()?;
        Ok(Self { client })
    }
}

impl AudioFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!("Requesting {}", url);
        let resp = self.client.get(url).send()?.error_for_status()?;
        let bytes = resp.bytes()?;
        if bytes.is_empty() {
            return Err(VocabError::Audio(format!("empty response from {}", url)));
        }
        debug!("Downloaded {} bytes", bytes.len());
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_modes_hyphenate_spaces() {
        assert_eq!(
            dictionary_url(DEFAULT_SERVICE_URL, "ice cream cone", PronunciationMode::Us).unwrap(),
            "https://dict.youdao.com/dictvoice?audio=ice-cream-cone&type=2"
        );
        assert_eq!(
            dictionary_url(DEFAULT_SERVICE_URL, "look up", PronunciationMode::Uk).unwrap(),
            "https://dict.youdao.com/dictvoice?audio=look-up&type=1"
        );
    }

    #[test]
    fn test_japanese_keeps_spaces() {
        assert_eq!(
            dictionary_url("http://dict.test/voice", "お はよう", PronunciationMode::Jp).unwrap(),
            "http://dict.test/voice?audio=お はよう&le=jap"
        );
    }

    #[test]
    fn test_local_tts_has_no_url() {
        assert!(dictionary_url(DEFAULT_SERVICE_URL, "apple", PronunciationMode::LocalTts).is_none());
    }

    #[test]
    fn test_word_case_is_preserved_in_query() {
        let url = dictionary_url(DEFAULT_SERVICE_URL, "Paris", PronunciationMode::Us).unwrap();
        assert!(url.contains("audio=Paris&"));
    }
}
