//! Decide where a word's pronunciation comes from
//!
//! Order of preference: a file already in the cache directory, a fresh
//! download from the dictionary service, and finally nothing at all, which
//! tells the player to synthesize the word locally.

use super::{cache_file_name, dictionary_url, AudioCacheIndex, AudioFetcher, PronunciationMode};
use crate::Result;
use log::{debug, warn};
use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;

/// A playable pronunciation, or the signal to fall back to local TTS
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioSource {
    File(PathBuf),
    Empty,
}

impl AudioSource {
    pub fn is_empty(&self) -> bool {
        matches!(self, AudioSource::Empty)
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            AudioSource::File(path) => Some(path),
            AudioSource::Empty => None,
        }
    }
}

/// Resolves words to cached or freshly downloaded recordings
pub struct PronunciationResolver {
    /// Directory holding `<word>_<mode>.mp3` files
    cache_dir: PathBuf,

    /// Names already present in `cache_dir`
    index: Arc<AudioCacheIndex>,

    /// Network access for cache misses
    fetcher: Box<dyn AudioFetcher>,

    /// Dictionary endpoint, without query string
    service_url: String,
}

impl PronunciationResolver {
    pub fn new(
        cache_dir: impl Into<PathBuf>,
        index: Arc<AudioCacheIndex>,
        fetcher: Box<dyn AudioFetcher>,
        service_url: impl Into<String>,
    ) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            index,
            fetcher,
            service_url: service_url.into(),
        }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn index(&self) -> &Arc<AudioCacheIndex> {
        &self.index
    }

    /// Resolve `word` in `mode` to an audio source
    ///
    /// Download failures are logged and reported as `AudioSource::Empty`.
    pub fn resolve(&self, word: &str, mode: PronunciationMode) -> AudioSource {
        if mode.is_local_tts() {
            return AudioSource::Empty;
        }
        if word.trim().is_empty() {
            debug!("Blank word, nothing to resolve");
            return AudioSource::Empty;
        }

        let name = cache_file_name(word, mode);
        if !is_plain_file_name(&name) {
            warn!("Refusing cache name {:?} outside {:?}", name, self.cache_dir);
            return AudioSource::Empty;
        }
        if self.index.contains(&name) {
            debug!("Cache hit for {}", name);
            return AudioSource::File(self.cache_dir.join(&name));
        }

        let url = match dictionary_url(&self.service_url, word, mode) {
            Some(url) => url,
            None => return AudioSource::Empty,
        };

        match self.download(&url, &name) {
            Ok(path) => AudioSource::File(path),
            Err(e) => {
                warn!("Could not fetch pronunciation for {:?} ({}): {}", word, mode, e);
                AudioSource::Empty
            }
        }
    }

    /// Fetch `url` and store it as `name` in the cache directory
    fn download(&self, url: &str, name: &str) -> Result<PathBuf> {
        let bytes = self.fetcher.fetch(url)?;

        fs::create_dir_all(&self.cache_dir)?;
        let path = self.cache_dir.join(name);

        // Each writer gets its own temp file beside the target; a reader never
        // sees a partial file and concurrent downloads of one word don't collide
        let mut tmp = NamedTempFile::new_in(&self.cache_dir)?;
        tmp.write_all(&bytes)?;
        tmp.persist(&path).map_err(|e| e.error)?;

        self.index.insert(name);
        debug!("Cached {} ({} bytes)", name, bytes.len());
        Ok(path)
    }
}

/// True if `name` is a single path component naming a file in the directory
fn is_plain_file_name(name: &str) -> bool {
    let path = Path::new(name);
    path.file_name() == Some(OsStr::new(name))
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}
