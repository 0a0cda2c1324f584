//! Index of pronunciation files already downloaded to the cache directory

use super::PronunciationMode;
use crate::Result;
use log::debug;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Mutex;

/// Cache file name for a word and mode: `<lowercase word>_<mode>.mp3`
pub fn cache_file_name(word: &str, mode: PronunciationMode) -> String {
    format!("{}_{}.mp3", word.to_lowercase(), mode.as_str())
}

/// Set of cached file names
///
/// Entries are only ever added. Shared between concurrent resolves, so the
/// set sits behind a mutex.
#[derive(Debug, Default)]
pub struct AudioCacheIndex {
    names: Mutex<HashSet<String>>,
}

impl AudioCacheIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from the `.mp3` files present in `dir`
    ///
    /// A directory that doesn't exist yet yields an empty index.
    pub fn scan(dir: &Path) -> Result<Self> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Audio directory {:?} does not exist yet", dir);
                return Ok(Self::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut names = HashSet::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(".mp3") {
                names.insert(name);
            }
        }

        debug!("Indexed {} cached pronunciations in {:?}", names.len(), dir);
        Ok(Self {
            names: Mutex::new(names),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains(name)
    }

    /// Register a file name; returns false if it was already present
    pub fn insert(&self, name: impl Into<String>) -> bool {
        self.lock().insert(name.into())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashSet<String>> {
        // A panic while holding the lock can't leave a HashSet half-inserted
        self.names.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
