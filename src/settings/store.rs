//! Load/save of one JSON settings document

use crate::Result;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// How a settings document was obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Parsed from disk
    Loaded,
    /// No file yet; defaults in use
    Missing,
    /// File could not be read or parsed; defaults in use. Carries a message
    /// suitable for showing to the user.
    Malformed(String),
}

/// JSON file holding one settings document of type `T`
///
/// Every save overwrites the whole file.
#[derive(Debug, Clone)]
pub struct SettingsStore<T> {
    path: PathBuf,
    _doc: PhantomData<fn() -> T>,
}

impl<T> SettingsStore<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _doc: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document, falling back to defaults on any problem
    pub fn load(&self) -> T {
        self.load_with_status().0
    }

    /// Load the document and report whether defaults were substituted
    pub fn load_with_status(&self) -> (T, LoadStatus) {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No settings at {:?}, using defaults", self.path);
                return (T::default(), LoadStatus::Missing);
            }
            Err(e) => return self.fallback(e.to_string()),
        };

        match serde_json::from_str(&text) {
            Ok(doc) => {
                debug!("Loaded settings from {:?}", self.path);
                (doc, LoadStatus::Loaded)
            }
            Err(e) => self.fallback(e.to_string()),
        }
    }

    /// Overwrite the file with `doc`, pretty-printed
    pub fn save(&self, doc: &T) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(doc)?;
        fs::write(&self.path, json)?;
        debug!("Saved settings to {:?}", self.path);
        Ok(())
    }

    fn fallback(&self, reason: String) -> (T, LoadStatus) {
        warn!("Settings file {:?} unreadable ({}), using defaults", self.path, reason);
        let message = format!(
            "Settings could not be parsed, default settings will be used.\nFile: {}",
            self.path.display()
        );
        (T::default(), LoadStatus::Malformed(message))
    }
}
