//! Configuration management
//!
//! Engine settings live in an INI file (`~/.vocabvoice.cfg`): local speech
//! parameters and the dictionary service endpoint. Front-end preferences are
//! JSON documents handled by [`crate::settings`].

use crate::pronunciation::DEFAULT_SERVICE_URL;
use crate::speech::Synth;
use crate::{Result, VocabError};
use ini::Ini;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Application configuration
pub struct Config {
    ini: Ini,

    /// Config file path
    path: PathBuf,
}

impl Config {
    /// Load `~/.vocabvoice.cfg`, creating it with defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load configuration from `path`, creating it with defaults if absent
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        debug!("Loading config from {:?}", path);

        let ini = if path.exists() {
            Ini::load_from_file(&path)
                .map_err(|e| VocabError::IniParse(format!("Failed to load config: {}", e)))?
        } else {
            info!("Config file not found, creating default");
            let default = Self::default_config();
            default
                .write_to_file(&path)
                .map_err(|e| VocabError::IniParse(format!("Failed to write config: {}", e)))?;
            default
        };

        Ok(Self { ini, path })
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        debug!("Saving config to {:?}", self.path);
        self.ini
            .write_to_file(&self.path)
            .map_err(|e| VocabError::Config(format!("Failed to save config: {}", e)))
    }

    fn config_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".vocabvoice.cfg")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn default_config() -> Ini {
        let mut ini = Ini::new();

        ini.with_section(Some("speech"));
        ini.with_section(Some("audio"))
            .set("service_url", DEFAULT_SERVICE_URL);

        ini
    }

    pub fn get_string(&self, section: &str, key: &str, default: &str) -> String {
        self.ini
            .get_from(Some(section), key)
            .unwrap_or(default)
            .to_string()
    }

    pub fn get_int(&self, section: &str, key: &str, default: i32) -> i32 {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.ini.with_section(Some(section)).set(key, value);
    }

    /// Speech rate (0-100)
    pub fn rate(&self) -> Option<u8> {
        self.get_int("speech", "rate", -1)
            .try_into()
            .ok()
            .filter(|&r| r <= 100)
    }

    /// Speech volume (0-100)
    pub fn volume(&self) -> Option<u8> {
        self.get_int("speech", "volume", -1)
            .try_into()
            .ok()
            .filter(|&v| v <= 100)
    }

    /// Voice index for the TTS engine
    pub fn voice_idx(&self) -> Option<usize> {
        self.get_int("speech", "voice_idx", -1).try_into().ok()
    }

    /// Dictionary voice endpoint, without query string
    pub fn service_url(&self) -> String {
        let url = self.get_string("audio", "service_url", DEFAULT_SERVICE_URL);
        if url.trim().is_empty() {
            DEFAULT_SERVICE_URL.to_string()
        } else {
            url.trim().to_string()
        }
    }

    /// Push configured speech parameters into a synthesizer
    ///
    /// A parameter the backend rejects is logged and skipped.
    pub fn apply_speech(&self, synth: &mut dyn Synth) {
        if let Some(rate) = self.rate() {
            if let Err(e) = synth.set_rate(rate) {
                warn!("Could not set speech rate: {}", e);
            }
        }
        if let Some(volume) = self.volume() {
            if let Err(e) = synth.set_volume(volume) {
                warn!("Could not set speech volume: {}", e);
            }
        }
        if let Some(idx) = self.voice_idx() {
            if let Err(e) = synth.set_voice_idx(idx) {
                warn!("Could not set voice: {}", e);
            }
        }
    }
}
