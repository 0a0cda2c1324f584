//! vocabvoice - word pronunciation for vocabulary trainers
//!
//! Resolves a word to a playable dictionary recording (cached locally after
//! the first download), plays it, and falls back to on-device text-to-speech
//! when no recording is available. Also provides the JSON settings store used
//! by the trainer front end.

pub mod config;
pub mod error;
pub mod paths;
pub mod platform;
pub mod player;
pub mod pronouncer;
pub mod pronunciation;
pub mod settings;
pub mod speech;

pub use error::{Result, VocabError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "vocabvoice";
