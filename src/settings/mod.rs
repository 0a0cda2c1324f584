//! Persisted front-end preferences as small JSON documents

pub mod documents;
pub mod store;

pub use documents::{PlaybackSettings, SearchSettings};
pub use store::{LoadStatus, SettingsStore};
