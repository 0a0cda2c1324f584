//! Pronunciation resolution: which recording to play for a word

pub mod cache;
pub mod fetcher;
pub mod mode;
pub mod resolver;

pub use cache::{cache_file_name, AudioCacheIndex};
pub use fetcher::{dictionary_url, AudioFetcher, HttpFetcher, DEFAULT_SERVICE_URL};
pub use mode::PronunciationMode;
pub use resolver::{AudioSource, PronunciationResolver};
