//! Configuration loading tests
//!
//! Tests that engine configuration is created with defaults and
//! that typed getters read user edits back

use vocabvoice::config::Config;
use vocabvoice::pronunciation::DEFAULT_SERVICE_URL;

#[test]
fn test_config_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocabvoice.cfg");

    let config = Config::load_from(&path).expect("Failed to load config");
    assert!(path.exists());
    assert_eq!(config.path(), path.as_path());
    assert_eq!(config.service_url(), DEFAULT_SERVICE_URL);

    // Speech parameters are unset until the user picks them
    assert_eq!(config.rate(), None);
    assert_eq!(config.volume(), None);
    assert_eq!(config.voice_idx(), None);
}

#[test]
fn test_config_reads_user_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocabvoice.cfg");
    std::fs::write(
        &path,
        "[speech]\nrate = 70\nvolume = 150\nvoice_idx = 2\n\n[audio]\nservice_url = http://localhost:9000/voice\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.rate(), Some(70));
    // Out of range volume is ignored
    assert_eq!(config.volume(), None);
    assert_eq!(config.voice_idx(), Some(2));
    assert_eq!(config.service_url(), "http://localhost:9000/voice");
}

#[test]
fn test_config_save_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocabvoice.cfg");

    let mut config = Config::load_from(&path).unwrap();
    config.set("speech", "rate", "40");
    config.save().unwrap();

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded.rate(), Some(40));
}
