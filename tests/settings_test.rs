//! Settings document persistence tests

use std::fs;
use vocabvoice::paths::AppPaths;
use vocabvoice::pronunciation::PronunciationMode;
use vocabvoice::settings::{LoadStatus, PlaybackSettings, SearchSettings};

#[test]
fn test_search_settings_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let paths = AppPaths::under(dir.path());

    let store = SearchSettings::store(&paths);
    let mut search = store.load();
    search.match_case = true;
    search.regex = true;
    store.save(&search).unwrap();

    assert!(paths.settings_dir.join("SearchState.json").exists());
    let reloaded = SearchSettings::store(&paths).load();
    assert_eq!(reloaded, search);
}

#[test]
fn test_existing_search_state_file_is_kept() {
    let dir = tempfile::tempdir().unwrap();
    let paths = AppPaths::under(dir.path());
    fs::create_dir_all(&paths.settings_dir).unwrap();
    let file = paths.settings_file(SearchSettings::FILE_NAME);
    fs::write(
        &file,
        r#"{
    "matchCaseIsSelected": true,
    "wordsIsSelected": true,
    "regexIsSelected": false,
    "numberSelected": false
}"#,
    )
    .unwrap();

    let store = SearchSettings::store(&paths);
    let (search, status) = store.load_with_status();
    assert_eq!(status, LoadStatus::Loaded);
    assert!(search.match_case);
    assert!(search.whole_words);
    assert!(!search.regex);

    store.save(&search).unwrap();
    let text = fs::read_to_string(&file).unwrap();
    assert!(text.contains("\"matchCaseIsSelected\": true"));
    assert!(text.contains("\"wordsIsSelected\": true"));
}

#[test]
fn test_malformed_search_settings_use_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let paths = AppPaths::under(dir.path());
    fs::create_dir_all(&paths.settings_dir).unwrap();
    fs::write(paths.settings_file(SearchSettings::FILE_NAME), "not json at all").unwrap();

    let (search, status) = SearchSettings::store(&paths).load_with_status();
    assert_eq!(search, SearchSettings::default());
    assert!(matches!(status, LoadStatus::Malformed(_)));
}

#[test]
fn test_wrong_types_use_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let paths = AppPaths::under(dir.path());
    fs::create_dir_all(&paths.settings_dir).unwrap();
    fs::write(
        paths.settings_file(PlaybackSettings::FILE_NAME),
        r#"{"pronunciation": "fr", "volume": "loud"}"#,
    )
    .unwrap();

    let playback = PlaybackSettings::store(&paths).load();
    assert_eq!(playback, PlaybackSettings::default());
}

#[test]
fn test_playback_settings_persist_mode() {
    let dir = tempfile::tempdir().unwrap();
    let paths = AppPaths::under(dir.path());
    let store = PlaybackSettings::store(&paths);

    let settings = PlaybackSettings {
        pronunciation: PronunciationMode::Jp,
        volume: 0.25,
        play_times: 0,
    };
    store.save(&settings).unwrap();

    let text = fs::read_to_string(store.path()).unwrap();
    assert!(text.contains("\"jp\""));
    assert_eq!(store.load(), settings);
}
