//! vocabvoice command line
//!
//! Drives the pronunciation engine from a terminal:
//! - `say <word...>`: resolve and play a word, waiting until it has been heard
//! - `resolve <word...>`: print where the pronunciation would come from
//! - `settings`: print the effective settings documents

use log::{debug, error, info, warn};
use std::process;
use std::sync::Arc;
use vocabvoice::config::Config;
use vocabvoice::paths::AppPaths;
use vocabvoice::player::{AudioPlayer, Playback, RodioOutput};
use vocabvoice::pronunciation::{
    AudioCacheIndex, AudioSource, HttpFetcher, PronunciationMode, PronunciationResolver,
};
use vocabvoice::settings::{LoadStatus, PlaybackSettings, SearchSettings, SettingsStore};
use vocabvoice::speech::create_synth;
use vocabvoice::{Result, VocabError};

const USAGE: &str = "\
Usage: vocabvoice [--debug] <command> [options]

Commands:
  say <word...>       Pronounce a word
  resolve <word...>   Print the cached or downloaded file for a word, or (tts)
  settings            Print the effective settings documents

Options:
  --mode <us|uk|jp|tts>  Pronunciation mode (default: from PlaybackSettings.json)
  --volume <0.0-1.0>     Recording volume (default: from PlaybackSettings.json)
  -d, --debug            Write debug logging to vocabvoice.log
  -h, --help             Show this help";

/// Parsed command line
#[derive(Debug, Default)]
struct Args {
    debug: bool,
    help: bool,
    command: Option<String>,
    words: Vec<String>,
    mode: Option<PronunciationMode>,
    volume: Option<f32>,
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();

    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--debug" | "-d" => args.debug = true,
            "--help" | "-h" => args.help = true,
            "--mode" => {
                let value = raw
                    .next()
                    .ok_or_else(|| VocabError::Config("--mode needs a value".to_string()))?;
                args.mode = Some(value.parse()?);
            }
            "--volume" => {
                let value = raw
                    .next()
                    .ok_or_else(|| VocabError::Config("--volume needs a value".to_string()))?;
                let volume = value
                    .parse::<f32>()
                    .map_err(|_| VocabError::Config(format!("Invalid volume: {}", value)))?;
                args.volume = Some(volume);
            }
            _ if args.command.is_none() => args.command = Some(arg),
            _ => args.words.push(arg),
        }
    }

    Ok(args)
}

fn init_logging(debug_mode: bool) {
    if debug_mode {
        use std::fs::OpenOptions;
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open("vocabvoice.log")
        {
            Ok(log_file) => {
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Debug)
                    .target(env_logger::Target::Pipe(Box::new(log_file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Warning: Failed to open vocabvoice.log for debug logging: {}", e);
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Warn)
                    .init();
            }
        }
        info!(
            "vocabvoice version {} starting (debug mode, logging to vocabvoice.log)",
            vocabvoice::VERSION
        );
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }
}

fn main() {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, USAGE);
            process::exit(2);
        }
    };

    init_logging(args.debug);

    if args.help || args.command.is_none() {
        println!("{}", USAGE);
        return;
    }

    if let Err(e) = run(args) {
        error!("Fatal error: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let paths = AppPaths::discover();
    debug!("Using {:?}", paths);

    match args.command.as_deref() {
        Some("say") => say(&args, &paths),
        Some("resolve") => resolve(&args, &paths),
        Some("settings") => show_settings(&paths),
        Some(other) => Err(VocabError::Config(format!(
            "Unknown command '{}'\n\n{}",
            other, USAGE
        ))),
        None => Ok(()),
    }
}

/// Load a settings document, telling the user when defaults replaced it
fn load_notice<T>(store: &SettingsStore<T>) -> T
where
    T: serde::Serialize + serde::de::DeserializeOwned + Default,
{
    let (doc, status) = store.load_with_status();
    if let LoadStatus::Malformed(message) = status {
        eprintln!("{}", message);
    }
    doc
}

fn word_of(args: &Args) -> Result<String> {
    let word = args.words.join(" ");
    if word.trim().is_empty() {
        return Err(VocabError::Config(format!("A word is required\n\n{}", USAGE)));
    }
    Ok(word)
}

fn build_resolver(paths: &AppPaths, config: &Config) -> Result<PronunciationResolver> {
    let index = Arc::new(AudioCacheIndex::scan(&paths.audio_dir)?);
    info!("{} cached pronunciations in {:?}", index.len(), paths.audio_dir);
    Ok(PronunciationResolver::new(
        paths.audio_dir.clone(),
        index,
        Box::new(HttpFetcher::new()?),
        config.service_url(),
    ))
}

fn say(args: &Args, paths: &AppPaths) -> Result<()> {
    let word = word_of(args)?;
    let config = Config::load()?;
    let playback = load_notice(&PlaybackSettings::store(paths));
    let mode = args.mode.unwrap_or(playback.pronunciation);
    let volume = args.volume.unwrap_or(playback.volume);

    let resolver = build_resolver(paths, &config)?;
    let source = resolver.resolve(&word, mode);

    let synth = if source.is_empty() {
        match create_synth() {
            Ok(mut synth) => {
                config.apply_speech(synth.as_mut());
                Some(synth)
            }
            Err(e) => {
                warn!("{}", e);
                None
            }
        }
    } else {
        None
    };
    let player = AudioPlayer::new(Arc::new(RodioOutput::new()), synth);

    match source {
        AudioSource::Empty => player.speak_now(&word),
        AudioSource::File(_) => {
            let playback = player.play(&word, &source, volume, |event| debug!("{:?}", event));
            match playback {
                Playback::Media(handle) => handle.wait(),
                _ => Ok(()),
            }
        }
    }
}

fn resolve(args: &Args, paths: &AppPaths) -> Result<()> {
    let word = word_of(args)?;
    let config = Config::load()?;
    let mode = match args.mode {
        Some(mode) => mode,
        None => load_notice(&PlaybackSettings::store(paths)).pronunciation,
    };

    match build_resolver(paths, &config)?.resolve(&word, mode) {
        AudioSource::File(path) => println!("{}", path.display()),
        AudioSource::Empty => println!("(tts)"),
    }
    Ok(())
}

fn show_settings(paths: &AppPaths) -> Result<()> {
    let search = SearchSettings::store(paths);
    let playback = PlaybackSettings::store(paths);

    println!("# {}", search.path().display());
    println!("{}", serde_json::to_string_pretty(&load_notice(&search))?);
    println!("# {}", playback.path().display());
    println!("{}", serde_json::to_string_pretty(&load_notice(&playback))?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_say_with_options() {
        let args = parse(&["say", "ice", "cream", "--mode", "uk", "--volume", "0.5"]).unwrap();
        assert_eq!(args.command.as_deref(), Some("say"));
        assert_eq!(args.words, vec!["ice", "cream"]);
        assert_eq!(args.mode, Some(PronunciationMode::Uk));
        assert_eq!(args.volume, Some(0.5));
        assert_eq!(word_of(&args).unwrap(), "ice cream");
    }

    #[test]
    fn test_parse_debug_flag_anywhere() {
        let args = parse(&["resolve", "-d", "apple"]).unwrap();
        assert!(args.debug);
        assert_eq!(args.words, vec!["apple"]);
    }

    #[test]
    fn test_parse_rejects_bad_values() {
        assert!(parse(&["say", "apple", "--mode", "fr"]).is_err());
        assert!(parse(&["say", "apple", "--volume", "loud"]).is_err());
        assert!(parse(&["say", "apple", "--mode"]).is_err());
    }

    #[test]
    fn test_missing_word() {
        let args = parse(&["say"]).unwrap();
        assert!(word_of(&args).is_err());
    }
}
