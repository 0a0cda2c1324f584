//! Speech synthesizer abstraction
//!
//! Provides a unified interface for text-to-speech across platforms.
//! The player speaks a word through this when no recording could be found.

use crate::platform::{host_os, is_wsl, HostOs};
use crate::{Result, VocabError};
use log::info;

/// Commands sent to a speech backend
#[derive(Debug, Clone)]
pub enum SpeechCommand {
    /// Speak a string of text
    Speak(String),
    /// Cancel/silence current speech
    Cancel,
    /// Set speech rate (0-100)
    SetRate(u8),
    /// Set speech volume (0-100)
    SetVolume(u8),
    /// Set voice index (backend-specific)
    SetVoiceIdx(usize),
}

/// Speech synthesizer trait
pub trait Synth: Send {
    /// Send a raw command to the backend
    fn send(&mut self, cmd: SpeechCommand) -> Result<()>;

    /// Set speech rate (0-100, where 50 is normal)
    fn set_rate(&mut self, rate: u8) -> Result<()>;

    /// Set speech volume (0-100)
    fn set_volume(&mut self, volume: u8) -> Result<()>;

    /// Set voice by index (platform-specific)
    fn set_voice_idx(&mut self, idx: usize) -> Result<()>;

    /// Start speaking text; returns once the utterance is queued
    fn speak(&mut self, text: &str) -> Result<()>;

    /// Block until the current utterance has finished
    fn wait_until_done(&mut self) -> Result<()>;

    /// Cancel/silence current speech
    fn cancel(&mut self) -> Result<()>;

    /// Speak text and block until it has been said
    fn speak_and_wait(&mut self, text: &str) -> Result<()> {
        self.speak(text)?;
        self.wait_until_done()
    }
}

/// Create a platform-appropriate speech synthesizer
///
/// **Windows / macOS:** native backend via the tts crate (SAPI/WinRT, AVFoundation).
///
/// **Linux:**
/// 1. Speech Dispatcher via the tts crate
/// 2. espeak-ng subprocess (fallback if Speech Dispatcher is unavailable)
pub fn create_synth() -> Result<Box<dyn Synth>> {
    use super::backends::native::NativeSynth;

    let os = host_os();
    info!("Creating speech synthesizer for {:?}", os);

    if os != HostOs::Linux {
        return match NativeSynth::new() {
            Ok(synth) => {
                info!("✓ Successfully initialized native TTS backend");
                Ok(Box::new(synth))
            }
            Err(e) => Err(VocabError::Speech(format!(
                "Failed to initialize speech backend for platform '{}': {}",
                std::env::consts::OS,
                e
            ))),
        };
    }

    if is_wsl() {
        info!("Detected WSL environment");
    }

    info!("Trying Speech Dispatcher backend...");
    match NativeSynth::new() {
        Ok(synth) => {
            info!("✓ Successfully initialized Speech Dispatcher backend");
            return Ok(Box::new(synth));
        }
        Err(e) => {
            info!("✗ Speech Dispatcher unavailable: {}", e);
        }
    }

    info!("Trying espeak-ng backend...");
    use super::backends::espeak::EspeakSynth;

    match EspeakSynth::new() {
        Ok(synth) => {
            info!("✓ Successfully initialized espeak-ng backend");
            Ok(Box::new(synth))
        }
        Err(e) => Err(VocabError::Speech(format!(
            "No speech backend available on Linux. Tried:\n\
             1. Speech Dispatcher (install: sudo apt install speech-dispatcher)\n\
             2. espeak-ng (install: sudo apt install espeak-ng)\n\
             Error: {}",
            e
        ))),
    }
}
