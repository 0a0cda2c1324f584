//! espeak-ng subprocess backend
//!
//! Fallback for Linux hosts where Speech Dispatcher isn't running. Each
//! utterance is a short-lived `espeak-ng` process that plays through the
//! default sound server.
//!
//! Dependencies:
//! - espeak-ng (install with: sudo apt install espeak-ng)

use crate::speech::{SpeechCommand, Synth};
use crate::{Result, VocabError};
use log::{debug, error};
use std::process::{Child, Command, Stdio};

/// espeak-ng voices selectable by index
const VOICES: &[&str] = &["en-us", "en-gb", "ja", "en"];

/// TTS backend driving the espeak-ng command line tool
pub struct EspeakSynth {
    /// Currently running espeak-ng process
    current_process: Option<Child>,

    /// Cached rate setting (0-100)
    rate: u8,

    /// Cached volume setting (0-100)
    volume: u8,

    /// espeak-ng voice name
    voice: String,

    /// Path to espeak-ng
    espeak_path: String,
}

impl EspeakSynth {
    /// Verify espeak-ng is installed and create the backend
    pub fn new() -> Result<Self> {
        debug!("Creating espeak-ng backend");

        let espeak_path = Self::find_espeak()?;
        debug!("Found espeak-ng at: {}", espeak_path);

        Ok(Self {
            current_process: None,
            rate: 50,
            volume: 80,
            voice: VOICES[0].to_string(),
            espeak_path,
        })
    }

    fn find_espeak() -> Result<String> {
        for path in ["espeak-ng", "/usr/bin/espeak-ng"] {
            let status = Command::new(path)
                .arg("--version")
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status();
            if matches!(status, Ok(s) if s.success()) {
                return Ok(path.to_string());
            }
        }

        Err(VocabError::Speech(
            "espeak-ng not found. Install with: sudo apt install espeak-ng".to_string(),
        ))
    }

    /// Convert rate (0-100) to espeak speed (80-450 wpm)
    fn rate_to_speed(rate: u8) -> u16 {
        80 + (rate.min(100) as u16 * 370 / 100)
    }

    /// Convert volume (0-100) to espeak amplitude (0-200)
    fn volume_to_amplitude(volume: u8) -> u8 {
        (volume.min(100) as u16 * 2) as u8
    }

    fn voice_by_idx(idx: usize) -> &'static str {
        VOICES.get(idx).copied().unwrap_or("en")
    }

    /// Kill any utterance still in progress
    fn cancel_process(&mut self) {
        if let Some(mut child) = self.current_process.take() {
            debug!("Killing espeak-ng process");
            match child.kill() {
                Ok(_) => {
                    let _ = child.wait();
                }
                Err(e) => debug!("Failed to kill espeak-ng process: {}", e),
            }
        }
    }
}

impl Synth for EspeakSynth {
    fn send(&mut self, cmd: SpeechCommand) -> Result<()> {
        match cmd {
            SpeechCommand::Speak(text) => self.speak(&text),
            SpeechCommand::Cancel => self.cancel(),
            SpeechCommand::SetRate(rate) => self.set_rate(rate),
            SpeechCommand::SetVolume(vol) => self.set_volume(vol),
            SpeechCommand::SetVoiceIdx(idx) => self.set_voice_idx(idx),
        }
    }

    fn set_rate(&mut self, rate: u8) -> Result<()> {
        debug!("Setting rate to {}", rate);
        self.rate = rate;
        Ok(())
    }

    fn set_volume(&mut self, volume: u8) -> Result<()> {
        debug!("Setting volume to {}", volume);
        self.volume = volume;
        Ok(())
    }

    fn set_voice_idx(&mut self, idx: usize) -> Result<()> {
        let voice = Self::voice_by_idx(idx);
        debug!("Setting voice to {} (index {})", voice, idx);
        self.voice = voice.to_string();
        Ok(())
    }

    fn speak(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        debug!("Speaking: {}", text);
        self.cancel_process();

        let child = Command::new(&self.espeak_path)
            .arg("-v")
            .arg(&self.voice)
            .arg("-s")
            .arg(Self::rate_to_speed(self.rate).to_string())
            .arg("-a")
            .arg(Self::volume_to_amplitude(self.volume).to_string())
            .arg(text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                error!("Failed to spawn espeak-ng: {}", e);
                VocabError::Speech(format!("Failed to start espeak-ng: {}", e))
            })?;

        self.current_process = Some(child);
        Ok(())
    }

    fn wait_until_done(&mut self) -> Result<()> {
        if let Some(mut child) = self.current_process.take() {
            let status = child.wait()?;
            debug!("espeak-ng exited with {}", status);
        }
        Ok(())
    }

    fn cancel(&mut self) -> Result<()> {
        debug!("Canceling speech");
        self.cancel_process();
        Ok(())
    }
}

impl Drop for EspeakSynth {
    fn drop(&mut self) {
        self.cancel_process();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_conversion() {
        assert_eq!(EspeakSynth::rate_to_speed(0), 80);
        assert_eq!(EspeakSynth::rate_to_speed(50), 265);
        assert_eq!(EspeakSynth::rate_to_speed(100), 450);
        assert_eq!(EspeakSynth::rate_to_speed(255), 450);
    }

    #[test]
    fn test_volume_conversion() {
        assert_eq!(EspeakSynth::volume_to_amplitude(0), 0);
        assert_eq!(EspeakSynth::volume_to_amplitude(50), 100);
        assert_eq!(EspeakSynth::volume_to_amplitude(100), 200);
    }

    #[test]
    fn test_voice_selection() {
        assert_eq!(EspeakSynth::voice_by_idx(0), "en-us");
        assert_eq!(EspeakSynth::voice_by_idx(1), "en-gb");
        assert_eq!(EspeakSynth::voice_by_idx(2), "ja");
        assert_eq!(EspeakSynth::voice_by_idx(999), "en");
    }

    #[test]
    fn test_create_espeak_synth() {
        match EspeakSynth::new() {
            Ok(_) => println!("✓ espeak-ng backend available"),
            Err(e) => println!("⚠ espeak-ng backend not available: {}", e),
        }
    }
}
