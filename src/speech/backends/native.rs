//! Native TTS backend using the tts crate
//!
//! The `tts` crate gives one interface over:
//! - WinRT / SAPI on Windows
//! - AVFoundation on macOS
//! - Speech Dispatcher on Linux

use crate::speech::{SpeechCommand, Synth};
use crate::{Result, VocabError};
use log::{debug, error, warn};
use std::thread;
use std::time::Duration;
use tts::Tts as TtsCrate;

/// Poll interval while waiting for an utterance to end
const SPEAKING_POLL: Duration = Duration::from_millis(50);

/// Native TTS backend using the tts crate
pub struct NativeSynth {
    tts: TtsCrate,

    /// Cached rate setting (0-100)
    rate: Option<u8>,

    /// Cached volume setting (0-100)
    volume: Option<u8>,

    /// Cached voice index
    voice_idx: Option<usize>,
}

impl NativeSynth {
    pub fn new() -> Result<Self> {
        debug!("Creating native TTS backend");

        let tts = TtsCrate::default()
            .map_err(|e| VocabError::Speech(format!("Failed to initialize TTS: {}", e)))?;

        debug!("Native TTS backend created successfully");

        Ok(Self {
            tts,
            rate: None,
            volume: None,
            voice_idx: None,
        })
    }

    /// Map a 0-100 rate onto the backend range, with 50 at the normal rate
    fn convert_rate(rate: u8, min: f32, normal: f32, max: f32) -> f32 {
        let rate = rate.min(100) as f32;
        if rate <= 50.0 {
            min + (normal - min) * (rate / 50.0)
        } else {
            normal + (max - normal) * ((rate - 50.0) / 50.0)
        }
    }

    /// Convert volume (0-100) to tts crate volume (0.0-1.0)
    fn convert_volume(volume: u8) -> f32 {
        volume.min(100) as f32 / 100.0
    }
}

impl Synth for NativeSynth {
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
        self.rate = Some(rate);

        if !self.tts.supported_features().rate {
            warn!("Rate control not supported on this platform");
            return Ok(());
        }

        let converted = Self::convert_rate(
            rate,
            self.tts.min_rate(),
            self.tts.normal_rate(),
            self.tts.max_rate(),
        );
        self.tts
            .set_rate(converted)
            .map_err(|e| VocabError::Speech(format!("Failed to set rate: {}", e)))?;

        Ok(())
    }

    fn set_volume(&mut self, volume: u8) -> Result<()> {
        debug!("Setting volume to {}", volume);
        self.volume = Some(volume);

        if !self.tts.supported_features().volume {
            warn!("Volume control not supported on this platform");
            return Ok(());
        }

        self.tts
            .set_volume(Self::convert_volume(volume))
            .map_err(|e| VocabError::Speech(format!("Failed to set volume: {}", e)))?;

        Ok(())
    }

    fn set_voice_idx(&mut self, idx: usize) -> Result<()> {
        debug!("Setting voice index to {}", idx);
        self.voice_idx = Some(idx);

        if !self.tts.supported_features().voice {
            warn!("Voice selection not supported on this platform");
            return Ok(());
        }

        let voices = self
            .tts
            .voices()
            .map_err(|e| VocabError::Speech(format!("Failed to get voices: {}", e)))?;

        if let Some(voice) = voices.get(idx) {
            debug!("Selecting voice: {:?}", voice);
            self.tts
                .set_voice(voice)
                .map_err(|e| VocabError::Speech(format!("Failed to set voice: {}", e)))?;
        } else {
            warn!(
                "Voice index {} out of range (have {} voices)",
                idx,
                voices.len()
            );
        }

        Ok(())
    }

    fn speak(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }

        debug!("Speaking: {}", text);
        self.tts.speak(text, true).map_err(|e| {
            error!("Failed to speak: {}", e);
            VocabError::Speech(format!("Speak failed: {}", e))
        })?;

        Ok(())
    }

    fn wait_until_done(&mut self) -> Result<()> {
        if !self.tts.supported_features().is_speaking {
            debug!("Backend cannot report speaking state, not waiting");
            return Ok(());
        }

        loop {
            let speaking = self
                .tts
                .is_speaking()
                .map_err(|e| VocabError::Speech(format!("Failed to query speech state: {}", e)))?;
            if !speaking {
                return Ok(());
            }
            thread::sleep(SPEAKING_POLL);
        }
    }

    fn cancel(&mut self) -> Result<()> {
        debug!("Canceling speech");
        self.tts.stop().map_err(|e| {
            error!("Failed to cancel speech: {}", e);
            VocabError::Speech(format!("Cancel failed: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_synth() {
        // May fail without speech-dispatcher or in CI without audio
        match NativeSynth::new() {
            Ok(_) => println!("✓ Native TTS backend initialized successfully"),
            Err(e) => println!("⚠ TTS initialization failed (may be expected in CI): {}", e),
        }
    }

    #[test]
    fn test_rate_conversion() {
        assert_eq!(NativeSynth::convert_rate(0, 0.5, 1.0, 2.0), 0.5);
        assert_eq!(NativeSynth::convert_rate(50, 0.5, 1.0, 2.0), 1.0);
        assert_eq!(NativeSynth::convert_rate(100, 0.5, 1.0, 2.0), 2.0);
        assert_eq!(NativeSynth::convert_rate(75, 0.5, 1.0, 2.0), 1.5);
        assert_eq!(NativeSynth::convert_rate(200, 0.5, 1.0, 2.0), 2.0);
    }

    #[test]
    fn test_volume_conversion() {
        assert_eq!(NativeSynth::convert_volume(0), 0.0);
        assert_eq!(NativeSynth::convert_volume(50), 0.5);
        assert_eq!(NativeSynth::convert_volume(100), 1.0);
    }
}
