//! Audio output devices for recorded pronunciations

use crate::{Result, VocabError};
use log::debug;
use rodio::{Decoder, OutputStream, Sink};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Something that can play an audio file to completion
pub trait MediaOutput: Send + Sync {
    /// Play `path` at `volume` (0-100) and block until it ends
    fn play_to_end(&self, path: &Path, volume: u8) -> Result<()>;
}

/// Default output device via rodio
///
/// The output stream is opened per playback and dropped afterwards so the
/// device isn't held while idle.
#[derive(Debug, Default, Clone, Copy)]
pub struct RodioOutput;

impl RodioOutput {
    pub fn new() -> Self {
        Self
    }
}

impl MediaOutput for RodioOutput {
    fn play_to_end(&self, path: &Path, volume: u8) -> Result<()> {
        let file = File::open(path)?;
        let decoder = Decoder::new(BufReader::new(file))
            .map_err(|e| VocabError::Audio(format!("Cannot decode {}: {}", path.display(), e)))?;

        let (_stream, handle) = OutputStream::try_default()
            .map_err(|e| VocabError::Audio(format!("No audio output device: {}", e)))?;
        let sink = Sink::try_new(&handle)
            .map_err(|e| VocabError::Audio(format!("Cannot open audio sink: {}", e)))?;

        // Volume goes on before any samples are queued
        sink.set_volume(volume.min(100) as f32 / 100.0);
        sink.append(decoder);
        debug!("Playing {} at volume {}", path.display(), volume);
        sink.sleep_until_end();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = RodioOutput::new()
            .play_to_end(&dir.path().join("absent.mp3"), 50)
            .unwrap_err();
        assert!(matches!(err, VocabError::Io(_)));
    }

    #[test]
    fn test_garbage_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_us.mp3");
        std::fs::write(&path, b"not audio").unwrap();

        let err = RodioOutput::new().play_to_end(&path, 50).unwrap_err();
        assert!(matches!(err, VocabError::Audio(_)));
    }
}
