//! Pronunciation playback
//!
//! A resolved file is played on a worker thread with Playing/Stopped
//! transitions reported to the caller. An empty source is spoken with local
//! TTS instead, fire-and-forget.

pub mod output;
pub mod state;

pub use output::{MediaOutput, RodioOutput};
pub use state::{PlaybackState, PlayerEvent};

use crate::pronunciation::AudioSource;
use crate::speech::Synth;
use crate::{Result, VocabError};
use log::{debug, error, warn};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

/// Map a 0.0-1.0 volume onto the device's 0-100 scale
pub fn volume_percent(volume: f32) -> u8 {
    if volume.is_nan() {
        return 0;
    }
    (volume.clamp(0.0, 1.0) * 100.0) as u8
}

/// Completion signal for a recorded pronunciation
#[derive(Debug)]
pub struct PlaybackHandle {
    worker: JoinHandle<Result<()>>,
}

impl PlaybackHandle {
    /// Block until playback ends and return its outcome
    pub fn wait(self) -> Result<()> {
        self.worker
            .join()
            .map_err(|_| VocabError::Audio("Playback thread panicked".to_string()))?
    }
}

/// What `AudioPlayer::play` started
#[derive(Debug)]
pub enum Playback {
    /// A recording is playing; wait on the handle for completion
    Media(PlaybackHandle),
    /// The word was handed to local TTS on a detached thread
    Speech,
    /// No recording and no synthesizer; nothing was played
    Unavailable,
}

/// Plays resolved pronunciations
pub struct AudioPlayer {
    output: Arc<dyn MediaOutput>,
    speech: Option<Arc<Mutex<Box<dyn Synth>>>>,
}

impl AudioPlayer {
    pub fn new(output: Arc<dyn MediaOutput>, speech: Option<Box<dyn Synth>>) -> Self {
        Self {
            output,
            speech: speech.map(|synth| Arc::new(Mutex::new(synth))),
        }
    }

    /// Play `source` for `word`
    ///
    /// For a file source `on_state` sees `Playing` before this returns and
    /// `Stopped` exactly once when the worker finishes, whether or not
    /// playback succeeded. For an empty source `on_state` is never called.
    pub fn play<F>(&self, word: &str, source: &AudioSource, volume: f32, on_state: F) -> Playback
    where
        F: FnMut(PlayerEvent) + Send + 'static,
    {
        match source {
            AudioSource::File(path) => {
                Playback::Media(self.play_file(path.clone(), volume_percent(volume), on_state))
            }
            AudioSource::Empty => self.speak(word),
        }
    }

    /// Speak `word` with local TTS on the calling thread and wait for it
    ///
    /// For callers with no event loop, such as the command line, where a
    /// detached utterance would be cut off at exit.
    pub fn speak_now(&self, word: &str) -> Result<()> {
        let synth = self
            .speech
            .as_ref()
            .ok_or_else(|| VocabError::Speech("No speech backend available".to_string()))?;
        let mut synth = match synth.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        synth.speak_and_wait(word)
    }

    fn play_file<F>(&self, path: PathBuf, volume: u8, mut on_state: F) -> PlaybackHandle
    where
        F: FnMut(PlayerEvent) + Send + 'static,
    {
        on_state(PlayerEvent::Playing);

        let output = Arc::clone(&self.output);
        let worker = thread::spawn(move || {
            let result = output.play_to_end(&path, volume);
            if let Err(ref e) = result {
                warn!("Playback of {} failed: {}", path.display(), e);
            }
            on_state(PlayerEvent::Stopped);
            result
        });

        PlaybackHandle { worker }
    }

    fn speak(&self, word: &str) -> Playback {
        let synth = match self.speech {
            Some(ref synth) => Arc::clone(synth),
            None => {
                warn!("No recording for {:?} and no speech backend available", word);
                return Playback::Unavailable;
            }
        };

        debug!("Speaking {:?} with local TTS", word);
        let text = word.to_string();
        thread::spawn(move || {
            let mut synth = match synth.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            if let Err(e) = synth.speak_and_wait(&text) {
                error!("Local TTS failed for {:?}: {}", text, e);
            }
        });

        Playback::Speech
    }
}
