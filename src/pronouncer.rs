//! Word pronunciation as driven by the trainer's speaker button
//!
//! Ties the resolver and the player to one shared playback flag, so a press
//! while a word is still playing is ignored.

use crate::player::{AudioPlayer, Playback, PlaybackState};
use crate::pronunciation::{PronunciationMode, PronunciationResolver};
use crate::settings::PlaybackSettings;
use log::debug;

pub struct Pronouncer {
    resolver: PronunciationResolver,
    player: AudioPlayer,
    state: PlaybackState,
}

impl Pronouncer {
    pub fn new(resolver: PronunciationResolver, player: AudioPlayer) -> Self {
        Self {
            resolver,
            player,
            state: PlaybackState::new(),
        }
    }

    /// Flag the front end binds its speaker icon to
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn resolver(&self) -> &PronunciationResolver {
        &self.resolver
    }

    /// Resolve and play `word`, unless a pronunciation is already playing
    ///
    /// The flag is claimed before resolving, so a second press during a slow
    /// download is ignored too.
    pub fn pronounce(&self, word: &str, mode: PronunciationMode, volume: f32) -> Option<Playback> {
        if !self.state.try_begin() {
            debug!("Already playing, ignoring request for {:?}", word);
            return None;
        }

        let source = self.resolver.resolve(word, mode);
        let state = self.state.clone();
        let playback = self.player.play(word, &source, volume, move |event| state.apply(event));
        if source.is_empty() {
            // Local TTS reports no transitions
            self.state.set_playing(false);
        }
        Some(playback)
    }

    /// Pronounce the word just shown, if the settings ask for it
    pub fn auto_pronounce(&self, word: &str, settings: &PlaybackSettings) -> Option<Playback> {
        if settings.play_times == 0 {
            return None;
        }
        self.pronounce(word, settings.pronunciation, settings.volume)
    }
}
