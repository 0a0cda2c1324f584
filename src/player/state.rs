//! Playback state shared between the player and its caller

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Transition reported by the player for a recorded pronunciation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    Playing,
    Stopped,
}

/// Shared "is a pronunciation playing" flag
///
/// The caller owns it and checks it before starting another playback; the
/// player only reports transitions.
#[derive(Debug, Clone, Default)]
pub struct PlaybackState {
    playing: Arc<AtomicBool>,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }

    pub fn set_playing(&self, playing: bool) {
        self.playing.store(playing, Ordering::SeqCst);
    }

    /// Claim the flag if it is clear; returns false if already playing
    pub fn try_begin(&self) -> bool {
        self.playing
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Apply a player transition to the flag
    pub fn apply(&self, event: PlayerEvent) {
        self.set_playing(event == PlayerEvent::Playing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_flag() {
        let state = PlaybackState::new();
        let other = state.clone();
        assert!(!state.is_playing());

        other.apply(PlayerEvent::Playing);
        assert!(state.is_playing());

        state.apply(PlayerEvent::Stopped);
        assert!(!other.is_playing());
    }

    #[test]
    fn test_try_begin_claims_once() {
        let state = PlaybackState::new();
        assert!(state.try_begin());
        assert!(!state.clone().try_begin());
        state.set_playing(false);
        assert!(state.try_begin());
    }
}
