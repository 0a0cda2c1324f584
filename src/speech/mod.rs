//! Local speech synthesis, used when no recording is available

pub mod backends;
pub mod synth;

pub use synth::{create_synth, SpeechCommand, Synth};
