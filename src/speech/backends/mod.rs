//! Platform-specific speech backends

// Native TTS backend using the tts crate (SAPI/WinRT, AVFoundation, Speech Dispatcher)
pub mod native;

// espeak-ng subprocess backend for Linux hosts without Speech Dispatcher
pub mod espeak;
