//! Integration tests for speech synthesis
//!
//! These exercise whichever local TTS backend the host provides. Headless
//! machines and CI often have none, which is accepted.

use vocabvoice::speech::synth::create_synth;

#[test]
fn test_create_synth() {
    match create_synth() {
        Ok(synth) => {
            println!("✓ Successfully created TTS backend");
            drop(synth);
        }
        Err(e) => {
            println!("⚠ TTS creation failed (may be expected): {}", e);
        }
    }
}

#[test]
fn test_speech_configuration() {
    if let Ok(mut synth) = create_synth() {
        assert!(synth.set_rate(50).is_ok(), "Should set rate to 50");
        assert!(synth.set_rate(0).is_ok(), "Should set rate to 0");
        assert!(synth.set_rate(100).is_ok(), "Should set rate to 100");

        assert!(synth.set_volume(50).is_ok(), "Should set volume to 50");
        assert!(synth.set_volume(100).is_ok(), "Should set volume to 100");

        let voice_result = synth.set_voice_idx(0);
        println!("Voice index setting result: {:?}", voice_result);
    } else {
        println!("⚠ Skipping configuration tests (TTS not available)");
    }
}

#[test]
fn test_speech_operations() {
    if let Ok(mut synth) = create_synth() {
        assert!(synth.speak("").is_ok(), "Should handle empty string");
        assert!(synth.speak("vocabulary").is_ok(), "Should speak a word");
        assert!(synth.cancel().is_ok(), "Should cancel without error");
    } else {
        println!("⚠ Skipping operation tests (TTS not available)");
    }
}

#[test]
fn test_speech_unicode() {
    if let Ok(mut synth) = create_synth() {
        assert!(synth.speak("猫").is_ok(), "Should handle CJK characters");
        assert!(synth.speak("naïve café").is_ok(), "Should handle accents");
        let _ = synth.cancel();
    } else {
        println!("⚠ Skipping Unicode tests (TTS not available)");
    }
}
