//! Read-aloud capability over the browser speech-synthesis API.
//!
//! Provided to pages as a context value so components never reach into
//! global browser state directly. Inert outside the browser.

/// Handle to the browser's speech synthesis engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct Narrator;

impl Narrator {
    /// Speak `text`, cancelling anything already queued.
    pub fn speak(self, text: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Ok(synth) = window.speech_synthesis() else {
                return;
            };
            synth.cancel();
            if let Ok(utterance) = web_sys::SpeechSynthesisUtterance::new_with_text(text) {
                synth.speak(&utterance);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = text;
        }
    }

    /// Stop any ongoing speech.
    pub fn stop(self) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(synth) = window.speech_synthesis() {
                    synth.cancel();
                }
            }
        }
    }
}
