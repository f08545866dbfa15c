//! Speech Notifier
//!
//! Speaks newly added wishes through an injected `SpeechPort`.
//! Voice choice: first voice whose language tag equals the requested locale,
//! otherwise no explicit voice (platform default).

mod web;

pub use web::WebSpeech;

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use crate::models::SpeechLang;

/// Fixed prosody, not user configurable
pub const SPEECH_RATE: f32 = 1.0;
pub const SPEECH_VOLUME: f32 = 1.0;
pub const SPEECH_PITCH: f32 = 1.0;

/// Resolves once the utterance ends or fails
pub type SpeechFuture = Pin<Box<dyn Future<Output = SpeechOutcome>>>;

/// A voice reported by the platform
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceInfo {
    pub name: String,
    pub lang: String,
    pub default: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    pub text: String,
    pub lang: SpeechLang,
    pub rate: f32,
    pub volume: f32,
    pub pitch: f32,
    /// None = let the platform pick its default voice
    pub voice: Option<VoiceInfo>,
}

/// Terminal result of one utterance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechOutcome {
    Finished,
    Failed(String),
}

/// Audio output boundary
pub trait SpeechPort {
    fn voices(&self) -> Vec<VoiceInfo>;

    /// Issue the utterance immediately; the returned future only reports completion
    fn speak(&self, request: SpeechRequest) -> SpeechFuture;
}

/// First voice whose language tag exactly equals `lang`
pub fn select_voice(voices: &[VoiceInfo], lang: SpeechLang) -> Option<&VoiceInfo> {
    voices.iter().find(|voice| voice.lang == lang.tag())
}

#[derive(Clone)]
pub struct SpeechNotifier {
    port: Rc<dyn SpeechPort>,
}

impl SpeechNotifier {
    pub fn new(port: Rc<dyn SpeechPort>) -> Self {
        Self { port }
    }

    /// Build the request for `text`, resolving the voice against the current voice set
    pub fn request(&self, text: &str, lang: SpeechLang) -> SpeechRequest {
        let voices = self.port.voices();
        let voice = select_voice(&voices, lang).cloned();
        match &voice {
            Some(v) if v.default => log::debug!("using default voice {} for {}", v.name, v.lang),
            Some(v) => log::debug!("using voice {} for {}", v.name, v.lang),
            None => log::info!("no voice for {}, using default", lang),
        }
        SpeechRequest {
            text: text.to_string(),
            lang,
            rate: SPEECH_RATE,
            volume: SPEECH_VOLUME,
            pitch: SPEECH_PITCH,
            voice,
        }
    }

    /// Fire-and-forget: the utterance starts now, the future logs how it ended
    pub fn speak(&self, text: &str, lang: SpeechLang) -> SpeechFuture {
        let request = self.request(text, lang);
        log::info!("play speech ({}): {}", lang, text);
        let pending = self.port.speak(request);
        let text = text.to_string();
        Box::pin(async move {
            let outcome = pending.await;
            match &outcome {
                SpeechOutcome::Finished => log::debug!("speech finished: {}", text),
                SpeechOutcome::Failed(reason) => log::error!("speech failed for '{}': {}", text, reason),
            }
            outcome
        })
    }
}
