//! Web Speech API backend
//!
//! Wraps `window.speechSynthesis`; completion events are bridged into a JS promise.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{SpeechSynthesis, SpeechSynthesisErrorEvent, SpeechSynthesisUtterance, SpeechSynthesisVoice};

use super::{SpeechFuture, SpeechOutcome, SpeechPort, SpeechRequest, VoiceInfo};

/// Slot whose value can be taken exactly once
struct SettleOnce<T>(Rc<RefCell<Option<T>>>);

impl<T> SettleOnce<T> {
    fn empty() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }

    fn fill(&self, value: T) {
        *self.0.borrow_mut() = Some(value);
    }

    fn take(&self) -> Option<T> {
        self.0.borrow_mut().take()
    }
}

pub struct WebSpeech {
    synth: Option<SpeechSynthesis>,
}

impl WebSpeech {
    pub fn new() -> Self {
        let synth = web_sys::window().and_then(|w| w.speech_synthesis().ok());
        if synth.is_none() {
            log::warn!("speechSynthesis unavailable, wishes will not be spoken");
        }
        Self { synth }
    }

    fn platform_voices(&self) -> Vec<SpeechSynthesisVoice> {
        match &self.synth {
            Some(synth) => synth
                .get_voices()
                .iter()
                .filter_map(|v| v.dyn_into::<SpeechSynthesisVoice>().ok())
                .collect(),
            None => Vec::new(),
        }
    }
}

fn failed(reason: String) -> SpeechFuture {
    Box::pin(async move { SpeechOutcome::Failed(reason) })
}

impl SpeechPort for WebSpeech {
    fn voices(&self) -> Vec<VoiceInfo> {
        self.platform_voices()
            .into_iter()
            .map(|v| VoiceInfo {
                name: v.name(),
                lang: v.lang(),
                default: v.default(),
            })
            .collect()
    }

    fn speak(&self, request: SpeechRequest) -> SpeechFuture {
        let Some(synth) = self.synth.clone() else {
            return failed("speech synthesis unavailable".to_string());
        };
        let utterance = match SpeechSynthesisUtterance::new_with_text(&request.text) {
            Ok(u) => u,
            Err(e) => return failed(format!("{:?}", e)),
        };
        utterance.set_lang(request.lang.tag());
        utterance.set_rate(request.rate);
        utterance.set_volume(request.volume);
        utterance.set_pitch(request.pitch);

        if let Some(wanted) = &request.voice {
            let platform_voice = self
                .platform_voices()
                .into_iter()
                .find(|v| v.name() == wanted.name && v.lang() == wanted.lang);
            utterance.set_voice(platform_voice.as_ref());
        }

        // onend and onerror share one handler; the first event settles the promise
        let settle: SettleOnce<(Function, Function)> = SettleOnce::empty();
        let promise = js_sys::Promise::new(&mut |resolve, reject| settle.fill((resolve, reject)));
        let handler = Closure::<dyn FnMut(JsValue)>::new(move |ev: JsValue| {
            let Some((resolve, reject)) = settle.take() else {
                return;
            };
            match ev.dyn_ref::<SpeechSynthesisErrorEvent>() {
                Some(error) => {
                    let reason = JsValue::from_str(&format!("{:?}", error.error()));
                    let _ = reject.call1(&JsValue::NULL, &reason);
                }
                None => {
                    let _ = resolve.call0(&JsValue::NULL);
                }
            }
        });
        utterance.set_onend(Some(handler.as_ref().unchecked_ref()));
        utterance.set_onerror(Some(handler.as_ref().unchecked_ref()));

        synth.speak(&utterance);

        Box::pin(async move {
            let result = JsFuture::from(promise).await;
            utterance.set_onend(None);
            utterance.set_onerror(None);
            drop(handler);
            match result {
                Ok(_) => SpeechOutcome::Finished,
                Err(e) => SpeechOutcome::Failed(e.as_string().unwrap_or_else(|| format!("{:?}", e))),
            }
        })
    }
}
