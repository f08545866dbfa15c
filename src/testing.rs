//! Test doubles for the storage, speech and clock ports.

use std::cell::{Cell, RefCell};

use crate::clock::Clock;
use crate::speech::{SpeechFuture, SpeechOutcome, SpeechPort, SpeechRequest, VoiceInfo};

/// Records every request and resolves with a canned outcome
pub struct RecordingSpeech {
    voices: Vec<VoiceInfo>,
    outcome: SpeechOutcome,
    requests: RefCell<Vec<SpeechRequest>>,
}

impl Default for RecordingSpeech {
    fn default() -> Self {
        Self::with_voices(Vec::new())
    }
}

impl RecordingSpeech {
    pub fn with_voices(voices: Vec<VoiceInfo>) -> Self {
        Self {
            voices,
            outcome: SpeechOutcome::Finished,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            outcome: SpeechOutcome::Failed(reason.to_string()),
            ..Self::default()
        }
    }

    pub fn requests(&self) -> Vec<SpeechRequest> {
        self.requests.borrow().clone()
    }
}

impl SpeechPort for RecordingSpeech {
    fn voices(&self) -> Vec<VoiceInfo> {
        self.voices.clone()
    }

    fn speak(&self, request: SpeechRequest) -> SpeechFuture {
        self.requests.borrow_mut().push(request);
        let outcome = self.outcome.clone();
        Box::pin(async move { outcome })
    }
}

/// Clock advancing by a fixed step on every read
pub struct StepClock {
    now: Cell<u64>,
    step: u64,
}

impl StepClock {
    pub fn new(start: u64, step: u64) -> Self {
        Self {
            now: Cell::new(start),
            step,
        }
    }
}

impl Clock for StepClock {
    fn now_millis(&self) -> u64 {
        let now = self.now.get();
        self.now.set(now + self.step);
        now
    }
}
