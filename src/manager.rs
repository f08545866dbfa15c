//! Wishlist Manager
//!
//! Ties the state store to persistence and speech. Each list mutation ends
//! with a full snapshot save; adds also hand back the pending utterance.

use std::rc::Rc;

use crate::clock::Clock;
use crate::config::AppConfig;
use crate::error::WishResult;
use crate::models::{FormDraft, Priority, SpeechLang, WishItem};
use crate::persistence::Persistence;
use crate::speech::{SpeechFuture, SpeechNotifier, SpeechPort};
use crate::state::WishlistState;
use crate::storage::KeyValueStore;

/// Result of a successful add
pub struct AddedWish {
    pub item: WishItem,
    /// Already issued; await (or spawn) only to observe completion
    pub speech: SpeechFuture,
}

pub struct WishlistManager {
    state: WishlistState,
    persistence: Persistence,
    notifier: SpeechNotifier,
    clock: Box<dyn Clock>,
}

impl WishlistManager {
    /// Build the manager and load the stored snapshot
    pub fn new(
        store: Box<dyn KeyValueStore>,
        speech: Rc<dyn SpeechPort>,
        clock: Box<dyn Clock>,
        config: &AppConfig,
    ) -> Self {
        let persistence = Persistence::new(store);
        let items = persistence.load();
        Self {
            state: WishlistState::new(items, config.default_language),
            persistence,
            notifier: SpeechNotifier::new(speech),
            clock,
        }
    }

    pub fn items(&self) -> &[WishItem] {
        self.state.items()
    }

    pub fn draft(&self) -> &FormDraft {
        self.state.draft()
    }

    pub fn set_draft_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        log::debug!("update input: {}", text);
        self.state.set_draft_text(text);
    }

    pub fn set_draft_priority(&mut self, priority: Priority) {
        log::debug!("update priority: {}", priority);
        self.state.set_draft_priority(priority);
    }

    pub fn set_speech_language(&mut self, tag: &str) -> WishResult<SpeechLang> {
        let lang = self.state.set_speech_language(tag)?;
        log::debug!("update language select: {}", lang);
        Ok(lang)
    }

    /// Add a wish, save, and start speaking it in the selected language
    pub fn add_item(&mut self, text: &str, priority: Priority) -> WishResult<AddedWish> {
        let item = self.state.add_item(text, priority, self.clock.now_millis())?;
        log::info!("add new wish #{} '{}' ({})", item.id, item.text, item.priority);
        self.persist();
        let speech = self.notifier.speak(&item.text, self.state.draft().language);
        Ok(AddedWish { item, speech })
    }

    /// Add whatever the form draft currently holds
    pub fn submit_draft(&mut self) -> WishResult<AddedWish> {
        let FormDraft { text, priority, .. } = self.state.draft().clone();
        self.add_item(&text, priority)
    }

    pub fn toggle_completed(&mut self, id: u64) -> bool {
        let changed = self.state.toggle_completed(id);
        if changed {
            log::info!("toggled wish #{}", id);
            self.persist();
        } else {
            log::debug!("toggle ignored, no wish #{}", id);
        }
        changed
    }

    pub fn delete_item(&mut self, id: u64) -> bool {
        let removed = self.state.delete_item(id);
        if removed {
            log::info!("deleted wish #{}", id);
            self.persist();
        } else {
            log::debug!("delete ignored, no wish #{}", id);
        }
        removed
    }

    // Write failures are logged only; the in-memory list stays authoritative.
    fn persist(&self) {
        if let Err(e) = self.persistence.save(self.state.items()) {
            log::error!("failed to save wishes: {}", e);
        }
    }
}
