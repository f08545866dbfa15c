//! Application Context
//!
//! Owns the wishlist manager and mirrors its list and draft into signals.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::error::WishError;
use crate::manager::WishlistManager;
use crate::models::{FormDraft, Priority, WishItem};

/// App-wide handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    manager: StoredValue<WishlistManager, LocalStorage>,
    /// Current wish list - read
    pub items: ReadSignal<Vec<WishItem>>,
    set_items: WriteSignal<Vec<WishItem>>,
    /// Current form draft - read
    pub draft: ReadSignal<FormDraft>,
    set_draft: WriteSignal<FormDraft>,
}

impl AppContext {
    pub fn new(manager: WishlistManager) -> Self {
        let (items, set_items) = signal(manager.items().to_vec());
        let (draft, set_draft) = signal(manager.draft().clone());
        Self {
            manager: StoredValue::new_local(manager),
            items,
            set_items,
            draft,
            set_draft,
        }
    }

    /// Run a draft-only manager operation, then publish the draft
    fn apply_draft<U>(&self, op: impl FnOnce(&mut WishlistManager) -> U) -> Option<U> {
        let result = self.manager.try_update_value(op);
        self.manager.with_value(|m| self.set_draft.set(m.draft().clone()));
        result
    }

    /// Run a list operation, then publish the list and the draft
    fn apply_list<U>(&self, op: impl FnOnce(&mut WishlistManager) -> U) -> Option<U> {
        let result = self.manager.try_update_value(op);
        self.manager.with_value(|m| {
            self.set_items.set(m.items().to_vec());
            self.set_draft.set(m.draft().clone());
        });
        result
    }

    pub fn set_draft_text(&self, text: String) {
        self.apply_draft(|m| m.set_draft_text(text));
    }

    pub fn set_draft_priority(&self, value: &str) {
        match value.parse::<Priority>() {
            Ok(priority) => {
                self.apply_draft(|m| m.set_draft_priority(priority));
            }
            Err(e) => log::warn!("{}", e),
        }
    }

    pub fn set_speech_language(&self, tag: &str) {
        if let Some(Err(e)) = self.apply_draft(|m| m.set_speech_language(tag)) {
            log::warn!("{}", e);
        }
    }

    /// Add the drafted wish and let its utterance play in the background
    pub fn add_wish(&self) {
        match self.apply_list(|m| m.submit_draft()) {
            Some(Ok(added)) => spawn_local(async move {
                let _ = added.speech.await;
            }),
            Some(Err(WishError::EmptyText)) => log::debug!("no input, cant add wish"),
            Some(Err(e)) => log::warn!("add rejected: {}", e),
            None => log::error!("wishlist manager disposed"),
        }
    }

    pub fn toggle_completed(&self, id: u64) {
        self.apply_list(|m| m.toggle_completed(id));
    }

    pub fn delete_item(&self, id: u64) {
        self.apply_list(|m| m.delete_item(id));
    }
}
