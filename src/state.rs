//! Wishlist State Store
//!
//! Ordered wish list plus the form draft. Every list mutation builds a new
//! `Vec`; existing items are replaced, never edited in place.

use crate::error::{WishError, WishResult};
use crate::models::{FormDraft, Priority, SpeechLang, WishItem};

#[derive(Debug, Clone, Default)]
pub struct WishlistState {
    items: Vec<WishItem>,
    draft: FormDraft,
    last_id: u64,
}

impl WishlistState {
    pub fn new(items: Vec<WishItem>, language: SpeechLang) -> Self {
        Self {
            items,
            draft: FormDraft::with_language(language),
            last_id: 0,
        }
    }

    pub fn items(&self) -> &[WishItem] {
        &self.items
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn set_draft_text(&mut self, text: impl Into<String>) {
        self.draft.text = text.into();
    }

    pub fn set_draft_priority(&mut self, priority: Priority) {
        self.draft.priority = priority;
    }

    /// Select the speech language by tag; unknown tags leave the selection unchanged
    pub fn set_speech_language(&mut self, tag: &str) -> WishResult<SpeechLang> {
        let lang = tag.parse::<SpeechLang>()?;
        self.draft.language = lang;
        Ok(lang)
    }

    /// Next id: at least `now`, above the last issued id, and not already in the list
    fn next_id(&mut self, now: u64) -> u64 {
        let mut id = now.max(self.last_id.saturating_add(1));
        while self.items.iter().any(|item| item.id == id) {
            id += 1;
        }
        self.last_id = id;
        id
    }

    /// Append a wish and reset the draft text and priority.
    /// Whitespace-only text is rejected without touching any state.
    pub fn add_item(&mut self, text: &str, priority: Priority, now: u64) -> WishResult<WishItem> {
        if text.trim().is_empty() {
            return Err(WishError::EmptyText);
        }
        let item = WishItem::new(self.next_id(now), text.to_string(), priority);
        self.items = self
            .items
            .iter()
            .cloned()
            .chain(std::iter::once(item.clone()))
            .collect();
        self.draft.text.clear();
        self.draft.priority = Priority::Low;
        Ok(item)
    }

    /// Flip `completed` on the matching item. Returns false when no item matched.
    pub fn toggle_completed(&mut self, id: u64) -> bool {
        if !self.items.iter().any(|item| item.id == id) {
            return false;
        }
        self.items = self
            .items
            .iter()
            .map(|item| if item.id == id { item.toggled() } else { item.clone() })
            .collect();
        true
    }

    /// Remove the matching item. Returns false when no item matched.
    pub fn delete_item(&mut self, id: u64) -> bool {
        let before = self.items.len();
        let remaining: Vec<WishItem> = self
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        let removed = remaining.len() != before;
        self.items = remaining;
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ids(state: &WishlistState) -> Vec<u64> {
        state.items().iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_add_appends_and_resets_draft() {
        let mut state = WishlistState::new(Vec::new(), SpeechLang::DeDe);
        state.set_draft_text("Bike");
        state.set_draft_priority(Priority::High);

        let item = state.add_item("Bike", Priority::High, 1000).unwrap();

        assert_eq!(item.id, 1000);
        assert!(!item.completed);
        assert_eq!(state.items(), &[item]);
        assert_eq!(state.draft().text, "");
        assert_eq!(state.draft().priority, Priority::Low);
        assert_eq!(state.draft().language, SpeechLang::DeDe);
    }

    #[test]
    fn test_add_keeps_text_untrimmed() {
        let mut state = WishlistState::default();
        let item = state.add_item("  Book ", Priority::Low, 1).unwrap();
        assert_eq!(item.text, "  Book ");
    }

    #[test]
    fn test_blank_text_is_rejected() {
        let mut state = WishlistState::default();
        state.set_draft_text("   ");
        state.set_draft_priority(Priority::Medium);

        assert_eq!(state.add_item("", Priority::High, 1), Err(WishError::EmptyText));
        assert_eq!(state.add_item(" \t\n", Priority::High, 2), Err(WishError::EmptyText));

        assert!(state.items().is_empty());
        assert_eq!(state.draft().text, "   ");
        assert_eq!(state.draft().priority, Priority::Medium);
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let mut state = WishlistState::default();
        for n in 0..5 {
            state.add_item(&format!("wish {}", n), Priority::Low, 42).unwrap();
        }
        let unique: HashSet<u64> = ids(&state).into_iter().collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn test_ids_skip_loaded_items() {
        let loaded = vec![
            WishItem::new(500, "a".to_string(), Priority::Low),
            WishItem::new(501, "b".to_string(), Priority::Low),
        ];
        let mut state = WishlistState::new(loaded, SpeechLang::EnUs);
        let item = state.add_item("c", Priority::Low, 500).unwrap();
        assert_eq!(item.id, 502);
    }

    #[test]
    fn test_ids_stay_unique_across_mixed_operations() {
        let mut state = WishlistState::default();
        let mut now = 10;
        for round in 0..20u64 {
            let item = state.add_item("wish", Priority::Medium, now).unwrap();
            if round % 3 == 0 {
                state.toggle_completed(item.id);
            }
            if round % 4 == 0 {
                state.delete_item(item.id);
            }
            // clock going backwards must not produce duplicates
            now = if round % 2 == 0 { now + 1 } else { now - 1 };
        }
        let all = ids(&state);
        let unique: HashSet<u64> = all.iter().copied().collect();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn test_toggle_touches_only_matching_item() {
        let mut state = WishlistState::default();
        let bike = state.add_item("Bike", Priority::High, 1).unwrap();
        let book = state.add_item("Book", Priority::Low, 2).unwrap();

        assert!(state.toggle_completed(bike.id));
        assert!(state.items()[0].completed);
        assert_eq!(state.items()[1], book);

        assert!(state.toggle_completed(bike.id));
        assert_eq!(state.items(), &[bike, book]);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut state = WishlistState::default();
        let bike = state.add_item("Bike", Priority::High, 1).unwrap();
        assert!(!state.toggle_completed(99));
        assert_eq!(state.items(), &[bike]);
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut state = WishlistState::default();
        for (n, text) in ["a", "b", "c", "d"].iter().enumerate() {
            state.add_item(text, Priority::Low, n as u64 + 1).unwrap();
        }
        assert!(state.delete_item(2));
        assert_eq!(ids(&state), vec![1, 3, 4]);
        assert!(!state.delete_item(2));
        assert_eq!(ids(&state), vec![1, 3, 4]);
    }

    #[test]
    fn test_language_selection_is_validated() {
        let mut state = WishlistState::default();
        assert_eq!(state.set_speech_language("zh-CN"), Ok(SpeechLang::ZhCn));
        assert_eq!(
            state.set_speech_language("fr-FR"),
            Err(WishError::UnsupportedLanguage("fr-FR".to_string()))
        );
        assert_eq!(state.draft().language, SpeechLang::ZhCn);
    }
}
