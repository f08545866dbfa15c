//! Presentation Helpers
//!
//! Pure lookups used by the view components.

use crate::models::WishItem;

/// Delete button label per speech language
const DELETE_LABELS: &[(&str, &str)] = &[
    ("en-US", "Delete"),
    ("de-DE", "Zurückziehen"),
    ("zh-CN", "取消"),
    ("it-IT", "Cancellare"),
];

const DEFAULT_DELETE_LABEL: &str = "Delete";

pub fn delete_label(lang_tag: &str) -> &'static str {
    DELETE_LABELS
        .iter()
        .find(|(tag, _)| *tag == lang_tag)
        .map(|(_, label)| *label)
        .unwrap_or(DEFAULT_DELETE_LABEL)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowStyle {
    pub background: &'static str,
    pub text_decoration: &'static str,
}

impl RowStyle {
    pub fn to_css(&self) -> String {
        format!(
            "background-color: {}; text-decoration: {};",
            self.background, self.text_decoration
        )
    }
}

pub fn row_style(item: &WishItem) -> RowStyle {
    RowStyle {
        background: item.priority.color(),
        text_decoration: if item.completed { "line-through" } else { "none" },
    }
}
