//! Wishlist Models
//!
//! Data structures for wish items and the form draft.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::WishError;

/// Priority of a wish, serialized as "Low" / "Medium" / "High"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Label shown in the priority select
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low Priority",
            Priority::Medium => "Medium Priority",
            Priority::High => "High Priority",
        }
    }

    /// Row background color
    pub fn color(&self) -> &'static str {
        match self {
            Priority::High => "red",
            Priority::Medium => "yellow",
            Priority::Low => "lightgreen",
        }
    }
}

impl FromStr for Priority {
    type Err = WishError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Priority::Low),
            "Medium" => Ok(Priority::Medium),
            "High" => Ok(Priority::High),
            other => Err(WishError::UnknownPriority(other.to_string())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported speech locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SpeechLang {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "de-DE")]
    DeDe,
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "it-IT")]
    ItIt,
}

impl SpeechLang {
    pub const ALL: [SpeechLang; 4] = [
        SpeechLang::EnUs,
        SpeechLang::DeDe,
        SpeechLang::ZhCn,
        SpeechLang::ItIt,
    ];

    /// BCP 47 tag, as reported by speech voices
    pub fn tag(&self) -> &'static str {
        match self {
            SpeechLang::EnUs => "en-US",
            SpeechLang::DeDe => "de-DE",
            SpeechLang::ZhCn => "zh-CN",
            SpeechLang::ItIt => "it-IT",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SpeechLang::EnUs => "English (US)",
            SpeechLang::DeDe => "German (DE)",
            SpeechLang::ZhCn => "Chinese (中文)",
            SpeechLang::ItIt => "Italiano (IT)",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.tag() == tag)
    }
}

impl FromStr for SpeechLang {
    type Err = WishError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| WishError::UnsupportedLanguage(s.to_string()))
    }
}

impl fmt::Display for SpeechLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single wishlist entry (snapshot record)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishItem {
    pub id: u64,
    pub text: String,
    pub priority: Priority,
    pub completed: bool,
}

impl WishItem {
    pub fn new(id: u64, text: String, priority: Priority) -> Self {
        Self {
            id,
            text,
            priority,
            completed: false,
        }
    }

    /// Copy of this item with `completed` flipped
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// Transient form input state, never persisted
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormDraft {
    pub text: String,
    pub priority: Priority,
    pub language: SpeechLang,
}

impl FormDraft {
    pub fn with_language(language: SpeechLang) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }
}
