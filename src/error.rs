//! Wishlist Errors
//!
//! None of these are fatal; callers log them and fall back.

/// Common result type for wishlist operations
pub type WishResult<T> = Result<T, WishError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WishError {
    /// Add was submitted with empty or whitespace-only text
    EmptyText,
    UnsupportedLanguage(String),
    UnknownPriority(String),
    /// Storage area refused a read or write
    Storage(String),
    /// Stored snapshot could not be encoded or decoded
    Snapshot(String),
}

impl std::fmt::Display for WishError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WishError::EmptyText => write!(f, "Wish text is empty"),
            WishError::UnsupportedLanguage(tag) => write!(f, "Unsupported language: {}", tag),
            WishError::UnknownPriority(value) => write!(f, "Unknown priority: {}", value),
            WishError::Storage(msg) => write!(f, "Storage error: {}", msg),
            WishError::Snapshot(msg) => write!(f, "Snapshot error: {}", msg),
        }
    }
}

impl std::error::Error for WishError {}

impl From<serde_json::Error> for WishError {
    fn from(err: serde_json::Error) -> Self {
        WishError::Snapshot(err.to_string())
    }
}
