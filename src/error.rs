//! Error types and error handling for searchkit.
//!
//! Every failure in this crate is local and fail-fast: the tokenizer
//! and the query builder perform no I/O and never retry. Transient
//! errors from the index service belong to the caller's transport
//! layer, not here.

use thiserror::Error;

/// Result type alias for searchkit operations
pub type Result<T> = std::result::Result<T, SearchKitError>;

/// Main error type for searchkit
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchKitError {
    #[error("minimum token size must be at least 1, got {0}")]
    InvalidTokenSize(usize),

    #[error("unbalanced grouping: {depth} unclosed group(s) at build")]
    UnbalancedGrouping { depth: i32 },

    #[error("page limit must be at least 1")]
    InvalidPageLimit,
}

impl SearchKitError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error was caused by an invalid argument
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            SearchKitError::InvalidTokenSize(_) | SearchKitError::InvalidPageLimit
        )
    }

    /// Check if this error was caused by mis-sequenced builder calls
    pub fn is_misuse(&self) -> bool {
        matches!(self, SearchKitError::UnbalancedGrouping { .. })
    }
}
