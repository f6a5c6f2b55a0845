//! Fixed-page batching for bulk index operations.
//!
//! The index service caps how many documents one put or delete call
//! may carry. Callers hand a full batch to [`pages`] and submit each
//! returned slice as its own call; retry of individual calls stays
//! with the caller's transport layer.

use crate::error::{Result, SearchKitError};
use tracing::debug;

/// Maximum number of documents per put/delete call
pub const PAGE_LIMIT: usize = 200;

/// Split a batch into pages of at most [`PAGE_LIMIT`] items.
///
/// Empty input yields no pages.
pub fn pages<T>(items: &[T]) -> impl Iterator<Item = &[T]> {
    debug!(
        total = items.len(),
        pages = items.len().div_ceil(PAGE_LIMIT),
        "paging batch"
    );
    items.chunks(PAGE_LIMIT)
}

/// Split a batch into pages of at most `limit` items.
///
/// # Errors
///
/// Returns [`SearchKitError::InvalidPageLimit`] if `limit` is 0.
pub fn pages_with_limit<T>(items: &[T], limit: usize) -> Result<impl Iterator<Item = &[T]>> {
    if limit == 0 {
        return Err(SearchKitError::InvalidPageLimit);
    }
    Ok(items.chunks(limit))
}
