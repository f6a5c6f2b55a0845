//! Autocomplete substring tokenizer.
//!
//! Hosted full-text indexes match whole tokens only. To support
//! prefix and infix ("contains") matching, every admissible
//! substring of each word is materialized at indexing time and
//! stored as its own token. A later whole-token query for `est`
//! then hits a document whose title merely contains `tests`.
//!
//! The cost is index size on the order of O(len²) tokens per long
//! word, which is why the minimum token size is caller-controlled.
//!
//! # Example
//!
//! ```
//! use searchkit::tokenizer::tokenize;
//!
//! // Words at or below the minimum pass through unchanged
//! assert_eq!(tokenize("cat dog", 3).unwrap(), "cat dog ");
//!
//! // Longer words expand into every substring of length >= min_size
//! assert_eq!(tokenize("tests", 3).unwrap(), "tes test tests est ests sts ");
//! ```

use crate::error::{Result, SearchKitError};
use once_cell::sync::Lazy;
use regex::Regex;

// Word boundary: anything outside ASCII letters, digits, and the
// apostrophe separates words. Runs of separators collapse.
static WORD_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9a-zA-Z']+").unwrap());

/// Split a text into words on the autocomplete word-boundary policy.
///
/// Apostrophes are word-internal (`don't` is one word); all other
/// punctuation, whitespace, and symbols are separators. Empty words
/// are never produced.
///
/// # Example
///
/// ```
/// use searchkit::tokenizer::split_words;
///
/// assert_eq!(split_words("don't stop-me now!"), vec!["don't", "stop", "me", "now"]);
/// ```
pub fn split_words(text: &str) -> Vec<&str> {
    WORD_BOUNDARY.split(text).filter(|w| !w.is_empty()).collect()
}

/// Tokenize a text for autocomplete indexing.
///
/// Each word no longer than `min_size` is emitted as-is. Each longer
/// word emits every contiguous substring with length between
/// `min_size` and the word length, ordered by start offset and then
/// by length. All tokens are joined with single spaces, and the
/// output carries a trailing space after the final token; the index
/// treats it as insignificant whitespace and existing stored fields
/// depend on the exact form.
///
/// Pure and deterministic; safe to call concurrently.
///
/// # Errors
///
/// Returns [`SearchKitError::InvalidTokenSize`] if `min_size` is 0.
pub fn tokenize(text: &str, min_size: usize) -> Result<String> {
    if min_size == 0 {
        return Err(SearchKitError::InvalidTokenSize(min_size));
    }

    let mut tokens = String::new();
    for word in split_words(text) {
        // Word characters are all ASCII, so byte indexing is safe here.
        let len = word.len();
        if len > min_size {
            for start in 0..=len - min_size {
                for token_len in min_size..=len - start {
                    tokens.push_str(&word[start..start + token_len]);
                    tokens.push(' ');
                }
            }
        } else {
            tokens.push_str(word);
            tokens.push(' ');
        }
    }

    Ok(tokens)
}
