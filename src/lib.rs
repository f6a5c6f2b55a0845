//! searchkit - Query Compiler and Autocomplete Tokenizer
//!
//! Client-side building blocks for a hosted full-text search index
//! that only matches whole tokens: a substring tokenizer that makes
//! prefix/infix autocomplete possible at indexing time, and a query
//! builder that assembles syntactically valid boolean query strings.
//!
//! # Architecture
//!
//! - **tokenizer**: word splitting and substring expansion for
//!   autocomplete fields
//! - **query**: boolean query-string assembly (builder, operator
//!   tables, quoting)
//! - **document**: typed field model for documents submitted to the
//!   index, including autocomplete-tokenized fields
//! - **batch**: fixed-page splitting of bulk put/delete batches
//! - **error**: error types and Result alias
//!
//! Everything here is pure and synchronous. Talking to the index
//! service (submission, retries, pagination cursors, ranking) is the
//! caller's concern; this crate only produces the strings and
//! payloads that service consumes.
//!
//! # Example
//!
//! ```
//! use searchkit::{Document, QueryBuilder};
//!
//! // Index side: tokenize a title so "est" can match "tests"
//! let doc = Document::new("doc-1")
//!     .add_tokenized("title", "tests", 3)
//!     .unwrap()
//!     .add_bool("published", true);
//!
//! // Search side: assemble the matching query
//! let query = QueryBuilder::new()
//!     .field_text("title", "est")
//!     .and()
//!     .is_true("published")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(query, "title:est AND published:\"1\"");
//! assert!(doc.text("title").unwrap().contains("est "));
//! ```

pub mod batch;
pub mod document;
pub mod error;
pub mod query;
pub mod tokenizer;

// Re-export commonly used types for convenience
pub use document::{Document, Field, FieldValue};
pub use error::{Result, SearchKitError};
pub use query::{quote, CombineOperator, FieldOperator, QueryBuilder};
pub use tokenizer::{split_words, tokenize};
