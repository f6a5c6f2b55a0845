//! Query-string assembly for the hosted search index.
//!
//! The index accepts a single boolean query string: `field:value`
//! clauses joined by `AND`/`OR` keywords, parenthesis grouping, and
//! double-quoted phrases. This module assembles such strings
//! incrementally while tracking group balance and whitespace so
//! callers never concatenate by hand.

mod builder;
mod operators;

pub use builder::{quote, QueryBuilder};
pub(crate) use builder::{FALSE_ATOM, TRUE_ATOM};
pub use operators::{CombineOperator, FieldOperator};
