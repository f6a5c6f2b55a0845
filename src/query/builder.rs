//! Incremental query-string builder.
//!
//! Assembles a syntactically valid boolean query for the index,
//! tracking open-group depth and token spacing so callers chain
//! composition calls instead of concatenating strings. The builder
//! is consumed by [`QueryBuilder::build`], which is the single
//! validation point: a finished expression must have every opened
//! group closed.
//!
//! # Example
//!
//! ```
//! use searchkit::query::{CombineOperator, QueryBuilder};
//!
//! let query = QueryBuilder::new()
//!     .field_text("author", "jane doe")
//!     .and()
//!     .field_texts_with("status", CombineOperator::Or, &["open", "triaged"])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(query, "author:\"jane doe\" AND (status:\"open\" OR status:\"triaged\")");
//! ```

use crate::error::{Result, SearchKitError};
use crate::query::operators::{CombineOperator, FieldOperator};

// Boolean atom encoding shared with the document field model; the
// index has no native boolean type.
pub(crate) const TRUE_ATOM: &str = "1";
pub(crate) const FALSE_ATOM: &str = "0";

/// Quote a value for use in a query clause, if necessary.
///
/// Values without spaces pass through unchanged. Values with spaces
/// are wrapped in double quotes, with the leading and trailing
/// character checked independently so half-quoted input only gains
/// the missing quote and fully quoted input is left alone.
///
/// # Example
///
/// ```
/// use searchkit::query::quote;
///
/// assert_eq!(quote("single"), "single");
/// assert_eq!(quote("hello world"), "\"hello world\"");
/// assert_eq!(quote("\"hello world\""), "\"hello world\"");
/// ```
pub fn quote(text: &str) -> String {
    if !text.contains(' ') {
        return text.to_string();
    }

    quote_always(text)
}

// Wrap in double quotes regardless of content, still checking each
// end independently so already-quoted input gains nothing. The
// multi-value composition paths quote every value this way; only
// quote() makes it conditional on an internal space.
fn quote_always(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    if !text.starts_with('"') {
        quoted.push('"');
    }
    quoted.push_str(text);
    if !text.ends_with('"') {
        quoted.push('"');
    }
    quoted
}

/// Stateful assembler for one boolean query expression.
///
/// A builder is a private, sequentially built value; callers needing
/// two independent expressions construct two builders. All
/// composition methods move the builder, and [`build`](Self::build)
/// consumes it, so an already-built expression can never be mutated.
#[derive(Debug, Default, Clone)]
pub struct QueryBuilder {
    buffer: String,
    depth: i32,
}

impl QueryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    // Whitespace policy: separate the next token from the previous
    // one unless the buffer is empty or ends on a group opening.
    fn pad(&mut self) {
        if let Some(last) = self.buffer.chars().last() {
            if last != ' ' && last != '(' {
                self.buffer.push(' ');
            }
        }
    }

    fn push_keyword(&mut self, operator: CombineOperator) {
        self.pad();
        self.buffer.push_str(operator.keyword());
    }

    /// Append the `AND` keyword
    pub fn and(mut self) -> Self {
        self.push_keyword(CombineOperator::And);
        self
    }

    /// Append the `OR` keyword
    pub fn or(mut self) -> Self {
        self.push_keyword(CombineOperator::Or);
        self
    }

    /// Append a clause matching documents where `field` is true
    pub fn is_true(mut self, field: &str) -> Self {
        self.pad();
        self.buffer
            .push_str(&FieldOperator::Equal.combine(field, &format!("\"{TRUE_ATOM}\"")));
        self
    }

    /// Append a clause matching documents where `field` is false
    pub fn is_false(mut self, field: &str) -> Self {
        self.pad();
        self.buffer
            .push_str(&FieldOperator::Equal.combine(field, &format!("\"{FALSE_ATOM}\"")));
        self
    }

    /// Append a boolean clause for `field`, dispatching on `value`
    pub fn boolean(self, field: &str, value: bool) -> Self {
        if value {
            self.is_true(field)
        } else {
            self.is_false(field)
        }
    }

    /// Append free (unfielded) text verbatim.
    ///
    /// The text is not escaped or quoted: query-syntax
    /// metacharacters (`:`, `(`, `)`, quotes) pass straight into the
    /// expression. Only feed this caller-controlled input.
    pub fn text(mut self, value: &str) -> Self {
        self.pad();
        self.buffer.push_str(value);
        self
    }

    /// Append a `field:value` clause, quoting the value if needed
    pub fn field_text(mut self, field: &str, value: &str) -> Self {
        self.pad();
        self.buffer
            .push_str(&FieldOperator::Equal.combine(field, &quote(value)));
        self
    }

    /// Append a comparison clause with an explicit operator
    pub fn compare(mut self, field: &str, operator: FieldOperator, value: &str) -> Self {
        self.pad();
        self.buffer.push_str(&operator.combine(field, &quote(value)));
        self
    }

    /// Search one field for any of several values (OR semantics).
    ///
    /// Shorthand for [`field_texts_with`](Self::field_texts_with)
    /// with [`CombineOperator::Or`].
    pub fn field_texts<S: AsRef<str>>(self, field: &str, values: &[S]) -> Self {
        self.field_texts_with(field, CombineOperator::Or, values)
    }

    /// Search one field for several values joined by `operator`.
    ///
    /// Every value is quoted, space or not. More than one value
    /// wraps the whole clause in a parenthesis pair so precedence
    /// stays unambiguous when embedded in a larger expression;
    /// exactly one value appends a bare clause; an empty slice
    /// appends nothing.
    pub fn field_texts_with<S: AsRef<str>>(
        mut self,
        field: &str,
        operator: CombineOperator,
        values: &[S],
    ) -> Self {
        if values.is_empty() {
            return self;
        }

        let grouped = values.len() > 1;
        if grouped {
            self = self.push_group();
        }

        for (i, value) in values.iter().enumerate() {
            if i != 0 {
                self.push_keyword(operator);
            }
            self = self.field_text(field, &quote_always(value.as_ref()));
        }

        if grouped {
            self = self.pop_group();
        }
        self
    }

    /// Search several fields for the same value, joined by `operator`.
    ///
    /// The value is quoted once up front, space or not. Grouping
    /// follows the same rule as
    /// [`field_texts_with`](Self::field_texts_with): a parenthesis
    /// pair only when more than one field.
    pub fn text_in_fields<S: AsRef<str>>(
        mut self,
        value: &str,
        operator: CombineOperator,
        fields: &[S],
    ) -> Self {
        if fields.is_empty() {
            return self;
        }

        // Quoting checks each end independently, so re-quoting in
        // field_text is a no-op.
        let quoted = quote_always(value);

        let grouped = fields.len() > 1;
        if grouped {
            self = self.push_group();
        }

        for (i, field) in fields.iter().enumerate() {
            if i != 0 {
                self.push_keyword(operator);
            }
            self = self.field_text(field.as_ref(), &quoted);
        }

        if grouped {
            self = self.pop_group();
        }
        self
    }

    /// Open a parenthesis group
    pub fn push_group(mut self) -> Self {
        self.pad();
        self.buffer.push('(');
        self.depth += 1;
        self
    }

    /// Close a parenthesis group.
    ///
    /// Closing more groups than were opened is not prevented here;
    /// the resulting negative depth fails [`build`](Self::build).
    pub fn pop_group(mut self) -> Self {
        self.buffer.push(')');
        self.depth -= 1;
        self
    }

    /// Number of currently open groups.
    ///
    /// Useful for asserting balance mid-construction; `build` checks
    /// it terminally either way.
    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// Finalize the expression, consuming the builder.
    ///
    /// # Errors
    ///
    /// Returns [`SearchKitError::UnbalancedGrouping`] if any opened
    /// group remains unclosed (or a group was over-closed). The
    /// accumulated buffer is discarded; malformed query syntax is
    /// never emitted.
    pub fn build(self) -> Result<String> {
        if self.depth != 0 {
            return Err(SearchKitError::UnbalancedGrouping { depth: self.depth });
        }
        Ok(self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder_builds_empty_string() {
        assert_eq!(QueryBuilder::new().build().unwrap(), "");
    }

    #[test]
    fn test_first_token_gets_no_leading_space() {
        let query = QueryBuilder::new().and().text("foo").build().unwrap();
        assert_eq!(query, "AND foo");
    }

    #[test]
    fn test_tokens_separated_by_single_space() {
        let query = QueryBuilder::new()
            .text("alpha")
            .and()
            .text("beta")
            .build()
            .unwrap();
        assert_eq!(query, "alpha AND beta");
    }

    #[test]
    fn test_no_space_after_group_open() {
        let query = QueryBuilder::new()
            .push_group()
            .text("inner")
            .pop_group()
            .build()
            .unwrap();
        assert_eq!(query, "(inner)");
    }

    #[test]
    fn test_is_true_clause() {
        let query = QueryBuilder::new().is_true("active").build().unwrap();
        assert_eq!(query, "active:\"1\"");
    }

    #[test]
    fn test_is_false_clause() {
        let query = QueryBuilder::new().is_false("active").build().unwrap();
        assert_eq!(query, "active:\"0\"");
    }

    #[test]
    fn test_boolean_dispatch() {
        assert_eq!(
            QueryBuilder::new().boolean("done", true).build().unwrap(),
            "done:\"1\""
        );
        assert_eq!(
            QueryBuilder::new().boolean("done", false).build().unwrap(),
            "done:\"0\""
        );
    }

    #[test]
    fn test_field_text_quotes_spaced_value() {
        let query = QueryBuilder::new()
            .field_text("title", "space opera")
            .build()
            .unwrap();
        assert_eq!(query, "title:\"space opera\"");
    }

    #[test]
    fn test_field_text_leaves_single_word_unquoted() {
        let query = QueryBuilder::new().field_text("title", "opera").build().unwrap();
        assert_eq!(query, "title:opera");
    }

    #[test]
    fn test_compare_operators() {
        let query = QueryBuilder::new()
            .compare("score", FieldOperator::GreaterOrEqual, "10")
            .and()
            .compare("score", FieldOperator::Less, "100")
            .build()
            .unwrap();
        assert_eq!(query, "score>=10 AND score<100");
    }

    #[test]
    fn test_field_texts_multi_value_grouped() {
        let query = QueryBuilder::new()
            .field_texts_with("status", CombineOperator::Or, &["a", "b"])
            .build()
            .unwrap();
        assert_eq!(query, "(status:\"a\" OR status:\"b\")");
    }

    #[test]
    fn test_field_texts_single_value_ungrouped() {
        let query = QueryBuilder::new().field_texts("status", &["a"]).build().unwrap();
        assert_eq!(query, "status:\"a\"");
    }

    #[test]
    fn test_field_texts_empty_is_noop() {
        let query = QueryBuilder::new()
            .text("before")
            .field_texts::<&str>("status", &[])
            .build()
            .unwrap();
        assert_eq!(query, "before");
    }

    #[test]
    fn test_field_texts_quotes_single_word_values() {
        // Multi-value clauses quote every value even without spaces,
        // unlike the conditional quoting of field_text
        let query = QueryBuilder::new()
            .field_texts_with("status", CombineOperator::Or, &["a", "b"])
            .build()
            .unwrap();
        assert_eq!(query, "(status:\"a\" OR status:\"b\")");

        let single = QueryBuilder::new().field_texts("status", &["a"]).build().unwrap();
        assert_eq!(single, "status:\"a\"");
    }

    #[test]
    fn test_field_texts_does_not_double_quote() {
        let query = QueryBuilder::new()
            .field_texts_with("status", CombineOperator::Or, &["\"a\"", "b"])
            .build()
            .unwrap();
        assert_eq!(query, "(status:\"a\" OR status:\"b\")");
    }

    #[test]
    fn test_field_texts_defaults_to_or() {
        let query = QueryBuilder::new()
            .field_texts("status", &["a", "b"])
            .build()
            .unwrap();
        assert_eq!(query, "(status:\"a\" OR status:\"b\")");
    }

    #[test]
    fn test_text_in_fields_multi_field() {
        let query = QueryBuilder::new()
            .text_in_fields("bob", CombineOperator::Or, &["author", "editor"])
            .build()
            .unwrap();
        assert_eq!(query, "(author:\"bob\" OR editor:\"bob\")");
    }

    #[test]
    fn test_text_in_fields_single_field() {
        let query = QueryBuilder::new()
            .text_in_fields("bob", CombineOperator::And, &["author"])
            .build()
            .unwrap();
        assert_eq!(query, "author:\"bob\"");
    }

    #[test]
    fn test_text_in_fields_empty_is_noop() {
        let query = QueryBuilder::new()
            .text_in_fields::<&str>("bob", CombineOperator::Or, &[])
            .build()
            .unwrap();
        assert_eq!(query, "");
    }

    #[test]
    fn test_text_in_fields_quotes_once() {
        let query = QueryBuilder::new()
            .text_in_fields("space opera", CombineOperator::Or, &["title", "subtitle"])
            .build()
            .unwrap();
        assert_eq!(query, "(title:\"space opera\" OR subtitle:\"space opera\")");
    }

    #[test]
    fn test_unbalanced_open_group_fails_build() {
        let err = QueryBuilder::new().push_group().text("x").build().unwrap_err();
        assert_eq!(err, SearchKitError::UnbalancedGrouping { depth: 1 });
    }

    #[test]
    fn test_over_closed_group_fails_build() {
        let err = QueryBuilder::new().text("x").pop_group().build().unwrap_err();
        assert_eq!(err, SearchKitError::UnbalancedGrouping { depth: -1 });
    }

    #[test]
    fn test_nested_groups_balance() {
        let query = QueryBuilder::new()
            .push_group()
            .push_group()
            .text("deep")
            .pop_group()
            .pop_group()
            .build()
            .unwrap();
        assert_eq!(query, "((deep))");
    }

    #[test]
    fn test_depth_inspector() {
        let builder = QueryBuilder::new().push_group().push_group().pop_group();
        assert_eq!(builder.depth(), 1);
        assert_eq!(builder.pop_group().depth(), 0);
    }

    #[test]
    fn test_free_text_is_not_escaped() {
        // Deliberate: the caller owns query-syntax hygiene for text()
        let query = QueryBuilder::new().text("a:b (c)").build().unwrap();
        assert_eq!(query, "a:b (c)");
    }

    #[test]
    fn test_quote_plain_word() {
        assert_eq!(quote("single"), "single");
    }

    #[test]
    fn test_quote_spaced_phrase() {
        assert_eq!(quote("hello world"), "\"hello world\"");
    }

    #[test]
    fn test_quote_already_quoted() {
        assert_eq!(quote("\"already quoted\""), "\"already quoted\"");
    }

    #[test]
    fn test_quote_repairs_missing_trailing_quote() {
        assert_eq!(quote("\"half quoted"), "\"half quoted\"");
    }

    #[test]
    fn test_quote_repairs_missing_leading_quote() {
        assert_eq!(quote("half quoted\""), "\"half quoted\"");
    }

    #[test]
    fn test_quote_no_space_never_quoted() {
        // Metacharacters without spaces stay untouched
        assert_eq!(quote("a:b"), "a:b");
    }

    #[test]
    fn test_mixed_expression() {
        let query = QueryBuilder::new()
            .is_true("published")
            .and()
            .push_group()
            .field_text("author", "jane doe")
            .or()
            .field_text("editor", "jane doe")
            .pop_group()
            .build()
            .unwrap();
        assert_eq!(
            query,
            "published:\"1\" AND (author:\"jane doe\" OR editor:\"jane doe\")"
        );
    }
}
