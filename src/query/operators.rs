//! Operator tables for the index query language.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Keyword joining two clauses in a boolean query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombineOperator {
    And,
    Or,
}

impl CombineOperator {
    /// The literal keyword as it appears in the query string
    pub fn keyword(&self) -> &'static str {
        match self {
            CombineOperator::And => "AND",
            CombineOperator::Or => "OR",
        }
    }
}

impl fmt::Display for CombineOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Comparison symbol binding a field name to a value in a clause.
///
/// NOT is deliberately absent; the index's negation support is too
/// inconsistent across field types to expose here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldOperator {
    Equal,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl FieldOperator {
    /// The comparison symbol as it appears in the query string
    pub fn symbol(&self) -> &'static str {
        match self {
            FieldOperator::Equal => ":",
            FieldOperator::Less => "<",
            FieldOperator::LessOrEqual => "<=",
            FieldOperator::Greater => ">",
            FieldOperator::GreaterOrEqual => ">=",
        }
    }

    /// Render a full `field<symbol>value` clause
    pub(crate) fn combine(&self, field: &str, value: &str) -> String {
        format!("{field}{}{value}", self.symbol())
    }
}

impl fmt::Display for FieldOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_keywords() {
        assert_eq!(CombineOperator::And.to_string(), "AND");
        assert_eq!(CombineOperator::Or.to_string(), "OR");
    }

    #[test]
    fn test_field_symbols() {
        assert_eq!(FieldOperator::Equal.symbol(), ":");
        assert_eq!(FieldOperator::Less.symbol(), "<");
        assert_eq!(FieldOperator::LessOrEqual.symbol(), "<=");
        assert_eq!(FieldOperator::Greater.symbol(), ">");
        assert_eq!(FieldOperator::GreaterOrEqual.symbol(), ">=");
    }

    #[test]
    fn test_combine_clause() {
        assert_eq!(FieldOperator::Equal.combine("name", "\"bob\""), "name:\"bob\"");
        assert_eq!(FieldOperator::GreaterOrEqual.combine("score", "10"), "score>=10");
    }
}
