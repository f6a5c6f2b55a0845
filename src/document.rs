//! Search-document field model.
//!
//! Documents submitted to the index are flat bags of named, typed
//! fields. A name may repeat; readers coerce by trying the caller's
//! acceptable types in order, which is why the getters here walk
//! fallback chains instead of demanding one exact type.
//!
//! Booleans have no native field type in the index and are encoded
//! as atom `"1"` / `"0"`, the same literals the query builder's
//! `is_true` / `is_false` clauses match against.

use crate::error::Result;
use crate::query::{FALSE_ATOM, TRUE_ATOM};
use crate::tokenizer::tokenize;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default minimum token length for autocomplete fields
const AUTOCOMPLETE_MIN_SIZE: usize = 1;

/// A typed field value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    /// Tokenized full text
    Text(String),
    /// Indivisible exact-match string
    Atom(String),
    /// HTML content, markup stripped by the index
    Html(String),
    /// Numeric value
    Number(f64),
    /// Timestamp
    Date(DateTime<Utc>),
    /// Geographic point
    Geo { lat: f64, lon: f64 },
}

impl FieldValue {
    /// The textual content of a text-like value, if any.
    ///
    /// Text, atom, and HTML values all qualify; this is the fallback
    /// chain readers use when they just want "the text".
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) | FieldValue::Atom(s) | FieldValue::Html(s) => Some(s),
            _ => None,
        }
    }
}

/// One named field of a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: FieldValue,
}

impl Field {
    /// Create a plain text field
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Text(text.into()),
        }
    }

    /// Create an atom (exact-match) field
    pub fn atom(name: impl Into<String>, atom: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Atom(atom.into()),
        }
    }

    /// Create an HTML field
    pub fn html(name: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Html(html.into()),
        }
    }

    /// Create a number field
    pub fn number(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Number(value),
        }
    }

    /// Create a date field
    pub fn date(name: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Date(date),
        }
    }

    /// Create a geo-point field
    pub fn geo(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Geo { lat, lon },
        }
    }

    /// Create a boolean field, encoded as atom `"1"` / `"0"`
    pub fn boolean(name: impl Into<String>, value: bool) -> Self {
        Self::atom(name, if value { TRUE_ATOM } else { FALSE_ATOM })
    }

    /// Create a text field whose content is tokenized for
    /// autocomplete, with an explicit minimum token length.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SearchKitError::InvalidTokenSize`] if
    /// `min_size` is 0.
    pub fn tokenized(
        name: impl Into<String>,
        text: &str,
        min_size: usize,
    ) -> Result<Self> {
        Ok(Self::text(name, tokenize(text, min_size)?))
    }

    /// Create an autocomplete text field at the default minimum
    /// token length of 1 (every substring is indexed).
    pub fn autocomplete(name: impl Into<String>, text: &str) -> Self {
        let tokens = tokenize(text, AUTOCOMPLETE_MIN_SIZE).expect("min_size 1 is always valid");
        Self::text(name, tokens)
    }
}

/// A search document: an id plus its fields, in insertion order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub fields: Vec<Field>,
}

impl Document {
    /// Create an empty document with the given id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Vec::new(),
        }
    }

    /// Add an already-constructed field
    pub fn add_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a plain text field
    pub fn add_text(self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.add_field(Field::text(name, text))
    }

    /// Add an atom field
    pub fn add_atom(self, name: impl Into<String>, atom: impl Into<String>) -> Self {
        self.add_field(Field::atom(name, atom))
    }

    /// Add an HTML field
    pub fn add_html(self, name: impl Into<String>, html: impl Into<String>) -> Self {
        self.add_field(Field::html(name, html))
    }

    /// Add a number field
    pub fn add_number(self, name: impl Into<String>, value: f64) -> Self {
        self.add_field(Field::number(name, value))
    }

    /// Add a date field
    pub fn add_date(self, name: impl Into<String>, date: DateTime<Utc>) -> Self {
        self.add_field(Field::date(name, date))
    }

    /// Add a geo-point field
    pub fn add_geo(self, name: impl Into<String>, lat: f64, lon: f64) -> Self {
        self.add_field(Field::geo(name, lat, lon))
    }

    /// Add a boolean field (atom `"1"` / `"0"`)
    pub fn add_bool(self, name: impl Into<String>, value: bool) -> Self {
        self.add_field(Field::boolean(name, value))
    }

    /// Add an autocomplete-tokenized text field at the default
    /// minimum token length
    pub fn add_autocomplete(self, name: impl Into<String>, text: &str) -> Self {
        self.add_field(Field::autocomplete(name, text))
    }

    /// Add an autocomplete-tokenized text field with an explicit
    /// minimum token length.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SearchKitError::InvalidTokenSize`] if
    /// `min_size` is 0.
    pub fn add_tokenized(
        self,
        name: impl Into<String>,
        text: &str,
        min_size: usize,
    ) -> Result<Self> {
        Ok(self.add_field(Field::tokenized(name, text, min_size)?))
    }

    /// All values stored under `name`, in insertion order
    pub fn values(&self, name: &str) -> Vec<&FieldValue> {
        self.fields
            .iter()
            .filter(|f| f.name == name)
            .map(|f| &f.value)
            .collect()
    }

    /// First text-like value (text, atom, or HTML) under `name`
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .filter(|f| f.name == name)
            .find_map(|f| f.value.as_text())
    }

    /// All text-like values under `name`
    pub fn texts(&self, name: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.name == name)
            .filter_map(|f| f.value.as_text())
            .collect()
    }

    /// First numeric value under `name`
    pub fn number(&self, name: &str) -> Option<f64> {
        self.fields.iter().filter(|f| f.name == name).find_map(|f| match f.value {
            FieldValue::Number(n) => Some(n),
            _ => None,
        })
    }

    /// First date value under `name`
    pub fn date(&self, name: &str) -> Option<DateTime<Utc>> {
        self.fields.iter().filter(|f| f.name == name).find_map(|f| match f.value {
            FieldValue::Date(d) => Some(d),
            _ => None,
        })
    }

    /// Boolean read of an atom field: `"1"` is true, anything else
    /// (including a missing field) is false
    pub fn flag(&self, name: &str) -> bool {
        self.fields
            .iter()
            .filter(|f| f.name == name)
            .any(|f| matches!(&f.value, FieldValue::Atom(a) if a == TRUE_ATOM))
    }

    /// Copy of this document without the named fields.
    ///
    /// Used when rebuilding a stored document in place: carry every
    /// field over except the ones about to be re-derived.
    pub fn reindexed(&self, skip_fields: &[&str]) -> Document {
        Document {
            id: self.id.clone(),
            fields: self
                .fields
                .iter()
                .filter(|f| !skip_fields.contains(&f.name.as_str()))
                .cloned()
                .collect(),
        }
    }
}
