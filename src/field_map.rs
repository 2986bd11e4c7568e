//! Typed accessors over the fields of one record.
//!
//! A [`FieldMap`] holds the `Name: value` pairs produced by a record tokenizer,
//! in input order. Fields are *taken* rather than read: each successful take
//! marks the key consumed, and a consumed key behaves as if it were absent for
//! any later take. Once a document has been assembled, [`FieldMap::residual`]
//! lists exactly the fields nothing understood.
//!
//! Entries are never removed, so the original values stay available for
//! diagnostics while consumption is tracked separately.
//!
//! # Examples
//!
//! ```
//! use debsrc::FieldMap;
//!
//! let mut fields: FieldMap = [("Section", "games"), ("X-Custom", "1")]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(fields.take_mandatory("Section")?, "games");
//! assert!(fields.take_mandatory("Section").is_err());
//! assert_eq!(fields.take_optional("Homepage"), None);
//! assert_eq!(fields.residual().collect::<Vec<_>>(), vec!["X-Custom"]);
//! # Ok::<(), debsrc::TranscodeError>(())
//! ```

use crate::error::{Result, TranscodeError};
use indexmap::{IndexMap, IndexSet};

/// Field name to value mapping for a single record, with consumption tracking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    /// Field name -> value, preserves input order
    fields: IndexMap<String, String>,
    /// Keys taken or discarded so far
    consumed: IndexSet<String>,
}

impl FieldMap {
    /// Create an empty field map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any previous value under the same name.
    ///
    /// Re-inserting a consumed key makes it available to take again.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.consumed.shift_remove(&name);
        self.fields.insert(name, value.into());
    }

    /// Number of fields in the map, consumed or not
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the map holds no fields at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether `name` is present and has not been consumed yet
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.peek(name).is_some()
    }

    /// Look at an unconsumed value without consuming it
    #[must_use]
    pub fn peek(&self, name: &str) -> Option<&str> {
        if self.consumed.contains(name) {
            return None;
        }
        self.fields.get(name).map(String::as_str)
    }

    /// Take a field that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`TranscodeError::MissingField`] if the field is absent or has
    /// already been consumed.
    pub fn take_mandatory(&mut self, name: &str) -> Result<String> {
        self.take_optional(name)
            .ok_or_else(|| TranscodeError::MissingField(name.to_string()))
    }

    /// Take a field that may be absent.
    ///
    /// An absent field yields `None` rather than an error. A present but empty
    /// field yields `Some("")`; callers that treat empty as absent filter it.
    pub fn take_optional(&mut self, name: &str) -> Option<String> {
        let value = self.peek(name)?.to_string();
        self.consumed.insert(name.to_string());
        Some(value)
    }

    /// Like [`take_optional`](Self::take_optional), but an empty value is `None`.
    pub fn take_non_empty(&mut self, name: &str) -> Option<String> {
        self.take_optional(name).filter(|value| !value.is_empty())
    }

    /// Consume a field without using its value.
    ///
    /// Used for fields whose content reaches the document by another route
    /// (for example through a record accessor). Absent fields are ignored.
    pub fn discard(&mut self, name: &str) {
        if self.fields.contains_key(name) {
            self.consumed.insert(name.to_string());
        }
    }

    /// Iterate over all fields, consumed or not, in input order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Names of the fields that have not been consumed, in input order
    pub fn residual(&self) -> impl Iterator<Item = &str> {
        self.fields
            .keys()
            .filter(|name| !self.consumed.contains(name.as_str()))
            .map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FieldMap {
        [
            ("Directory", "pool/main/h/hello"),
            ("Homepage", ""),
            ("Vcs-Git", "https://salsa.debian.org/hello.git"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_take_mandatory_consumes() {
        let mut fields = sample();
        assert_eq!(fields.take_mandatory("Directory").unwrap(), "pool/main/h/hello");
        match fields.take_mandatory("Directory") {
            Err(TranscodeError::MissingField(name)) => assert_eq!(name, "Directory"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_take_optional_absent_is_none() {
        let mut fields = sample();
        assert_eq!(fields.take_optional("Original-Maintainer"), None);
        assert_eq!(fields.take_optional("Homepage"), Some(String::new()));
    }

    #[test]
    fn test_take_non_empty_filters_empty() {
        let mut fields = sample();
        assert_eq!(fields.take_non_empty("Homepage"), None);
        // Still consumed even though it was empty
        assert!(!fields.residual().any(|name| name == "Homepage"));
    }

    #[test]
    fn test_residual_in_input_order() {
        let mut fields = sample();
        fields.discard("Homepage");
        fields.discard("Not-There");
        assert_eq!(
            fields.residual().collect::<Vec<_>>(),
            vec!["Directory", "Vcs-Git"]
        );
        assert_eq!(fields.len(), 3);
    }

    #[test]
    fn test_reinsert_makes_key_available() {
        let mut fields = sample();
        fields.take_mandatory("Directory").unwrap();
        assert!(!fields.contains("Directory"));
        fields.insert("Directory", "pool/main/h/hello2");
        assert_eq!(fields.take_mandatory("Directory").unwrap(), "pool/main/h/hello2");
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let mut fields = sample();
        assert!(fields.take_optional("directory").is_none());
        assert!(fields.take_optional("Directory").is_some());
    }
}
