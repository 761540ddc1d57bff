use std::collections::HashMap;
use std::fmt;

/// Reserved key for whole-form and network errors.
pub const GENERAL_FIELD: &str = "general";

/// A mapping of field names to their current error message.
///
/// Each field holds at most one message. During a validation pass the first
/// failing rule for a field wins; `add` preserves that by refusing to
/// overwrite an existing entry. Submission-time errors use `set`, which does
/// overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: HashMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field unless one is already present.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.entries
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    /// Record an error for a field, replacing any existing one.
    pub fn set(&mut self, field: &str, message: impl Into<String>) {
        self.entries.insert(field.to_string(), message.into());
    }

    pub fn set_general(&mut self, message: impl Into<String>) {
        self.set(GENERAL_FIELD, message);
    }

    /// Remove a single field's error, if any. Used when the user edits that
    /// field before the next validation pass.
    pub fn clear(&mut self, field: &str) {
        self.entries.remove(field);
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(String::as_str)
    }

    pub fn general(&self) -> Option<&str> {
        self.get(GENERAL_FIELD)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }

    /// Get a comma-separated list of all error messages.
    pub fn to_string_list(&self) -> String {
        self.entries
            .values()
            .cloned()
            .collect::<Vec<String>>()
            .join(", ")
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_list())
    }
}
