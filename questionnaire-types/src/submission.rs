use std::collections::HashMap;

use crate::Question;

/// The field values of one form submission.
///
/// Keys follow the survey engine's field naming: `q<id>` for a question's
/// primary field. A submission is created fresh per render/validate call
/// and discarded after use.
#[derive(Debug, Clone, Default)]
pub struct SubmittedData {
    values: HashMap<String, String>,
}

impl SubmittedData {
    /// Create an empty submission.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    /// Insert a field value, builder style.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    /// Get a field value.
    pub fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Check if a field was submitted.
    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Get the value submitted for a question's primary field.
    pub fn answer_to(&self, question: &Question) -> Option<&str> {
        self.value(&question.field_name())
    }

    /// Get the number of submitted fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing was submitted.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over all field-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
