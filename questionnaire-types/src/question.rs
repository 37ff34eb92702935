use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a question within a survey.
///
/// The primary form field for a question is named after its id, e.g. the
/// question with id 7 reads and writes the field `q7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionId(pub u32);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for QuestionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// The type of a question, keying dispatch through the type registry.
///
/// The numeric codes are fixed by the survey engine's type table and appear
/// in the mobile response key convention `response_<code>_<question id>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionTypeId {
    /// A single boolean-valued answer.
    YesNo,
    /// A single date-valued answer.
    Date,
}

impl QuestionTypeId {
    /// The numeric type code used in mobile response keys.
    pub fn code(self) -> u32 {
        match self {
            Self::YesNo => 1,
            Self::Date => 9,
        }
    }
}

impl fmt::Display for QuestionTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::YesNo => write!(f, "yesno"),
            Self::Date => write!(f, "date"),
        }
    }
}

/// The storage strategy an answer to a question binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    /// Stored as a boolean choice (`y` / `n`).
    Boolean,
    /// Stored as a date string.
    Date,
}

/// A single question: identity and configuration, no response data.
///
/// Questions own no answers. Every display, validation, and mobile-data
/// operation receives the submitted or stored data per call.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    id: QuestionId,
    name: String,
    required: bool,
    type_id: QuestionTypeId,
}

impl Question {
    /// Create a new question with an empty name, not required.
    pub fn new(id: impl Into<QuestionId>, type_id: QuestionTypeId) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            required: false,
            type_id,
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Mark the question as required.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Get the question id.
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Get the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether an answer to this question is mandatory.
    pub fn required(&self) -> bool {
        self.required
    }

    /// Get the question type id.
    pub fn type_id(&self) -> QuestionTypeId {
        self.type_id
    }

    /// The primary form field name, `q<id>`.
    pub fn field_name(&self) -> String {
        format!("q{}", self.id)
    }

    /// The mobile response key, `response_<type code>_<id>`.
    pub fn response_key(&self) -> String {
        format!("response_{}_{}", self.type_id.code(), self.id)
    }
}
