use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Question, QuestionId};

/// Mobile-client description of a question's shape.
///
/// Built by [`MobileQuestionInfo::base`] and flagged per question type.
/// This is a transport shape for the JSON-serializing mobile API layer,
/// deliberately distinct from the template display contexts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MobileQuestionInfo {
    pub id: QuestionId,
    /// Numeric question type code.
    pub type_code: u32,
    /// One-based display position within the survey.
    pub index: usize,
    pub name: String,
    pub required: bool,
    /// The response key, `response_<type code>_<id>`.
    pub field_key: String,
    /// Set for date questions.
    pub is_date: bool,
    /// Set for yes/no questions.
    pub is_bool: bool,
}

impl MobileQuestionInfo {
    /// Build the base description shared by every question type. Type
    /// flags start unset; each question type raises its own.
    pub fn base(question: &Question, index: usize) -> Self {
        Self {
            id: question.id(),
            type_code: question.type_id().code(),
            index,
            name: question.name().to_string(),
            required: question.required(),
            field_key: question.response_key(),
            is_date: false,
            is_bool: false,
        }
    }
}

/// One synthetic choice record in the mobile transport's uniform shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MobileChoice {
    /// Position within the question's choice list.
    pub index: usize,
    /// The stored choice code: `y` / `n` for yes/no, `0` for the date
    /// placeholder record.
    pub choice_id: String,
    pub question_id: QuestionId,
    /// Preset value, only carried by a required yes/no question's Yes
    /// record.
    pub value: Option<String>,
    /// Localized label text, empty for placeholder records.
    pub content: String,
    pub is_bool: bool,
    /// Marks the default/first selection.
    pub first: bool,
}

/// A question's choice records plus the overall default response code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MobileChoiceData {
    pub choices: Vec<MobileChoice>,
    pub default_response: Option<String>,
}

/// One stored result row, as fetched by the host's results accessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// The stored choice code.
    pub choice: String,
    /// The stored value.
    pub value: String,
}

impl ResultRecord {
    /// Create a result row.
    pub fn new(choice: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            choice: choice.into(),
            value: value.into(),
        }
    }
}

/// Mobile-client description of one learner's stored answer to a question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MobileResponseData {
    /// Whether the question was answered at all.
    pub answered: bool,
    /// Selected choice slots, keyed by choice index.
    pub slots: BTreeMap<usize, String>,
    /// Stored values keyed by the `response_<type code>_<id>` convention.
    pub responses: BTreeMap<String, String>,
}
