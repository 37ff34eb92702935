use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::QuestionId;

/// Identifier of a stored response (one learner's completed attempt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResponseId(pub u64);

impl fmt::Display for ResponseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ResponseId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A yes/no answer code.
///
/// The wire codes are exactly `y` and `n`; any other value counts as an
/// absence of answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// Parse an answer code. Anything but `y` or `n` is no answer.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "y" => Some(Self::Yes),
            "n" => Some(Self::No),
            _ => None,
        }
    }

    /// The wire code for this answer.
    pub fn code(self) -> &'static str {
        match self {
            Self::Yes => "y",
            Self::No => "n",
        }
    }
}

/// A single stored answer value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answer {
    value: String,
}

impl Answer {
    /// Create an answer holding the given value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Get the raw stored value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Interpret the value as a yes/no answer code.
    pub fn yes_no(&self) -> Option<YesNo> {
        YesNo::from_code(&self.value)
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// The stored answers of one response, grouped per question.
#[derive(Debug, Clone, Default)]
pub struct Response {
    answers: HashMap<QuestionId, Vec<Answer>>,
}

impl Response {
    /// Create an empty response.
    pub fn new() -> Self {
        Self {
            answers: HashMap::new(),
        }
    }

    /// Append an answer for a question.
    pub fn add_answer(&mut self, question: impl Into<QuestionId>, answer: impl Into<Answer>) {
        self.answers
            .entry(question.into())
            .or_default()
            .push(answer.into());
    }

    /// Append an answer, builder style.
    pub fn with_answer(mut self, question: impl Into<QuestionId>, answer: impl Into<Answer>) -> Self {
        self.add_answer(question, answer);
        self
    }

    /// All answers stored for a question, empty if unanswered.
    pub fn answers_to(&self, question: QuestionId) -> &[Answer] {
        self.answers.get(&question).map_or(&[], Vec::as_slice)
    }

    /// The first stored answer for a question, if any.
    pub fn first_answer(&self, question: QuestionId) -> Option<&Answer> {
        self.answers_to(question).first()
    }

    /// Check whether any answer is stored for a question.
    pub fn has_answer(&self, question: QuestionId) -> bool {
        !self.answers_to(question).is_empty()
    }
}
