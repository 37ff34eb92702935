use std::fmt;

use crate::{
    MobileChoiceData, MobileQuestionInfo, MobileResponseData, PageIds, Question, QuestionDisplay,
    QuestionError, QuestionId, Response, ResponseContext, ResponseId, ResponseKind, ResultRecord,
    Strings, SubmittedData,
};

/// Visibility of a length/precision setting in the question authoring form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSetting {
    /// The setting is not exposed for this question type.
    Hidden,
    /// The setting is editable by the survey author.
    Visible,
}

/// One branch another question can depend on, keyed `<question id>,<branch>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyOption {
    pub key: String,
    pub label: String,
}

impl DependencyOption {
    /// Create a dependency option.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// The host's accessor for a question's stored results.
///
/// Failures are erased to `anyhow::Error` so any host storage layer can
/// plug in; they propagate out of the mobile response builders as
/// [`QuestionError::Results`].
pub trait ResultsProvider {
    /// Fetch the stored result rows for a question within one response.
    fn results(
        &self,
        question: &Question,
        response_id: ResponseId,
    ) -> anyhow::Result<Vec<ResultRecord>>;
}

/// The base required check: a submission is invalid only when the question
/// is required and no non-empty value was submitted for its field.
///
/// Question types fall back to this when they have no format of their own
/// to enforce.
pub fn required_check(question: &Question, data: &SubmittedData) -> bool {
    !question.required() || data.answer_to(question).is_some_and(|v| !v.is_empty())
}

/// The contract every question type implements.
///
/// Implementations are stateless: all submitted and stored data arrives per
/// call, and page-scoped counters are passed in by reference. Default
/// methods supply the base contract; each question type overrides what it
/// specializes. Dispatch runs through a registry keyed by
/// [`crate::QuestionTypeId`] rather than inheritance.
pub trait QuestionType: fmt::Debug {
    /// The storage strategy answers to this question type bind to.
    fn response_kind(&self) -> ResponseKind;

    /// Short identifier of this question type, e.g. `"date"`.
    fn help_name(&self) -> &'static str;

    /// Template identifier for rendering the question's input widget.
    fn question_template(&self) -> &'static str;

    /// Template identifier for rendering a stored response.
    fn response_template(&self) -> &'static str;

    /// Build the display context for the question's input widget.
    ///
    /// `dependents` lists the questions whose visibility hangs off this
    /// one's answer; `blank` selects the non-interactive preview rendering.
    fn question_display(
        &self,
        question: &Question,
        data: &SubmittedData,
        dependents: &[QuestionId],
        blank: bool,
        strings: &dyn Strings,
        ids: &mut PageIds,
    ) -> QuestionDisplay;

    /// Build the display context for a stored response.
    fn response_display(
        &self,
        question: &Question,
        response: &Response,
        strings: &dyn Strings,
        ids: &mut PageIds,
    ) -> ResponseContext;

    /// Check a submission for a valid answer to this question.
    fn validate(&self, question: &Question, data: &SubmittedData) -> bool {
        required_check(question, data)
    }

    /// Whether other questions may conditionally depend on this one's
    /// answer.
    fn allows_dependents(&self) -> bool {
        false
    }

    /// Whether this question type supports feedback scoring.
    fn supports_feedback(&self) -> bool {
        false
    }

    /// Whether this question's settings make feedback scoring usable.
    fn valid_feedback(&self, _question: &Question) -> bool {
        false
    }

    /// The maximum feedback score, when feedback is usable.
    fn feedback_max_score(&self, question: &Question) -> Option<u32> {
        self.valid_feedback(question).then_some(1)
    }

    /// The answer branches other questions can depend on.
    fn dependency_options(
        &self,
        _question: &Question,
        _strings: &dyn Strings,
    ) -> Vec<DependencyOption> {
        Vec::new()
    }

    /// Visibility of the length setting in the authoring form.
    fn length_setting(&self) -> FieldSetting {
        FieldSetting::Visible
    }

    /// Visibility of the precision setting in the authoring form.
    fn precision_setting(&self) -> FieldSetting {
        FieldSetting::Visible
    }

    /// Whether this question type provides mobile support.
    fn supports_mobile(&self) -> bool {
        false
    }

    /// Build the mobile description of the question's shape.
    ///
    /// Invoking the base builder on a type without mobile support is a
    /// configuration error.
    fn mobile_question_data(
        &self,
        question: &Question,
        index: usize,
    ) -> Result<MobileQuestionInfo, QuestionError> {
        if !self.supports_mobile() {
            return Err(QuestionError::MobileUnsupported {
                help_name: self.help_name(),
            });
        }
        Ok(MobileQuestionInfo::base(question, index))
    }

    /// Build the question's mobile choice records.
    fn mobile_choice_data(&self, _question: &Question, _strings: &dyn Strings) -> MobileChoiceData {
        MobileChoiceData::default()
    }

    /// Build the mobile description of one learner's stored answer.
    ///
    /// The base builder marks the question answered when any results exist
    /// and records each result's value under the question's response key.
    fn mobile_response_data(
        &self,
        question: &Question,
        response_id: ResponseId,
        provider: &dyn ResultsProvider,
    ) -> Result<MobileResponseData, QuestionError> {
        let results = provider.results(question, response_id)?;
        let mut data = MobileResponseData::default();
        if !results.is_empty() {
            data.answered = true;
            for result in &results {
                data.responses
                    .insert(question.response_key(), result.value.clone());
            }
        }
        Ok(data)
    }
}
