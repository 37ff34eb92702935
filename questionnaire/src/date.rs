use tracing::debug;

use questionnaire_types::{
    DateCheck, DateQuestionContext, DateResponseContext, DateStyle, FieldSetting,
    MobileChoice, MobileChoiceData, MobileQuestionInfo, PageIds, Question, QuestionContext,
    QuestionDisplay, QuestionError, QuestionId, QuestionType, Response, ResponseContext,
    ResponseKind, Strings, SubmittedData, check_date, required_check,
};

/// The date question type: a single date-valued answer.
///
/// Submitted dates are normalized for display when they check out; a bad
/// date stays in the context unparsed and raises a notification instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateQuestion;

impl QuestionType for DateQuestion {
    fn response_kind(&self) -> ResponseKind {
        ResponseKind::Date
    }

    fn help_name(&self) -> &'static str {
        "date"
    }

    fn question_template(&self) -> &'static str {
        "question_date"
    }

    fn response_template(&self) -> &'static str {
        "response_date"
    }

    fn question_display(
        &self,
        question: &Question,
        data: &SubmittedData,
        _dependents: &[QuestionId],
        _blank: bool,
        strings: &dyn Strings,
        _ids: &mut PageIds,
    ) -> QuestionDisplay {
        let mut notifications = Vec::new();
        let mut value = data.answer_to(question).unwrap_or("").to_string();
        if !value.is_empty() {
            match check_date(&value, DateStyle::Display) {
                DateCheck::Valid(normalized) => value = normalized,
                DateCheck::InvalidFormat => {
                    debug!(question = %question.id(), entered = %value, "date has wrong format");
                    notifications.push(strings.wrong_date_format(&value));
                }
                DateCheck::OutOfRange => {
                    debug!(question = %question.id(), entered = %value, "date out of range");
                    notifications.push(strings.wrong_date_range());
                }
            }
        }
        QuestionDisplay {
            context: QuestionContext::Date(DateQuestionContext {
                name: question.field_name(),
                value,
                suppress_enter_submit: true,
            }),
            notifications,
        }
    }

    fn response_display(
        &self,
        question: &Question,
        response: &Response,
        _strings: &dyn Strings,
        _ids: &mut PageIds,
    ) -> ResponseContext {
        // Stored values render verbatim, no reformatting.
        ResponseContext::Date(DateResponseContext {
            content: response
                .first_answer(question.id())
                .map(|answer| answer.value().to_string()),
        })
    }

    fn validate(&self, question: &Question, data: &SubmittedData) -> bool {
        match data.answer_to(question) {
            None => required_check(question, data),
            // An empty value is an absent answer; required-ness is enforced
            // by the engine's own required pass.
            Some("") => true,
            Some(value) => {
                let valid = check_date(value, DateStyle::Storage).is_valid();
                if !valid {
                    debug!(question = %question.id(), entered = %value, "date answer rejected");
                }
                valid
            }
        }
    }

    fn length_setting(&self) -> FieldSetting {
        FieldSetting::Hidden
    }

    fn precision_setting(&self) -> FieldSetting {
        FieldSetting::Hidden
    }

    fn supports_mobile(&self) -> bool {
        true
    }

    fn mobile_question_data(
        &self,
        question: &Question,
        index: usize,
    ) -> Result<MobileQuestionInfo, QuestionError> {
        let mut info = MobileQuestionInfo::base(question, index);
        info.is_date = true;
        Ok(info)
    }

    fn mobile_choice_data(&self, question: &Question, _strings: &dyn Strings) -> MobileChoiceData {
        // Date questions have no discrete choices; the single placeholder
        // record keeps the transport shape uniform.
        MobileChoiceData {
            choices: vec![MobileChoice {
                index: 0,
                choice_id: "0".to_string(),
                question_id: question.id(),
                value: None,
                content: String::new(),
                is_bool: false,
                first: false,
            }],
            default_response: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use questionnaire_types::{EnglishStrings, QuestionTypeId};

    fn date_question() -> Question {
        Question::new(3, QuestionTypeId::Date)
    }

    fn display(data: &SubmittedData) -> QuestionDisplay {
        let mut ids = PageIds::new();
        DateQuestion.question_display(&date_question(), data, &[], false, &EnglishStrings, &mut ids)
    }

    #[test]
    fn normalizes_valid_submitted_date() {
        let shown = display(&SubmittedData::new().with("q3", "1/2/2024"));
        let context = shown.context.as_date().unwrap();
        assert_eq!(context.name, "q3");
        assert_eq!(context.value, "01/02/2024");
        assert!(context.suppress_enter_submit);
        assert!(!shown.has_notifications());
    }

    #[test]
    fn wrong_format_keeps_raw_value_and_notifies() {
        let shown = display(&SubmittedData::new().with("q3", "soonish"));
        assert_eq!(shown.context.as_date().unwrap().value, "soonish");
        assert_eq!(shown.notifications.len(), 1);
        assert!(shown.notifications[0].contains("soonish"));
    }

    #[test]
    fn wrong_range_keeps_raw_value_and_notifies() {
        let shown = display(&SubmittedData::new().with("q3", "31/02/2024"));
        assert_eq!(shown.context.as_date().unwrap().value, "31/02/2024");
        assert_eq!(shown.notifications.len(), 1);
    }

    #[test]
    fn absent_value_renders_empty() {
        let shown = display(&SubmittedData::new());
        assert_eq!(shown.context.as_date().unwrap().value, "");
        assert!(!shown.has_notifications());
    }

    #[test]
    fn validate_accepts_valid_date() {
        let data = SubmittedData::new().with("q3", "29/02/2024");
        assert!(DateQuestion.validate(&date_question(), &data));
    }

    #[test]
    fn validate_rejects_malformed_and_out_of_range() {
        assert!(!DateQuestion.validate(&date_question(), &SubmittedData::new().with("q3", "soon")));
        assert!(
            !DateQuestion.validate(&date_question(), &SubmittedData::new().with("q3", "31/02/2024"))
        );
    }

    #[test]
    fn validate_accepts_empty_value() {
        let data = SubmittedData::new().with("q3", "");
        assert!(DateQuestion.validate(&date_question(), &data));
        assert!(DateQuestion.validate(&date_question().with_required(true), &data));
    }

    #[test]
    fn validate_missing_field_falls_back_to_required_check() {
        let data = SubmittedData::new();
        assert!(DateQuestion.validate(&date_question(), &data));
        assert!(!DateQuestion.validate(&date_question().with_required(true), &data));
    }

    #[test]
    fn response_display_is_verbatim() {
        let mut ids = PageIds::new();
        let response = Response::new().with_answer(QuestionId(3), "01/02/2024");
        let context = DateQuestion.response_display(
            &date_question(),
            &response,
            &EnglishStrings,
            &mut ids,
        );
        assert_eq!(
            context.as_date().unwrap().content.as_deref(),
            Some("01/02/2024")
        );

        let context =
            DateQuestion.response_display(&date_question(), &Response::new(), &EnglishStrings, &mut ids);
        assert_eq!(context.as_date().unwrap().content, None);
    }

    #[test]
    fn authoring_settings_are_hidden() {
        assert_eq!(DateQuestion.length_setting(), FieldSetting::Hidden);
        assert_eq!(DateQuestion.precision_setting(), FieldSetting::Hidden);
    }

    #[test]
    fn mobile_question_data_sets_date_flag() {
        let info = DateQuestion.mobile_question_data(&date_question(), 1).unwrap();
        assert!(info.is_date);
        assert!(!info.is_bool);
        assert_eq!(info.field_key, "response_9_3");
    }

    #[test]
    fn mobile_choice_data_is_a_single_placeholder() {
        let data = DateQuestion.mobile_choice_data(&date_question(), &EnglishStrings);
        assert_eq!(data.choices.len(), 1);
        let choice = &data.choices[0];
        assert_eq!(choice.choice_id, "0");
        assert_eq!(choice.content, "");
        assert_eq!(choice.value, None);
        assert!(!choice.is_bool);
        assert_eq!(data.default_response, None);
    }
}
