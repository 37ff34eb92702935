use tracing::debug;

use questionnaire_types::{
    ChoiceOption, DependencyOption, FieldSetting, MobileChoice, MobileChoiceData,
    MobileQuestionInfo, MobileResponseData, PageIds, Question, QuestionContext, QuestionDisplay,
    QuestionError, QuestionId, QuestionType, Response, ResponseContext, ResponseId, ResponseKind,
    ResultsProvider, Strings, SubmittedData, YesNo, YesNoQuestionContext, YesNoResponseContext,
};

/// The yes/no question type: a single boolean-valued answer, with an
/// optional no-answer tri-state and feedback scoring.
#[derive(Debug, Clone, Copy, Default)]
pub struct YesNoQuestion;

impl QuestionType for YesNoQuestion {
    fn response_kind(&self) -> ResponseKind {
        ResponseKind::Boolean
    }

    fn help_name(&self) -> &'static str {
        "yesno"
    }

    fn question_template(&self) -> &'static str {
        "question_yesno"
    }

    fn response_template(&self) -> &'static str {
        "response_yesno"
    }

    fn allows_dependents(&self) -> bool {
        true
    }

    fn supports_feedback(&self) -> bool {
        true
    }

    // Feedback scoring needs a forced choice.
    fn valid_feedback(&self, question: &Question) -> bool {
        question.required()
    }

    fn dependency_options(
        &self,
        question: &Question,
        strings: &dyn Strings,
    ) -> Vec<DependencyOption> {
        if question.name().is_empty() {
            return Vec::new();
        }
        vec![
            DependencyOption::new(
                format!("{},0", question.id()),
                format!("{}->{}", question.name(), strings.yes()),
            ),
            DependencyOption::new(
                format!("{},1", question.id()),
                format!("{}->{}", question.name(), strings.no()),
            ),
        ]
    }

    fn question_display(
        &self,
        question: &Question,
        data: &SubmittedData,
        _dependents: &[QuestionId],
        blank: bool,
        strings: &dyn Strings,
        ids: &mut PageIds,
    ) -> QuestionDisplay {
        let mut yes_label = strings.yes();
        let mut no_label = strings.no();
        if blank {
            yes_label = format!(" (1) {yes_label}");
            no_label = format!(" (0) {no_label}");
        }

        let name = question.field_name();
        let submitted = data.answer_to(question).unwrap_or("");

        let mut options = Vec::new();
        let mut any_checked = false;
        for (code, label) in [(YesNo::Yes.code(), yes_label), (YesNo::No.code(), no_label)] {
            let checked = code == submitted;
            any_checked |= checked;
            options.push(ChoiceOption {
                name: name.clone(),
                id: ids.next_element_id(),
                value: code.to_string(),
                label,
                checked,
                disabled: blank,
            });
        }
        if !question.required() {
            options.push(ChoiceOption {
                name,
                id: ids.next_element_id(),
                value: String::new(),
                label: strings.no_answer(),
                checked: !any_checked && !blank,
                disabled: blank,
            });
        }

        QuestionDisplay::new(QuestionContext::YesNo(YesNoQuestionContext { options }))
    }

    fn response_display(
        &self,
        question: &Question,
        response: &Response,
        strings: &dyn Strings,
        ids: &mut PageIds,
    ) -> ResponseContext {
        // Fresh tags per render keep radio group names distinct when the
        // same question appears more than once on a page.
        let yes_name = format!("{}{}y", question.field_name(), ids.next_field_tag());
        let no_name = format!("{}{}n", question.field_name(), ids.next_field_tag());

        let answer = response
            .first_answer(question.id())
            .and_then(|answer| answer.yes_no());

        ResponseContext::YesNo(YesNoResponseContext {
            yes_name,
            no_name,
            yes_label: strings.yes(),
            no_label: strings.no(),
            yes_selected: answer == Some(YesNo::Yes),
            no_selected: answer == Some(YesNo::No),
        })
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
        info.is_bool = true;
        Ok(info)
    }

    fn mobile_choice_data(&self, question: &Question, strings: &dyn Strings) -> MobileChoiceData {
        let no = MobileChoice {
            index: 0,
            choice_id: YesNo::No.code().to_string(),
            question_id: question.id(),
            value: None,
            content: strings.no(),
            is_bool: true,
            first: false,
        };
        let mut yes = MobileChoice {
            index: 1,
            choice_id: YesNo::Yes.code().to_string(),
            question_id: question.id(),
            value: None,
            content: strings.yes(),
            is_bool: true,
            first: false,
        };
        if question.required() {
            yes.value = Some(YesNo::Yes.code().to_string());
            yes.first = true;
        }
        MobileChoiceData {
            choices: vec![no, yes],
            default_response: Some(YesNo::No.code().to_string()),
        }
    }

    fn mobile_response_data(
        &self,
        question: &Question,
        response_id: ResponseId,
        provider: &dyn ResultsProvider,
    ) -> Result<MobileResponseData, QuestionError> {
        let results = provider.results(question, response_id)?;
        debug!(question = %question.id(), response = %response_id, results = results.len(), "building mobile response data");

        let mut data = MobileResponseData::default();
        if !results.is_empty() {
            data.answered = true;
            for result in &results {
                let code = if result.choice == YesNo::Yes.code() {
                    YesNo::Yes
                } else {
                    YesNo::No
                };
                let slot = match code {
                    YesNo::Yes => 1,
                    YesNo::No => 0,
                };
                data.slots.insert(slot, code.code().to_string());
                data.responses
                    .insert(question.response_key(), code.code().to_string());
            }
        }
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use questionnaire_types::EnglishStrings;
    use questionnaire_types::QuestionTypeId;

    fn yesno_question() -> Question {
        Question::new(7, QuestionTypeId::YesNo).with_name("Attending?")
    }

    fn options(question: &Question, data: &SubmittedData, blank: bool) -> Vec<ChoiceOption> {
        let mut ids = PageIds::new();
        let display =
            YesNoQuestion.question_display(question, data, &[], blank, &EnglishStrings, &mut ids);
        let QuestionContext::YesNo(context) = display.context else {
            panic!("yes/no question built a non-yes/no context");
        };
        context.options
    }

    #[test]
    fn optional_question_gets_three_options_in_order() {
        let opts = options(&yesno_question(), &SubmittedData::new(), false);
        assert_eq!(opts.len(), 3);
        assert_eq!(opts[0].value, "y");
        assert_eq!(opts[1].value, "n");
        assert_eq!(opts[2].value, "");
        assert_eq!(opts[0].label, "Yes");
        assert_eq!(opts[1].label, "No");
    }

    #[test]
    fn required_question_has_no_no_answer_option() {
        let question = yesno_question().with_required(true);
        let opts = options(&question, &SubmittedData::new(), false);
        assert_eq!(opts.len(), 2);
    }

    #[test]
    fn submitted_value_checks_the_matching_option() {
        let data = SubmittedData::new().with("q7", "n");
        let opts = options(&yesno_question(), &data, false);
        assert!(!opts[0].checked);
        assert!(opts[1].checked);
        assert!(!opts[2].checked);
    }

    #[test]
    fn unanswered_optional_question_defaults_to_no_answer() {
        let opts = options(&yesno_question(), &SubmittedData::new(), false);
        assert!(!opts[0].checked);
        assert!(!opts[1].checked);
        assert!(opts[2].checked);
    }

    #[test]
    fn blank_mode_prefixes_labels_and_disables_everything() {
        let opts = options(&yesno_question(), &SubmittedData::new(), true);
        assert_eq!(opts[0].label, " (1) Yes");
        assert_eq!(opts[1].label, " (0) No");
        assert!(opts.iter().all(|o| o.disabled));
        assert!(opts.iter().all(|o| !o.checked));
    }

    #[test]
    fn options_share_the_question_field_name() {
        let opts = options(&yesno_question(), &SubmittedData::new(), false);
        assert!(opts.iter().all(|o| o.name == "q7"));
    }

    #[test]
    fn element_ids_continue_across_questions() {
        let mut ids = PageIds::new();
        let first = yesno_question();
        let second = Question::new(8, QuestionTypeId::YesNo);
        let data = SubmittedData::new();

        let mut seen = Vec::new();
        for question in [&first, &second] {
            let display = YesNoQuestion.question_display(
                question, &data, &[], false, &EnglishStrings, &mut ids,
            );
            let QuestionContext::YesNo(context) = display.context else {
                panic!("yes/no question built a non-yes/no context");
            };
            seen.extend(context.options.into_iter().map(|o| o.id));
        }

        assert_eq!(seen.len(), 6);
        let mut deduped = seen.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), 6);
        assert_eq!(seen[0], "auto-rb0001");
        assert_eq!(seen[5], "auto-rb0006");
    }

    #[test]
    fn response_display_reads_the_first_answer() {
        let mut ids = PageIds::new();
        let response = Response::new().with_answer(QuestionId(7), "y");
        let context = YesNoQuestion.response_display(
            &yesno_question(),
            &response,
            &EnglishStrings,
            &mut ids,
        );
        let context = context.as_yes_no().unwrap().clone();
        assert_eq!(context.yes_name, "q70y");
        assert_eq!(context.no_name, "q71n");
        assert!(context.yes_selected);
        assert!(!context.no_selected);
    }

    #[test]
    fn response_display_without_answer_selects_neither() {
        let mut ids = PageIds::new();
        let context = YesNoQuestion.response_display(
            &yesno_question(),
            &Response::new(),
            &EnglishStrings,
            &mut ids,
        );
        let context = context.as_yes_no().unwrap().clone();
        assert!(!context.yes_selected);
        assert!(!context.no_selected);
    }

    #[test]
    fn response_display_ignores_non_answer_codes() {
        let mut ids = PageIds::new();
        let response = Response::new().with_answer(QuestionId(7), "maybe");
        let context = YesNoQuestion.response_display(
            &yesno_question(),
            &response,
            &EnglishStrings,
            &mut ids,
        );
        let context = context.as_yes_no().unwrap().clone();
        assert!(!context.yes_selected);
        assert!(!context.no_selected);
    }

    #[test]
    fn field_tags_advance_across_renders() {
        let mut ids = PageIds::new();
        for expected in ["q70y", "q72y"] {
            let context = YesNoQuestion.response_display(
                &yesno_question(),
                &Response::new(),
                &EnglishStrings,
                &mut ids,
            );
            assert_eq!(context.as_yes_no().unwrap().yes_name, expected);
        }
    }

    #[test]
    fn feedback_follows_required() {
        let optional = yesno_question();
        let required = yesno_question().with_required(true);

        assert!(YesNoQuestion.supports_feedback());
        assert!(!YesNoQuestion.valid_feedback(&optional));
        assert!(YesNoQuestion.valid_feedback(&required));
        assert_eq!(YesNoQuestion.feedback_max_score(&optional), None);
        assert_eq!(YesNoQuestion.feedback_max_score(&required), Some(1));
    }

    #[test]
    fn dependency_options_need_a_name() {
        let named = yesno_question();
        let options = YesNoQuestion.dependency_options(&named, &EnglishStrings);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].key, "7,0");
        assert_eq!(options[0].label, "Attending?->Yes");
        assert_eq!(options[1].key, "7,1");
        assert_eq!(options[1].label, "Attending?->No");

        let unnamed = Question::new(7, QuestionTypeId::YesNo);
        assert!(YesNoQuestion.dependency_options(&unnamed, &EnglishStrings).is_empty());
    }

    #[test]
    fn mobile_choice_data_presets_yes_when_required() {
        let data =
            YesNoQuestion.mobile_choice_data(&yesno_question().with_required(true), &EnglishStrings);
        assert_eq!(data.choices.len(), 2);
        assert_eq!(data.choices[0].choice_id, "n");
        assert_eq!(data.choices[0].content, "No");
        assert_eq!(data.choices[0].value, None);
        assert_eq!(data.choices[1].choice_id, "y");
        assert_eq!(data.choices[1].content, "Yes");
        assert_eq!(data.choices[1].value.as_deref(), Some("y"));
        assert!(data.choices[1].first);
        assert_eq!(data.default_response.as_deref(), Some("n"));
    }

    #[test]
    fn mobile_choice_data_presets_nothing_when_optional() {
        let data = YesNoQuestion.mobile_choice_data(&yesno_question(), &EnglishStrings);
        assert!(data.choices.iter().all(|c| c.value.is_none()));
        assert!(data.choices.iter().all(|c| !c.first));
        assert!(data.choices.iter().all(|c| c.is_bool));
    }

    #[test]
    fn mobile_question_data_sets_bool_flag() {
        let info = YesNoQuestion
            .mobile_question_data(&yesno_question(), 2)
            .unwrap();
        assert!(info.is_bool);
        assert!(!info.is_date);
    }
}
