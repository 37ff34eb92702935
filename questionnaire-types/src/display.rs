/// Render-scoped counters for page-unique identifiers.
///
/// One `PageIds` is created at the start of a page render and threaded by
/// reference through every display call on that page, replacing the ambient
/// global the survey engine used. Two independent counters live here:
///
/// - element ids for radio options, `auto-rb0001`, `auto-rb0002`, ...,
///   page-scoped and shared across all questions on the page;
/// - field tags for yes/no response field names, starting at 0, so the same
///   question rendered twice on one page gets distinct radio group names.
///
/// Hosts handling concurrent requests must keep one `PageIds` per request;
/// sharing one across requests would collide ids.
#[derive(Debug, Clone, Default)]
pub struct PageIds {
    element: u32,
    field_tag: u32,
}

impl PageIds {
    /// Create counters for a fresh page render.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next page-unique element id, zero-padded to four digits.
    pub fn next_element_id(&mut self) -> String {
        self.element += 1;
        format!("auto-rb{:04}", self.element)
    }

    /// Take the next field tag. The first call yields 0.
    pub fn next_field_tag(&mut self) -> u32 {
        let tag = self.field_tag;
        self.field_tag += 1;
        tag
    }
}

/// Template context for rendering a date question's input widget.
#[derive(Debug, Clone, PartialEq)]
pub struct DateQuestionContext {
    /// The form field name, `q<id>`.
    pub name: String,
    /// The current value: normalized when the submitted date checked out,
    /// the raw submitted text otherwise, empty when nothing was submitted.
    pub value: String,
    /// UI hint: the input must not submit the form on a newline keypress.
    pub suppress_enter_submit: bool,
}

/// Template context for rendering a stored date answer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateResponseContext {
    /// The stored value, verbatim. Absent when nothing is stored.
    pub content: Option<String>,
}

/// One selectable radio option of a yes/no question.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceOption {
    /// The radio group name, `q<id>`.
    pub name: String,
    /// The page-unique element id.
    pub id: String,
    /// The submitted value this option stands for: `y`, `n`, or empty for
    /// the no-answer option.
    pub value: String,
    /// The label text. The no-answer label may carry markup from the string
    /// catalog and is passed to the template as-is.
    pub label: String,
    /// Whether this option renders pre-selected.
    pub checked: bool,
    /// Whether this option renders disabled (blank/preview mode).
    pub disabled: bool,
}

/// Template context for rendering a yes/no question's input widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YesNoQuestionContext {
    /// The options in render order: Yes, No, then the no-answer option when
    /// the question is not required.
    pub options: Vec<ChoiceOption>,
}

impl YesNoQuestionContext {
    /// The option currently marked checked, if any.
    pub fn checked(&self) -> Option<&ChoiceOption> {
        self.options.iter().find(|o| o.checked)
    }
}

/// Template context for rendering a stored yes/no answer.
#[derive(Debug, Clone, PartialEq)]
pub struct YesNoResponseContext {
    /// Field name of the yes radio, `q<id><tag>y`.
    pub yes_name: String,
    /// Field name of the no radio, `q<id><tag>n`.
    pub no_name: String,
    /// Localized yes label.
    pub yes_label: String,
    /// Localized no label.
    pub no_label: String,
    /// Set iff the first stored answer is `y`.
    pub yes_selected: bool,
    /// Set iff the first stored answer is `n`.
    pub no_selected: bool,
}

/// The per-type question display contexts, one variant per question type.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionContext {
    Date(DateQuestionContext),
    YesNo(YesNoQuestionContext),
}

impl QuestionContext {
    /// Get the date context, if this is one.
    pub fn as_date(&self) -> Option<&DateQuestionContext> {
        match self {
            Self::Date(context) => Some(context),
            _ => None,
        }
    }

    /// Get the yes/no context, if this is one.
    pub fn as_yes_no(&self) -> Option<&YesNoQuestionContext> {
        match self {
            Self::YesNo(context) => Some(context),
            _ => None,
        }
    }
}

/// The per-type response display contexts.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseContext {
    Date(DateResponseContext),
    YesNo(YesNoResponseContext),
}

impl ResponseContext {
    /// Get the date context, if this is one.
    pub fn as_date(&self) -> Option<&DateResponseContext> {
        match self {
            Self::Date(context) => Some(context),
            _ => None,
        }
    }

    /// Get the yes/no context, if this is one.
    pub fn as_yes_no(&self) -> Option<&YesNoResponseContext> {
        match self {
            Self::YesNo(context) => Some(context),
            _ => None,
        }
    }
}

/// The result of building a question's display: the template context plus
/// any user-visible notifications raised while building it.
///
/// Notifications never abort a render. A malformed submitted date, for
/// instance, stays in the context unparsed and surfaces here as a message.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionDisplay {
    pub context: QuestionContext,
    pub notifications: Vec<String>,
}

impl QuestionDisplay {
    /// Wrap a context with no notifications.
    pub fn new(context: QuestionContext) -> Self {
        Self {
            context,
            notifications: Vec::new(),
        }
    }

    /// Check whether any notification was raised.
    pub fn has_notifications(&self) -> bool {
        !self.notifications.is_empty()
    }
}
