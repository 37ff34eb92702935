//! # questionnaire
//!
//! Date and yes/no questionnaire question types, extracted from a web
//! survey engine as a standalone validation/rendering library.
//!
//! Each question type builds statically-shaped display contexts for a
//! templating layer, validates submitted answers, and produces plain-data
//! structures for a companion mobile client. The library owns no storage
//! and no templates: submitted and stored data arrive per call, and the
//! host renders the returned contexts.
//!
//! ## Usage
//!
//! ```rust
//! use questionnaire::{
//!     EnglishStrings, PageIds, Question, QuestionContext, QuestionType,
//!     QuestionTypeId, QuestionTypeRegistry, SubmittedData,
//! };
//!
//! let registry = QuestionTypeRegistry::standard();
//! let question = Question::new(7, QuestionTypeId::YesNo).with_name("Attending?");
//! let data = SubmittedData::new().with("q7", "n");
//!
//! let mut ids = PageIds::new();
//! let question_type = registry.get(question.type_id()).unwrap();
//! let display = question_type.question_display(
//!     &question, &data, &[], false, &EnglishStrings, &mut ids,
//! );
//!
//! let QuestionContext::YesNo(context) = display.context else { unreachable!() };
//! assert_eq!(context.checked().unwrap().value, "n");
//! ```
//!
//! Validation never throws for bad answers: a malformed date surfaces as a
//! notification on the display and a `false` from `validate`.

// Re-export all types from questionnaire-types
pub use questionnaire_types::*;

mod date;
pub use date::DateQuestion;

mod yesno;
pub use yesno::YesNoQuestion;

mod registry;
pub use registry::QuestionTypeRegistry;
