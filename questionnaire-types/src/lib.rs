//! Core types for the questionnaire crate.
//!
//! This crate provides the foundational types for questionnaire question types:
//! - `Question` and `QuestionTypeId` - Question identity and type binding
//! - `SubmittedData` and `Response` - Per-call submitted and stored answer data
//! - `QuestionContext` and `ResponseContext` - Statically-shaped display contexts
//! - `check_date` and `DateCheck` - Date parsing, normalization, and range checking
//! - `QuestionType`, `Strings`, and `ResultsProvider` traits - The contract between
//!   question types and the host survey engine

mod question;
pub use question::{Question, QuestionId, QuestionTypeId, ResponseKind};

mod submission;
pub use submission::SubmittedData;

mod response;
pub use response::{Answer, Response, ResponseId, YesNo};

mod dates;
pub use dates::{DateCheck, DateStyle, MAX_YEAR, MIN_YEAR, check_date};

mod display;
pub use display::{
    ChoiceOption, DateQuestionContext, DateResponseContext, PageIds, QuestionContext,
    QuestionDisplay, ResponseContext, YesNoQuestionContext, YesNoResponseContext,
};

mod strings;
pub use strings::{EnglishStrings, Strings};

mod mobile;
pub use mobile::{
    MobileChoice, MobileChoiceData, MobileQuestionInfo, MobileResponseData, ResultRecord,
};

mod error;
pub use error::QuestionError;

mod traits;
pub use traits::{DependencyOption, FieldSetting, QuestionType, ResultsProvider, required_check};
