use crate::QuestionTypeId;

/// Error type for question type operations.
///
/// Normal validation failures are never errors: they surface as
/// notifications on the display context and a `false` from `validate`.
/// These variants cover misconfiguration and host collaborator failures.
#[derive(Debug, thiserror::Error)]
pub enum QuestionError {
    /// No question type is registered under the given id.
    #[error("no question type registered for '{0}'")]
    UnknownType(QuestionTypeId),

    /// Mobile data construction was invoked on a question type without
    /// mobile support.
    #[error("question type '{help_name}' does not provide mobile support")]
    MobileUnsupported { help_name: &'static str },

    /// The host's stored-results accessor failed.
    #[error("results provider error: {0}")]
    Results(#[from] anyhow::Error),
}
