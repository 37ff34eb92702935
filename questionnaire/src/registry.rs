use std::collections::HashMap;

use questionnaire_types::{QuestionError, QuestionType, QuestionTypeId};

use crate::{DateQuestion, YesNoQuestion};

/// Dispatch table from question type ids to question type implementations.
///
/// The survey engine looks a question's handler up by its `type_id` instead
/// of dispatching virtually through a class hierarchy. Hosts can replace an
/// entry to customize a type's behavior.
#[derive(Debug, Default)]
pub struct QuestionTypeRegistry {
    types: HashMap<QuestionTypeId, Box<dyn QuestionType>>,
}

impl QuestionTypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Create a registry with the shipped question types bound.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(QuestionTypeId::YesNo, Box::new(YesNoQuestion));
        registry.register(QuestionTypeId::Date, Box::new(DateQuestion));
        registry
    }

    /// Bind a question type implementation to an id, replacing any
    /// previous binding.
    pub fn register(&mut self, id: QuestionTypeId, question_type: Box<dyn QuestionType>) {
        self.types.insert(id, question_type);
    }

    /// Look up the implementation bound to an id.
    pub fn get(&self, id: QuestionTypeId) -> Result<&dyn QuestionType, QuestionError> {
        self.types
            .get(&id)
            .map(|question_type| question_type.as_ref())
            .ok_or(QuestionError::UnknownType(id))
    }

    /// Check whether an id is bound.
    pub fn contains(&self, id: QuestionTypeId) -> bool {
        self.types.contains_key(&id)
    }

    /// Get the number of bound types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if no types are bound.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use questionnaire_types::ResponseKind;

    #[test]
    fn standard_registry_binds_both_types() {
        let registry = QuestionTypeRegistry::standard();
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get(QuestionTypeId::YesNo).unwrap().response_kind(),
            ResponseKind::Boolean
        );
        assert_eq!(
            registry.get(QuestionTypeId::Date).unwrap().response_kind(),
            ResponseKind::Date
        );
    }

    #[test]
    fn empty_registry_reports_unknown_type() {
        let registry = QuestionTypeRegistry::new();
        let error = registry.get(QuestionTypeId::Date).unwrap_err();
        assert!(matches!(error, QuestionError::UnknownType(QuestionTypeId::Date)));
    }
}
