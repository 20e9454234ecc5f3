use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::question::{Category, QuestionDraft, QuestionError, QuizQuestion};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("duplicate question id {0}")]
    DuplicateId(QuestionId),

    #[error("invalid question at position {position}: {source}")]
    InvalidQuestion {
        position: usize,
        #[source]
        source: QuestionError,
    },
}

/// Ordered, read-only collection of quiz questions.
///
/// Bank order is the order questions are asked in. Ids are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<QuizQuestion>,
}

impl QuestionBank {
    /// Build a bank from already-validated questions.
    ///
    /// # Errors
    ///
    /// Returns `BankError::DuplicateId` if two questions share an id.
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, BankError> {
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(BankError::DuplicateId(question.id()));
            }
        }
        Ok(Self { questions })
    }

    /// Validate a list of drafts and build a bank from them.
    ///
    /// # Errors
    ///
    /// Returns `BankError::InvalidQuestion` for the first draft that fails
    /// validation, or `BankError::DuplicateId`.
    pub fn from_drafts(drafts: Vec<QuestionDraft>) -> Result<Self, BankError> {
        let questions = drafts
            .into_iter()
            .enumerate()
            .map(|(position, draft)| {
                draft
                    .validate()
                    .map_err(|source| BankError::InvalidQuestion { position, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(questions)
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<&QuizQuestion> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Questions whose category matches exactly, in bank order.
    #[must_use]
    pub fn by_category(&self, category: &Category) -> Vec<QuizQuestion> {
        self.questions
            .iter()
            .filter(|q| q.category() == category)
            .cloned()
            .collect()
    }

    /// Distinct categories in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        let mut out: Vec<Category> = Vec::new();
        for question in &self.questions {
            if !out.contains(question.category()) {
                out.push(question.category().clone());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(id: u32, category: &str) -> QuestionDraft {
        QuestionDraft {
            id,
            prompt: format!("Q{id}"),
            options: vec!["a".into(), "b".into()],
            correct_option: 0,
            explanation: None,
            category: category.into(),
        }
    }

    #[test]
    fn filters_by_category_in_bank_order() {
        let bank = QuestionBank::from_drafts(vec![
            draft(3, "A"),
            draft(1, "B"),
            draft(2, "A"),
        ])
        .unwrap();

        let a = Category::new("A").unwrap();
        let ids: Vec<u32> = bank.by_category(&a).iter().map(|q| q.id().value()).collect();
        assert_eq!(ids, vec![3, 2]);

        let missing = Category::new("a").unwrap();
        assert!(bank.by_category(&missing).is_empty());
    }

    #[test]
    fn categories_are_distinct_in_first_appearance_order() {
        let bank = QuestionBank::from_drafts(vec![
            draft(1, "B"),
            draft(2, "A"),
            draft(3, "B"),
        ])
        .unwrap();

        let labels: Vec<String> = bank.categories().iter().map(ToString::to_string).collect();
        assert_eq!(labels, vec!["B", "A"]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = QuestionBank::from_drafts(vec![draft(1, "A"), draft(1, "B")]).unwrap_err();
        assert_eq!(err, BankError::DuplicateId(QuestionId::new(1)));
    }

    #[test]
    fn invalid_draft_reports_position() {
        let mut bad = draft(2, "A");
        bad.correct_option = 5;
        let err = QuestionBank::from_drafts(vec![draft(1, "A"), bad]).unwrap_err();
        assert!(matches!(err, BankError::InvalidQuestion { position: 1, .. }));
    }

    #[test]
    fn get_finds_question_by_id() {
        let bank = QuestionBank::from_drafts(vec![draft(7, "A")]).unwrap();
        assert!(bank.get(QuestionId::new(7)).is_some());
        assert!(bank.get(QuestionId::new(8)).is_none());
        assert_eq!(bank.len(), 1);
        assert!(!bank.is_empty());
    }
}
