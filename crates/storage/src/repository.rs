use std::path::Path;
use std::sync::Arc;

use quiz_core::model::{BankError, Category, QuestionBank, QuizQuestion};
use thiserror::Error;

use crate::bank_file;

/// Errors surfaced while loading a question source.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("failed to read question bank: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse question bank: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Bank(#[from] BankError),
}

/// Read-only question source, queried by exact category label.
pub trait QuestionRepository: Send + Sync {
    /// Distinct categories, in bank order of first appearance.
    fn categories(&self) -> Vec<Category>;

    /// Questions of `category`, in bank order. Empty when nothing matches.
    fn questions_for(&self, category: &Category) -> Vec<QuizQuestion>;
}

/// Question repository over an owned, validated `QuestionBank`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuestionRepository {
    bank: Arc<QuestionBank>,
}

impl InMemoryQuestionRepository {
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank: Arc::new(bank),
        }
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }
}

impl QuestionRepository for InMemoryQuestionRepository {
    fn categories(&self) -> Vec<Category> {
        self.bank.categories()
    }

    fn questions_for(&self, category: &Category) -> Vec<QuizQuestion> {
        self.bank.by_category(category)
    }
}

/// Aggregates question sources behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionRepository>,
}

impl Storage {
    /// Storage over the question set shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the embedded bank fails to parse or validate.
    pub fn builtin() -> Result<Self, StorageError> {
        Ok(Self::from_bank(bank_file::builtin_bank()?))
    }

    /// Storage over a JSON bank file.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file cannot be read, parsed or validated.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        Ok(Self::from_bank(bank_file::load_bank_file(path)?))
    }

    #[must_use]
    pub fn from_bank(bank: QuestionBank) -> Self {
        let questions: Arc<dyn QuestionRepository> = Arc::new(InMemoryQuestionRepository::new(bank));
        Self { questions }
    }
}
