#![forbid(unsafe_code)]

pub mod bank_file;
pub mod repository;

pub use repository::{InMemoryQuestionRepository, QuestionRepository, Storage, StorageError};
