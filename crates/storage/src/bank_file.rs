//! JSON question bank format: an array of question records.

use std::path::Path;

use quiz_core::model::{QuestionBank, QuestionDraft};

use crate::repository::StorageError;

const BUILTIN_BANK: &str = include_str!("../data/questions.json");

/// Parse and validate a bank from JSON text.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON and
/// `StorageError::Bank` for records that violate question invariants.
pub fn parse_bank(json: &str) -> Result<QuestionBank, StorageError> {
    let drafts: Vec<QuestionDraft> = serde_json::from_str(json)?;
    Ok(QuestionBank::from_drafts(drafts)?)
}

/// Read a bank from a JSON file.
///
/// # Errors
///
/// Returns `StorageError::Io` if the file cannot be read, otherwise see `parse_bank`.
pub fn load_bank_file(path: impl AsRef<Path>) -> Result<QuestionBank, StorageError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let bank = parse_bank(&raw)?;
    tracing::info!(
        path = %path.display(),
        questions = bank.len(),
        "loaded question bank"
    );
    Ok(bank)
}

/// The question set shipped with the crate.
///
/// # Errors
///
/// Returns `StorageError` only if the embedded data is broken.
pub fn builtin_bank() -> Result<QuestionBank, StorageError> {
    let bank = parse_bank(BUILTIN_BANK)?;
    tracing::debug!(questions = bank.len(), "loaded built-in question bank");
    Ok(bank)
}
