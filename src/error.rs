use thiserror::Error;

use crate::models::QuestionId;
use crate::store::StoreError;

/// Errors surfaced by repository and board operations.
///
/// Each failure kind stays distinguishable so callers can recover
/// appropriately: a validation failure re-prompts, an unknown identifier
/// clears dependent view state, and a storage failure aborts the operation
/// before any in-memory change lands.
#[derive(Debug, Error)]
pub enum Error {
    /// A required text field was empty after trimming.
    #[error("{field} must not be empty")]
    Validation { field: &'static str },

    /// No question in the collection matches the given identifier.
    #[error("no question matches id {id}")]
    NotFound { id: QuestionId },

    /// The persistent store could not be read or written.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, Error>;
