use thiserror::Error;

/// Failure taxonomy for the todo operations. `NotFound` and `Validation`
/// are client-visible; `Storage` is an unrecoverable server fault.
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("Todo with id {id} not found")]
    NotFound { id: i64 },

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Storage(#[from] sqlx::Error),
}

impl TodoError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
