use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity does not exist.
    #[error("entity not found")]
    NotFound,
    /// A uniqueness constraint rejected the write.
    #[error("entity already exists")]
    Duplicate,
    /// A stored row failed domain-level validation.
    #[error("validation error: {0}")]
    ValidationError(String),
    #[error(transparent)]
    DatabaseError(#[from] diesel::result::Error),
    #[error(transparent)]
    PoolError(#[from] diesel::r2d2::PoolError),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<TypeConstraintError> for RepositoryError {
    fn from(value: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(value.to_string())
    }
}
