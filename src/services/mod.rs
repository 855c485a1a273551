//! Repository-generic application services.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::edit::save::SaveError;
use crate::repository::errors::RepositoryError;

pub mod client;
pub mod main;
pub mod payment;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Form(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("{0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::Form(err.to_string())
    }
}

impl From<SaveError> for ServiceError {
    fn from(err: SaveError) -> Self {
        match err {
            SaveError::Update(inner) => ServiceError::Repository(inner),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}
