//! Progenitors service errors.

use sqlx::Error;
use thiserror::Error;

use crate::{database::RepositoryError, mapping::MappingError};

#[derive(Debug, Error)]
pub enum ProgenitorsServiceError {
    #[error("progenitor not found")]
    NotFound,

    #[error("stored progenitor could not be mapped")]
    Mapping(#[source] MappingError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ProgenitorsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::Sql(error)
    }
}

impl From<RepositoryError> for ProgenitorsServiceError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::Sql(error) => error.into(),
            RepositoryError::Mapping(error) => Self::Mapping(error),
        }
    }
}
