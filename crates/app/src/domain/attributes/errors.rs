//! Attributes service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::{database::RepositoryError, mapping::MappingError};

#[derive(Debug, Error)]
pub enum AttributesServiceError {
    #[error("attribute not found")]
    AttributeNotFound,

    #[error("attribute value not found")]
    ValueNotFound,

    #[error("attribute value already exists")]
    AlreadyExists,

    #[error("update contains no changes")]
    EmptyUpdate,

    #[error("invalid data")]
    InvalidData,

    #[error("stored attribute could not be mapped")]
    Mapping(#[source] MappingError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for AttributesServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::ValueNotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::CheckViolation | ErrorKind::NotNullViolation) => Self::InvalidData,
            Some(_) | None => Self::Sql(error),
        }
    }
}

impl From<RepositoryError> for AttributesServiceError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::Sql(error) => error.into(),
            RepositoryError::Mapping(error) => Self::Mapping(error),
        }
    }
}
