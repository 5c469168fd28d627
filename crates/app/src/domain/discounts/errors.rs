//! Discounts service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::{database::RepositoryError, mapping::MappingError};

#[derive(Debug, Error)]
pub enum DiscountsServiceError {
    #[error("discount already exists")]
    AlreadyExists,

    #[error("discount not found")]
    NotFound,

    #[error("update contains no changes")]
    EmptyUpdate,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("stored discount could not be mapped")]
    Mapping(#[source] MappingError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for DiscountsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

impl From<RepositoryError> for DiscountsServiceError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::Sql(error) => error.into(),
            RepositoryError::Mapping(error) => Self::Mapping(error),
        }
    }
}
