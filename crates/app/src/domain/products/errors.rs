//! Products service errors.

use std::fmt::{Display, Formatter, Result as FmtResult};

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::{database::RepositoryError, mapping::MappingError};

/// Stage of product creation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationStep {
    Begin,
    Progenitor,
    Attribute,
    AttributeValue,
    Product,
    Commit,
}

impl Display for CreationStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Begin => "begin",
            Self::Progenitor => "progenitor",
            Self::Attribute => "attribute",
            Self::AttributeValue => "attribute value",
            Self::Product => "product",
            Self::Commit => "commit",
        })
    }
}

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product already exists")]
    AlreadyExists,

    #[error("product not found")]
    NotFound,

    #[error("invalid sku `{0}`")]
    InvalidSku(String),

    #[error("update contains no changes")]
    EmptyUpdate,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("product creation failed at the {step} step")]
    Creation {
        step: CreationStep,
        #[source]
        source: Error,
    },

    #[error("stored product could not be mapped")]
    Mapping(#[source] MappingError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl ProductsServiceError {
    pub(crate) fn creation(step: CreationStep) -> impl FnOnce(Error) -> Self {
        move |source| Self::Creation { step, source }
    }
}

impl From<Error> for ProductsServiceError {
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

impl From<RepositoryError> for ProductsServiceError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::Sql(error) => error.into(),
            RepositoryError::Mapping(error) => Self::Mapping(error),
        }
    }
}

/// Whether `error` is a unique constraint violation.
pub(crate) fn is_unique_violation(error: &Error) -> bool {
    error
        .as_database_error()
        .is_some_and(|error| matches!(error.kind(), ErrorKind::UniqueViolation))
}
