//! Progenitor Errors

use salvo::http::StatusError;

use dairycart_app::domain::progenitors::ProgenitorsServiceError;

use crate::errors::{internal, not_found};

pub(crate) fn into_status_error(error: ProgenitorsServiceError, id: i64) -> StatusError {
    match error {
        ProgenitorsServiceError::NotFound => not_found("product progenitor", id),
        error @ (ProgenitorsServiceError::Mapping(_) | ProgenitorsServiceError::Sql(_)) => {
            internal("failed to fetch product progenitor", &error)
        }
    }
}
