//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::{debug, error};

/// Map any error to an HTTP error.
pub(crate) trait ResultExt<T> {
    /// Logged internal server error.
    fn or_500(self, context: &str) -> Result<T, StatusError>;

    /// Bad request carrying `message` as its brief.
    fn or_400(self, message: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error().brief("Unexpected internal error")
        })
    }

    fn or_400(self, message: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            debug!("{message}: {error}");

            StatusError::bad_request().brief(format!("{message}: {error}"))
        })
    }
}
