//! Error responses shared by every resource.
//!
//! Service errors are classified into exactly three kinds before they reach
//! the transport: not found, invalid input and internal. Internal failures
//! are logged with their full source chain and never echoed to the caller.

use std::{error::Error, fmt::Display, iter};

use salvo::http::StatusError;
use tracing::error;

pub(crate) const INTERNAL_ERROR_BRIEF: &str = "Unexpected internal error";

pub(crate) fn not_found(thing: &str, identifier: impl Display) -> StatusError {
    StatusError::not_found().brief(format!(
        "The {thing} you were looking for (identified by `{identifier}`) does not exist"
    ))
}

pub(crate) fn invalid_input(message: impl Into<String>) -> StatusError {
    StatusError::bad_request().brief(message)
}

pub(crate) fn internal(context: &str, source: &(dyn Error + 'static)) -> StatusError {
    error!(error = %source_chain(source), "{context}");

    StatusError::internal_server_error().brief(INTERNAL_ERROR_BRIEF)
}

fn source_chain(error: &(dyn Error + 'static)) -> String {
    iter::successors(Some(error), |error| (*error).source())
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ")
}

#[cfg(test)]
mod tests {
    use std::io;

    use salvo::http::StatusCode;
    use thiserror::Error;

    use super::*;

    #[derive(Debug, Error)]
    #[error("storage error")]
    struct Wrapped(#[source] io::Error);

    #[test]
    fn not_found_names_the_thing_and_identifier() {
        let error = not_found("product", "skateboard");

        assert_eq!(error.code, StatusCode::NOT_FOUND);
        assert_eq!(
            error.brief,
            "The product you were looking for (identified by `skateboard`) does not exist"
        );
    }

    #[test]
    fn internal_errors_use_a_generic_brief() {
        let source = Wrapped(io::Error::other("password authentication failed"));

        let error = internal("failed to fetch product", &source);

        assert_eq!(error.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.brief, INTERNAL_ERROR_BRIEF);
    }

    #[test]
    fn source_chain_includes_every_cause() {
        let source = Wrapped(io::Error::other("connection reset"));

        assert_eq!(source_chain(&source), "storage error: connection reset");
    }
}
