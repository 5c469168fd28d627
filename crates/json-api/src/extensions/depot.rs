//! Depot helper extensions.

use std::{any::Any, sync::Arc};

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use dairycart_app::context::AppContext;

use crate::state::State;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// The injected services.
    fn app_or_500(&self) -> Result<&AppContext, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_ignored| {
            error!("depot is missing {}", std::any::type_name::<T>());

            StatusError::internal_server_error().brief("Unexpected internal error")
        })
    }

    fn app_or_500(&self) -> Result<&AppContext, StatusError> {
        self.obtain_or_500::<Arc<State>>().map(|state| &state.app)
    }
}
