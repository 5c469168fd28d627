//! Delete Product Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, products::errors::into_status_error};

/// Delete Product Handler
///
/// Archives the product.
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    sku: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let app = depot.app_or_500()?;
    let sku = sku.into_inner();

    app.products
        .delete_product(sku.clone())
        .await
        .map_err(|error| into_status_error(error, &sku))?;

    Ok(StatusCode::OK)
}
