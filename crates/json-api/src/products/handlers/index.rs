//! Product Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{errors::internal, extensions::*, products::get::ProductResponse};

/// One page of products
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The requested page, starting at 1
    pub page: u32,

    /// Page size after clamping
    pub limit: u32,

    /// Products matching the filter across all pages
    pub count: u64,

    /// The products on this page
    pub data: Vec<ProductResponse>,
}

/// Product Index Handler
///
/// Accepts `page`, `limit`, `created_after`, `created_before`,
/// `updated_after` and `updated_before` (unix seconds). Unparseable values
/// fall back to their defaults.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Products"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let app = depot.app_or_500()?;

    let page = app
        .products
        .list_products(req.query_filter())
        .await
        .map_err(|error| internal("failed to list products", &error))?
        .map(ProductResponse::from);

    Ok(Json(ProductsResponse {
        page: page.page,
        limit: page.limit,
        count: page.count,
        data: page.data,
    }))
}
