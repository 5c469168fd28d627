//! Discount Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{discounts::get::DiscountResponse, errors::internal, extensions::*};

/// One page of discounts
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DiscountsResponse {
    pub page: u32,
    pub limit: u32,
    pub count: u64,
    pub data: Vec<DiscountResponse>,
}

/// Discount Index Handler
///
/// Same paging and time filters as the product listing.
#[endpoint(
    tags("discounts"),
    summary = "List Discounts",
    responses(
        (status_code = StatusCode::OK, description = "Discounts"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<DiscountsResponse>, StatusError> {
    let app = depot.app_or_500()?;

    let page = app
        .discounts
        .list_discounts(req.query_filter())
        .await
        .map_err(|error| internal("failed to list discounts", &error))?
        .map(DiscountResponse::from);

    Ok(Json(DiscountsResponse {
        page: page.page,
        limit: page.limit,
        count: page.count,
        data: page.data,
    }))
}
