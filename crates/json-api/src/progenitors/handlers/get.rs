//! Get Progenitor Handler

use std::string::ToString;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use dairycart_app::domain::progenitors::records::{ProgenitorId, ProgenitorRecord};

use crate::{extensions::*, progenitors::errors::into_status_error};

/// Progenitor Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProgenitorResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub taxable: bool,
    pub price: f64,
    pub product_weight: f64,
    pub product_height: f64,
    pub product_width: f64,
    pub product_length: f64,
    pub package_weight: f64,
    pub package_height: f64,
    pub package_width: f64,
    pub package_length: f64,
    pub created_on: String,
    pub updated_on: Option<String>,
}

impl From<ProgenitorRecord> for ProgenitorResponse {
    fn from(progenitor: ProgenitorRecord) -> Self {
        let product = progenitor.product_dimensions;
        let package = progenitor.package_dimensions;

        Self {
            id: progenitor.id.into_i64(),
            name: progenitor.name,
            description: progenitor.description,
            taxable: progenitor.taxable,
            price: progenitor.price,
            product_weight: product.weight,
            product_height: product.height,
            product_width: product.width,
            product_length: product.length,
            package_weight: package.weight,
            package_height: package.height,
            package_width: package.width,
            package_length: package.length,
            created_on: progenitor.created_on.to_string(),
            updated_on: progenitor.updated_on.as_ref().map(ToString::to_string),
        }
    }
}

/// Get Progenitor Handler
#[endpoint(
    tags("progenitors"),
    summary = "Get Product Progenitor",
    responses(
        (status_code = StatusCode::OK, description = "Progenitor"),
        (status_code = StatusCode::NOT_FOUND, description = "Progenitor not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    progenitor: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ProgenitorResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let progenitor = progenitor.into_inner();

    let record = app
        .progenitors
        .get_progenitor(ProgenitorId::from_i64(progenitor))
        .await
        .map_err(|error| into_status_error(error, progenitor))?;

    Ok(Json(record.into()))
}
