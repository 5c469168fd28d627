//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, DatabaseSettings, Db},
    domain::{
        attributes::{AttributesService, PgAttributesService},
        discounts::{DiscountsService, PgDiscountsService},
        products::{PgProductsService, ProductsService},
        progenitors::{PgProgenitorsService, ProgenitorsService},
    },
    validation::SkuValidator,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to compile SKU pattern")]
    SkuPattern(#[source] regex::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub progenitors: Arc<dyn ProgenitorsService>,
    pub attributes: Arc<dyn AttributesService>,
    pub discounts: Arc<dyn DiscountsService>,
}

impl AppContext {
    /// Build application context from database settings.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_settings(settings: &DatabaseSettings) -> Result<Self, AppInitError> {
        let pool = database::connect(settings)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool, settings.statement_timeout);
        let sku_validator = SkuValidator::new().map_err(AppInitError::SkuPattern)?;

        Ok(Self {
            products: Arc::new(PgProductsService::new(db.clone(), sku_validator)),
            progenitors: Arc::new(PgProgenitorsService::new(db.clone())),
            attributes: Arc::new(PgAttributesService::new(db.clone())),
            discounts: Arc::new(PgDiscountsService::new(db)),
        })
    }
}
