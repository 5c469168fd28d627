//! Products service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::{Span, error, info};

use crate::{
    database::Db,
    domain::{
        attributes::repository::PgAttributesRepository,
        products::{
            data::{NewProduct, Product, ProductUpdate},
            errors::{CreationStep, ProductsServiceError, is_unique_violation},
            repository::PgProductsRepository,
        },
        progenitors::repository::PgProgenitorsRepository,
    },
    existence::row_exists,
    filter::{Page, QueryFilter},
    query::Table,
    validation::SkuValidator,
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    sku_validator: SkuValidator,
    products: PgProductsRepository,
    progenitors: PgProgenitorsRepository,
    attributes: PgAttributesRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db, sku_validator: SkuValidator) -> Self {
        Self {
            db,
            sku_validator,
            products: PgProductsRepository::new(),
            progenitors: PgProgenitorsRepository::new(),
            attributes: PgAttributesRepository::new(),
        }
    }

    async fn sku_exists(
        tx: &mut Transaction<'_, Postgres>,
        sku: &str,
    ) -> Result<bool, ProductsServiceError> {
        Ok(row_exists(&mut **tx, Table::Products, "sku", sku).await?)
    }

    async fn with_attributes(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        mut product: Product,
    ) -> Result<Product, ProductsServiceError> {
        product.attributes = self
            .attributes
            .attributes_for_progenitor(tx, product.progenitor.id)
            .await?;

        Ok(product)
    }

    /// Every write of product creation, in order, against one transaction.
    async fn insert_product_graph(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &NewProduct,
    ) -> Result<Product, ProductsServiceError> {
        if Self::sku_exists(tx, &product.sku).await? {
            return Err(ProductsServiceError::AlreadyExists);
        }

        let progenitor = self
            .progenitors
            .create_progenitor(tx, &product.progenitor)
            .await
            .map_err(ProductsServiceError::creation(CreationStep::Progenitor))?;

        let mut value_count = 0_usize;

        for attribute in &product.attributes {
            let attribute_id = self
                .attributes
                .create_attribute(tx, progenitor, &attribute.name)
                .await
                .map_err(ProductsServiceError::creation(CreationStep::Attribute))?;

            for value in &attribute.values {
                self.attributes
                    .create_value(tx, attribute_id, value)
                    .await
                    .map_err(ProductsServiceError::creation(CreationStep::AttributeValue))?;

                value_count += 1;
            }
        }

        let product_id = self
            .products
            .create_product(tx, progenitor, product)
            .await
            .map_err(|source| {
                if is_unique_violation(&source) {
                    ProductsServiceError::AlreadyExists
                } else {
                    ProductsServiceError::creation(CreationStep::Product)(source)
                }
            })?;

        let span = Span::current();

        span.record("progenitor_id", tracing::field::display(progenitor));
        span.record("attribute_count", product.attributes.len());
        span.record("value_count", value_count);

        let created = self
            .products
            .get_product_by_id(tx, product_id)
            .await?
            .ok_or(ProductsServiceError::NotFound)?;

        self.with_attributes(tx, created).await
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    #[tracing::instrument(name = "products.service.product_exists", skip(self), err)]
    async fn product_exists(&self, sku: String) -> Result<bool, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let exists = Self::sku_exists(&mut tx, &sku).await?;

        tx.commit().await?;

        Ok(exists)
    }

    #[tracing::instrument(name = "products.service.get_product", skip(self), err)]
    async fn get_product(&self, sku: String) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self
            .products
            .get_product_by_sku(&mut tx, &sku)
            .await?
            .ok_or(ProductsServiceError::NotFound)?;

        let product = self.with_attributes(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    #[tracing::instrument(
        name = "products.service.list_products",
        skip(self),
        fields(page = filter.page, limit = filter.limit),
        err
    )]
    async fn list_products(
        &self,
        filter: QueryFilter,
    ) -> Result<Page<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let (count, products) = self.products.list_products(&mut tx, &filter).await?;

        tx.commit().await?;

        Ok(Page::new(&filter, count, products))
    }

    #[tracing::instrument(
        name = "products.service.create_product",
        skip(self, product),
        fields(
            sku = %product.sku,
            progenitor_id = tracing::field::Empty,
            attribute_count = tracing::field::Empty,
            value_count = tracing::field::Empty
        ),
        err
    )]
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        if !self.sku_validator.is_valid(&product.sku) {
            return Err(ProductsServiceError::InvalidSku(product.sku));
        }

        let product = product.rounded();

        let mut tx = self
            .db
            .begin()
            .await
            .map_err(ProductsServiceError::creation(CreationStep::Begin))?;

        let created = match self.insert_product_graph(&mut tx, &product).await {
            Ok(created) => created,
            Err(creation_error) => {
                if let Err(rollback_error) = tx.rollback().await {
                    error!(
                        error = %rollback_error,
                        "failed to roll back product creation"
                    );
                }

                return Err(creation_error);
            }
        };

        tx.commit()
            .await
            .map_err(ProductsServiceError::creation(CreationStep::Commit))?;

        info!(product_id = %created.record.id, "created product");

        Ok(created)
    }

    #[tracing::instrument(
        name = "products.service.update_product",
        skip(self, update),
        err
    )]
    async fn update_product(
        &self,
        sku: String,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        if !Self::sku_exists(&mut tx, &sku).await? {
            return Err(ProductsServiceError::NotFound);
        }

        if update.is_empty() {
            return Err(ProductsServiceError::EmptyUpdate);
        }

        if !update.sku.is_empty() && !self.sku_validator.is_valid(&update.sku) {
            return Err(ProductsServiceError::InvalidSku(update.sku));
        }

        let existing = self
            .products
            .get_product_by_sku(&mut tx, &sku)
            .await?
            .ok_or(ProductsServiceError::NotFound)?;

        let merged = update.merge(&existing.record);

        let record = self
            .products
            .update_product(&mut tx, &existing.record, &merged)
            .await?;

        let updated = self
            .with_attributes(
                &mut tx,
                Product {
                    record,
                    ..existing
                },
            )
            .await?;

        tx.commit().await?;

        info!(product_id = %updated.record.id, "updated product");

        Ok(updated)
    }

    #[tracing::instrument(name = "products.service.delete_product", skip(self), err)]
    async fn delete_product(&self, sku: String) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        if !Self::sku_exists(&mut tx, &sku).await? {
            return Err(ProductsServiceError::NotFound);
        }

        let rows_affected = self.products.archive_product(&mut tx, &sku).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        info!(sku, "archived product");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Whether an active product has this SKU.
    async fn product_exists(&self, sku: String) -> Result<bool, ProductsServiceError>;

    /// Retrieve a single product with its progenitor and attributes.
    async fn get_product(&self, sku: String) -> Result<Product, ProductsServiceError>;

    /// Retrieve one page of products. Attributes are not loaded.
    async fn list_products(
        &self,
        filter: QueryFilter,
    ) -> Result<Page<Product>, ProductsServiceError>;

    /// Creates a product with its progenitor, attributes and values, all or
    /// nothing.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Overlay the supplied fields onto the product, writing only changed
    /// columns.
    async fn update_product(
        &self,
        sku: String,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError>;

    /// Archives the product with the given SKU.
    async fn delete_product(&self, sku: String) -> Result<(), ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::{
            attributes::data::NewAttribute, products::data::ProductUpdate,
            progenitors::data::NewProgenitor,
        },
        test::{TestContext, helpers::new_product},
    };

    use super::*;

    async fn assert_nothing_persisted(ctx: &TestContext) {
        for table in [
            Table::ProductProgenitors,
            Table::ProductAttributes,
            Table::ProductAttributeValues,
            Table::Products,
        ] {
            assert_eq!(
                ctx.test_db.count_rows(table).await,
                0,
                "expected no rows in {}",
                table.as_str()
            );
        }
    }

    fn assert_failed_at(result: &Result<Product, ProductsServiceError>, expected: CreationStep) {
        assert!(
            matches!(result, Err(ProductsServiceError::Creation { step, .. }) if *step == expected),
            "expected creation failure at {expected}, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_product_returns_full_graph() -> TestResult {
        let ctx = TestContext::new().await;

        let product = ctx
            .products
            .create_product(new_product(
                "skateboard",
                &[("something", &["one", "two", "three"])],
            ))
            .await?;

        assert_eq!(product.record.sku, "skateboard");
        assert_eq!(product.record.progenitor_id, product.progenitor.id);
        assert_eq!(product.attributes.len(), 1);

        let attribute = product.attributes.first().ok_or("missing attribute")?;
        let values: Vec<&str> = attribute.values.iter().map(|v| v.value.as_str()).collect();

        assert_eq!(attribute.record.name, "something");
        assert_eq!(attribute.record.progenitor_id, product.progenitor.id);
        assert_eq!(values, ["one", "two", "three"]);

        Ok(())
    }

    #[tokio::test]
    async fn create_product_rounds_money_values() -> TestResult {
        let ctx = TestContext::new().await;

        let product = ctx
            .products
            .create_product(NewProduct {
                price: 12.345_6,
                cost: 3.999,
                ..new_product("skateboard", &[])
            })
            .await?;

        assert!((product.record.price - 12.35).abs() < f64::EPSILON);
        assert!((product.record.cost - 4.0).abs() < f64::EPSILON);

        Ok(())
    }

    #[tokio::test]
    async fn create_product_invalid_sku_is_rejected_before_writing() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .create_product(new_product("pooƃ ou sᴉ nʞs sᴉɥʇ", &[]))
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidSku(_))),
            "expected InvalidSku, got {result:?}"
        );

        assert_nothing_persisted(&ctx).await;
    }

    #[tokio::test]
    async fn create_product_duplicate_sku_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products
            .create_product(new_product("skateboard", &[]))
            .await?;

        let result = ctx
            .products
            .create_product(new_product("skateboard", &[]))
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );
        assert_eq!(ctx.test_db.count_rows(Table::ProductProgenitors).await, 1);

        Ok(())
    }

    #[tokio::test]
    async fn progenitor_failure_persists_nothing() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .create_product(NewProduct {
                progenitor: NewProgenitor {
                    name: "Skateboard".to_owned(),
                    price: -1.0,
                    ..NewProgenitor::default()
                },
                ..new_product("skateboard", &[("color", &["red"])])
            })
            .await;

        assert_failed_at(&result, CreationStep::Progenitor);
        assert_nothing_persisted(&ctx).await;
    }

    #[tokio::test]
    async fn attribute_failure_persists_nothing() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .create_product(new_product(
                "skateboard",
                &[("color", &["red"]), ("color", &["blue"])],
            ))
            .await;

        assert_failed_at(&result, CreationStep::Attribute);
        assert_nothing_persisted(&ctx).await;
    }

    #[tokio::test]
    async fn attribute_value_failure_persists_nothing() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .create_product(new_product("skateboard", &[("color", &["red", "red"])]))
            .await;

        assert_failed_at(&result, CreationStep::AttributeValue);
        assert_nothing_persisted(&ctx).await;
    }

    #[tokio::test]
    async fn product_failure_persists_nothing() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .create_product(NewProduct {
                quantity: -1,
                ..new_product("skateboard", &[("color", &["red"])])
            })
            .await;

        assert_failed_at(&result, CreationStep::Product);
        assert_nothing_persisted(&ctx).await;
    }

    #[tokio::test]
    async fn get_product_includes_progenitor_and_attributes() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .products
            .create_product(new_product("skateboard", &[("size", &["small", "large"])]))
            .await?;

        let product = ctx.products.get_product("skateboard".to_owned()).await?;

        assert_eq!(product, created);

        Ok(())
    }

    #[tokio::test]
    async fn get_product_unknown_sku_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.products.get_product("scooter".to_owned()).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn product_exists_tracks_archival() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products
            .create_product(new_product("skateboard", &[]))
            .await?;

        assert!(ctx.products.product_exists("skateboard".to_owned()).await?);

        ctx.products
            .delete_product("skateboard".to_owned())
            .await?;

        assert!(!ctx.products.product_exists("skateboard".to_owned()).await?);

        Ok(())
    }

    #[tokio::test]
    async fn list_products_pages_with_total_count() -> TestResult {
        let ctx = TestContext::new().await;

        for sku in ["alpha", "bravo", "charlie"] {
            ctx.products.create_product(new_product(sku, &[])).await?;
        }

        let page = ctx
            .products
            .list_products(QueryFilter {
                page: 2,
                limit: 2,
                ..QueryFilter::default()
            })
            .await?;

        let skus: Vec<&str> = page.data.iter().map(|p| p.record.sku.as_str()).collect();

        assert_eq!(page.count, 3);
        assert_eq!(page.page, 2);
        assert_eq!(skus, ["charlie"]);
        assert!(page.data.iter().all(|p| p.attributes.is_empty()));

        Ok(())
    }

    #[tokio::test]
    async fn page_past_the_end_still_reports_total_count() -> TestResult {
        let ctx = TestContext::new().await;

        for sku in ["alpha", "bravo", "charlie"] {
            ctx.products.create_product(new_product(sku, &[])).await?;
        }

        let page = ctx
            .products
            .list_products(QueryFilter {
                page: 5,
                limit: 2,
                ..QueryFilter::default()
            })
            .await?;

        assert!(page.data.is_empty());
        assert_eq!(page.count, 3);

        Ok(())
    }

    #[tokio::test]
    async fn list_products_excludes_archived() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products.create_product(new_product("alpha", &[])).await?;
        ctx.products.create_product(new_product("bravo", &[])).await?;
        ctx.products.delete_product("alpha".to_owned()).await?;

        let page = ctx.products.list_products(QueryFilter::default()).await?;

        assert_eq!(page.count, 1);
        assert!(page.data.iter().all(|p| p.record.sku == "bravo"));

        Ok(())
    }

    #[tokio::test]
    async fn update_product_overlays_supplied_fields() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .products
            .create_product(new_product("skateboard", &[]))
            .await?;

        let updated = ctx
            .products
            .update_product(
                "skateboard".to_owned(),
                ProductUpdate {
                    name: "Longboard".to_owned(),
                    price: 150.556,
                    ..ProductUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.record.id, created.record.id);
        assert_eq!(updated.record.name, "Longboard");
        assert_eq!(updated.record.sku, "skateboard");
        assert_eq!(updated.record.quantity, created.record.quantity);
        assert!((updated.record.price - 150.56).abs() < f64::EPSILON);
        assert!(updated.record.updated_on.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn update_product_without_changes_leaves_row_untouched() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .products
            .create_product(new_product("skateboard", &[]))
            .await?;

        let updated = ctx
            .products
            .update_product(
                "skateboard".to_owned(),
                ProductUpdate {
                    name: created.record.name.clone(),
                    ..ProductUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.record, created.record);
        assert!(updated.record.updated_on.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn update_product_rejects_empty_and_invalid_input() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products
            .create_product(new_product("skateboard", &[]))
            .await?;

        let empty = ctx
            .products
            .update_product("skateboard".to_owned(), ProductUpdate::default())
            .await;

        assert!(
            matches!(empty, Err(ProductsServiceError::EmptyUpdate)),
            "expected EmptyUpdate, got {empty:?}"
        );

        let invalid = ctx
            .products
            .update_product(
                "skateboard".to_owned(),
                ProductUpdate {
                    sku: "skate board 2".to_owned(),
                    ..ProductUpdate::default()
                },
            )
            .await;

        assert!(
            matches!(invalid, Err(ProductsServiceError::InvalidSku(_))),
            "expected InvalidSku, got {invalid:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_product_unknown_sku_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .update_product(
                "scooter".to_owned(),
                ProductUpdate {
                    quantity: 5,
                    ..ProductUpdate::default()
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn update_product_to_taken_sku_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products.create_product(new_product("alpha", &[])).await?;
        ctx.products.create_product(new_product("bravo", &[])).await?;

        let result = ctx
            .products
            .update_product(
                "alpha".to_owned(),
                ProductUpdate {
                    sku: "bravo".to_owned(),
                    ..ProductUpdate::default()
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_unknown_sku_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.products.delete_product("scooter".to_owned()).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn archived_sku_can_be_reused() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products
            .create_product(new_product("skateboard", &[]))
            .await?;
        ctx.products
            .delete_product("skateboard".to_owned())
            .await?;

        let recreated = ctx
            .products
            .create_product(NewProduct {
                attributes: vec![NewAttribute {
                    name: "color".to_owned(),
                    values: vec!["red".to_owned()],
                }],
                ..new_product("skateboard", &[])
            })
            .await?;

        assert_eq!(recreated.record.sku, "skateboard");
        assert_eq!(recreated.attributes.len(), 1);

        Ok(())
    }
}
