//! Discounts service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::discounts::{
        data::{DiscountUpdate, NewDiscount},
        errors::DiscountsServiceError,
        records::{DiscountId, DiscountRecord},
        repository::PgDiscountsRepository,
    },
    existence::row_exists,
    filter::{Page, QueryFilter},
    query::Table,
    rounding::round_stored,
};

#[derive(Debug, Clone)]
pub struct PgDiscountsService {
    db: Db,
    repository: PgDiscountsRepository,
}

impl PgDiscountsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgDiscountsRepository::new(),
        }
    }
}

#[async_trait]
impl DiscountsService for PgDiscountsService {
    #[tracing::instrument(
        name = "discounts.service.get_discount",
        skip(self),
        fields(discount_id = %discount),
        err
    )]
    async fn get_discount(
        &self,
        discount: DiscountId,
    ) -> Result<DiscountRecord, DiscountsServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self
            .repository
            .get_discount(&mut tx, discount)
            .await?
            .ok_or(DiscountsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(record)
    }

    #[tracing::instrument(
        name = "discounts.service.list_discounts",
        skip(self),
        fields(page = filter.page, limit = filter.limit),
        err
    )]
    async fn list_discounts(
        &self,
        filter: QueryFilter,
    ) -> Result<Page<DiscountRecord>, DiscountsServiceError> {
        let mut tx = self.db.begin().await?;

        let (count, discounts) = self.repository.list_discounts(&mut tx, &filter).await?;

        tx.commit().await?;

        Ok(Page::new(&filter, count, discounts))
    }

    #[tracing::instrument(
        name = "discounts.service.create_discount",
        skip(self, discount),
        fields(discount_type = %discount.discount_type),
        err
    )]
    async fn create_discount(
        &self,
        discount: NewDiscount,
    ) -> Result<DiscountRecord, DiscountsServiceError> {
        let discount = NewDiscount {
            amount: round_stored(discount.amount),
            ..discount
        };

        let mut tx = self.db.begin().await?;

        let id = self.repository.create_discount(&mut tx, &discount).await?;

        let record = self
            .repository
            .get_discount(&mut tx, id)
            .await?
            .ok_or(DiscountsServiceError::NotFound)?;

        tx.commit().await?;

        info!(discount_id = %record.id, "created discount");

        Ok(record)
    }

    #[tracing::instrument(
        name = "discounts.service.update_discount",
        skip(self, update),
        fields(discount_id = %discount),
        err
    )]
    async fn update_discount(
        &self,
        discount: DiscountId,
        update: DiscountUpdate,
    ) -> Result<DiscountRecord, DiscountsServiceError> {
        let mut tx = self.db.begin().await?;

        if !row_exists(&mut *tx, Table::Discounts, "id", discount).await? {
            return Err(DiscountsServiceError::NotFound);
        }

        if update.is_empty() {
            return Err(DiscountsServiceError::EmptyUpdate);
        }

        let existing = self
            .repository
            .get_discount(&mut tx, discount)
            .await?
            .ok_or(DiscountsServiceError::NotFound)?;

        let merged = update.merge(&existing);

        let updated = self
            .repository
            .update_discount(&mut tx, &existing, &merged)
            .await?;

        tx.commit().await?;

        info!(discount_id = %updated.id, "updated discount");

        Ok(updated)
    }

    #[tracing::instrument(
        name = "discounts.service.archive_discount",
        skip(self),
        fields(discount_id = %discount),
        err
    )]
    async fn archive_discount(&self, discount: DiscountId) -> Result<(), DiscountsServiceError> {
        let mut tx = self.db.begin().await?;

        if !row_exists(&mut *tx, Table::Discounts, "id", discount).await? {
            return Err(DiscountsServiceError::NotFound);
        }

        let rows_affected = self.repository.archive_discount(&mut tx, discount).await?;

        if rows_affected == 0 {
            return Err(DiscountsServiceError::NotFound);
        }

        tx.commit().await?;

        info!(discount_id = %discount, "archived discount");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait DiscountsService: Send + Sync {
    /// Retrieve a single active discount.
    async fn get_discount(
        &self,
        discount: DiscountId,
    ) -> Result<DiscountRecord, DiscountsServiceError>;

    /// Retrieve one page of discounts.
    async fn list_discounts(
        &self,
        filter: QueryFilter,
    ) -> Result<Page<DiscountRecord>, DiscountsServiceError>;

    /// Creates a discount.
    async fn create_discount(
        &self,
        discount: NewDiscount,
    ) -> Result<DiscountRecord, DiscountsServiceError>;

    /// Overlay the supplied fields onto the discount, writing only changed
    /// columns.
    async fn update_discount(
        &self,
        discount: DiscountId,
        update: DiscountUpdate,
    ) -> Result<DiscountRecord, DiscountsServiceError>;

    /// Archives the discount.
    async fn archive_discount(&self, discount: DiscountId) -> Result<(), DiscountsServiceError>;
}
