//! Attributes service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::attributes::{
        data::AttributeValueUpdate,
        errors::AttributesServiceError,
        records::{AttributeId, AttributeValueId, AttributeValueRecord},
        repository::PgAttributesRepository,
    },
    existence::{row_exists, value_exists_for_attribute},
    query::Table,
};

#[derive(Debug, Clone)]
pub struct PgAttributesService {
    db: Db,
    repository: PgAttributesRepository,
}

impl PgAttributesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgAttributesRepository::new(),
        }
    }
}

#[async_trait]
impl AttributesService for PgAttributesService {
    #[tracing::instrument(
        name = "attributes.service.list_values",
        skip(self),
        fields(attribute_id = %attribute),
        err
    )]
    async fn list_values(
        &self,
        attribute: AttributeId,
    ) -> Result<Vec<AttributeValueRecord>, AttributesServiceError> {
        let mut tx = self.db.begin().await?;

        if !row_exists(&mut *tx, Table::ProductAttributes, "id", attribute).await? {
            return Err(AttributesServiceError::AttributeNotFound);
        }

        let values = self.repository.list_values(&mut tx, attribute).await?;

        tx.commit().await?;

        Ok(values)
    }

    #[tracing::instrument(
        name = "attributes.service.update_value",
        skip(self, update),
        fields(value_id = %value),
        err
    )]
    async fn update_value(
        &self,
        value: AttributeValueId,
        update: AttributeValueUpdate,
    ) -> Result<AttributeValueRecord, AttributesServiceError> {
        let mut tx = self.db.begin().await?;

        if !row_exists(&mut *tx, Table::ProductAttributeValues, "id", value).await? {
            return Err(AttributesServiceError::ValueNotFound);
        }

        if update.is_empty() {
            return Err(AttributesServiceError::EmptyUpdate);
        }

        let existing = self
            .repository
            .get_value(&mut tx, value)
            .await?
            .ok_or(AttributesServiceError::ValueNotFound)?;

        let merged = update.merge(&existing);

        if merged.value != existing.value
            && value_exists_for_attribute(
                &mut *tx,
                existing.attribute_id.into_i64(),
                &merged.value,
            )
            .await?
        {
            return Err(AttributesServiceError::AlreadyExists);
        }

        let updated = self
            .repository
            .update_value(&mut tx, &existing, &merged)
            .await?;

        tx.commit().await?;

        info!(value_id = %updated.id, "updated attribute value");

        Ok(updated)
    }

    #[tracing::instrument(
        name = "attributes.service.archive_value",
        skip(self),
        fields(value_id = %value),
        err
    )]
    async fn archive_value(&self, value: AttributeValueId) -> Result<(), AttributesServiceError> {
        let mut tx = self.db.begin().await?;

        if !row_exists(&mut *tx, Table::ProductAttributeValues, "id", value).await? {
            return Err(AttributesServiceError::ValueNotFound);
        }

        let rows_affected = self.repository.archive_value(&mut tx, value).await?;

        if rows_affected == 0 {
            return Err(AttributesServiceError::ValueNotFound);
        }

        tx.commit().await?;

        info!(value_id = %value, "archived attribute value");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait AttributesService: Send + Sync {
    /// Active values of an active attribute.
    async fn list_values(
        &self,
        attribute: AttributeId,
    ) -> Result<Vec<AttributeValueRecord>, AttributesServiceError>;

    /// Rename a value, keeping values unique per attribute.
    async fn update_value(
        &self,
        value: AttributeValueId,
        update: AttributeValueUpdate,
    ) -> Result<AttributeValueRecord, AttributesServiceError>;

    /// Soft delete a value.
    async fn archive_value(&self, value: AttributeValueId) -> Result<(), AttributesServiceError>;
}
