//! Attributes Repository

use sqlx::{Postgres, Transaction, query, query_scalar_with};

use crate::{
    database::{RepositoryError, fetch_optional_record, fetch_records},
    domain::{
        attributes::{
            data::Attribute,
            records::{
                ATTRIBUTE_COLUMNS, ATTRIBUTE_VALUE_COLUMNS, AttributeId, AttributeRecord,
                AttributeValueId, AttributeValueRecord,
            },
        },
        progenitors::records::ProgenitorId,
    },
    mapping::RowLayout,
    query::{InsertBuilder, Selection, Statement, Table, UpdateBuilder, archive_query},
};

static ATTRIBUTE_ROW: RowLayout = RowLayout {
    leading: &[],
    sets: &[&ATTRIBUTE_COLUMNS],
};

static ATTRIBUTE_VALUE_ROW: RowLayout = RowLayout {
    leading: &[],
    sets: &[&ATTRIBUTE_VALUE_COLUMNS],
};

#[derive(Debug, Clone, Default)]
pub(crate) struct PgAttributesRepository;

impl PgAttributesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_attribute(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        progenitor: ProgenitorId,
        name: &str,
    ) -> Result<AttributeId, sqlx::Error> {
        let mut insert = InsertBuilder::new(Table::ProductAttributes);

        insert
            .value("product_progenitor_id", progenitor)
            .value("name", name);

        let statement = insert.build();

        query_scalar_with::<_, i64, _>(statement.sql(), statement.arguments()?)
            .fetch_one(&mut **tx)
            .await
            .map(AttributeId::from_i64)
    }

    pub(crate) async fn create_value(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        attribute: AttributeId,
        value: &str,
    ) -> Result<AttributeValueId, sqlx::Error> {
        let mut insert = InsertBuilder::new(Table::ProductAttributeValues);

        insert
            .value("product_attribute_id", attribute)
            .value("value", value);

        let statement = insert.build();

        query_scalar_with::<_, i64, _>(statement.sql(), statement.arguments()?)
            .fetch_one(&mut **tx)
            .await
            .map(AttributeValueId::from_i64)
    }

    /// Active attributes of a progenitor with their active values, both in
    /// creation order.
    pub(crate) async fn attributes_for_progenitor(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        progenitor: ProgenitorId,
    ) -> Result<Vec<Attribute>, RepositoryError> {
        let attributes = Statement::new(
            format!(
                "SELECT {columns} FROM {attributes} \
                 WHERE a.product_progenitor_id = $1 AND a.archived_on IS NULL ORDER BY a.id",
                columns = ATTRIBUTE_COLUMNS.select_list("a"),
                attributes = Table::ProductAttributes.aliased("a"),
            ),
            vec![progenitor.into()],
        );

        let values = Statement::new(
            format!(
                "SELECT {columns} FROM {values} \
                 JOIN {attributes} ON a.id = v.product_attribute_id \
                 WHERE a.product_progenitor_id = $1 \
                 AND a.archived_on IS NULL AND v.archived_on IS NULL ORDER BY v.id",
                columns = ATTRIBUTE_VALUE_COLUMNS.select_list("v"),
                values = Table::ProductAttributeValues.aliased("v"),
                attributes = Table::ProductAttributes.aliased("a"),
            ),
            vec![progenitor.into()],
        );

        let attributes: Vec<AttributeRecord> =
            fetch_records(tx, &ATTRIBUTE_ROW, &attributes).await?;

        let values: Vec<AttributeValueRecord> =
            fetch_records(tx, &ATTRIBUTE_VALUE_ROW, &values).await?;

        Ok(attributes
            .into_iter()
            .map(|record| Attribute {
                values: values
                    .iter()
                    .filter(|value| value.attribute_id == record.id)
                    .cloned()
                    .collect(),
                record,
            })
            .collect())
    }

    pub(crate) async fn list_values(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        attribute: AttributeId,
    ) -> Result<Vec<AttributeValueRecord>, RepositoryError> {
        let statement = Statement::new(
            format!(
                "SELECT {columns} FROM {values} \
                 WHERE v.product_attribute_id = $1 AND v.archived_on IS NULL ORDER BY v.id",
                columns = ATTRIBUTE_VALUE_COLUMNS.select_list("v"),
                values = Table::ProductAttributeValues.aliased("v"),
            ),
            vec![attribute.into()],
        );

        fetch_records(tx, &ATTRIBUTE_VALUE_ROW, &statement).await
    }

    pub(crate) async fn get_value(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        value: AttributeValueId,
    ) -> Result<Option<AttributeValueRecord>, RepositoryError> {
        let selection = Selection {
            columns: ATTRIBUTE_VALUE_COLUMNS.select_list("v"),
            from: Table::ProductAttributeValues.aliased("v"),
            alias: "v",
        };

        let statement = Statement::new(selection.keyed_query("id"), vec![value.into()]);

        fetch_optional_record(tx, &ATTRIBUTE_VALUE_ROW, &statement).await
    }

    /// Write the changed columns of `merged`. Returns `original` untouched when
    /// nothing changed.
    pub(crate) async fn update_value(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        original: &AttributeValueRecord,
        merged: &AttributeValueRecord,
    ) -> Result<AttributeValueRecord, RepositoryError> {
        let mut update = UpdateBuilder::new(Table::ProductAttributeValues);

        update.set_if_changed("value", &original.value, &merged.value);

        let Some(statement) = update.build(
            "id",
            original.id,
            &ATTRIBUTE_VALUE_COLUMNS.column_list(),
        ) else {
            return Ok(original.clone());
        };

        fetch_optional_record(tx, &ATTRIBUTE_VALUE_ROW, &statement)
            .await?
            .ok_or(RepositoryError::Sql(sqlx::Error::RowNotFound))
    }

    pub(crate) async fn archive_value(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        value: AttributeValueId,
    ) -> Result<u64, sqlx::Error> {
        let sql = archive_query(Table::ProductAttributeValues, "id");

        let rows_affected = query(&sql)
            .bind(value.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}
