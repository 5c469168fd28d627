//! Products Repository

use sqlx::{Postgres, Transaction, postgres::PgRow, query, query_scalar_with, query_with};

use crate::{
    database::{RepositoryError, fetch_optional_record, list_total},
    domain::{
        products::{
            data::{NewProduct, Product},
            records::{PRODUCT_COLUMNS, ProductId, ProductRecord},
        },
        progenitors::records::{PROGENITOR_COLUMNS, ProgenitorId, ProgenitorRecord},
    },
    filter::QueryFilter,
    mapping::RowLayout,
    query::{
        InsertBuilder, Selection, SqlValue, Statement, Table, UpdateBuilder, archive_query,
        filtered_list_query,
    },
};

/// Joined reads: product columns, then progenitor columns.
static PRODUCT_ROW: RowLayout = RowLayout {
    leading: &[],
    sets: &[&PRODUCT_COLUMNS, &PROGENITOR_COLUMNS],
};

static LISTED_PRODUCT_ROW: RowLayout = RowLayout {
    leading: &["total_count"],
    sets: &[&PRODUCT_COLUMNS, &PROGENITOR_COLUMNS],
};

static PRODUCT_ONLY_ROW: RowLayout = RowLayout {
    leading: &[],
    sets: &[&PRODUCT_COLUMNS],
};

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    fn selection() -> Selection {
        Selection {
            columns: format!(
                "{}, {}",
                PRODUCT_COLUMNS.select_list("p"),
                PROGENITOR_COLUMNS.select_list("g"),
            ),
            from: format!(
                "{} JOIN {} ON g.id = p.product_progenitor_id",
                Table::Products.aliased("p"),
                Table::ProductProgenitors.aliased("g"),
            ),
            alias: "p",
        }
    }

    fn joined(layout: &'static RowLayout, row: &PgRow) -> Result<Product, RepositoryError> {
        let bound = layout.bind(row)?;

        Ok(Product {
            record: bound.record::<ProductRecord>()?,
            progenitor: bound.record::<ProgenitorRecord>()?,
            attributes: Vec::new(),
        })
    }

    async fn get_product_by(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        column: &'static str,
        key: SqlValue,
    ) -> Result<Option<Product>, RepositoryError> {
        let statement = Statement::new(Self::selection().keyed_query(column), vec![key]);

        let row = query_with(statement.sql(), statement.arguments()?)
            .fetch_optional(&mut **tx)
            .await?;

        row.as_ref()
            .map(|row| Self::joined(&PRODUCT_ROW, row))
            .transpose()
    }

    pub(crate) async fn get_product_by_sku(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        sku: &str,
    ) -> Result<Option<Product>, RepositoryError> {
        self.get_product_by(tx, "sku", sku.into()).await
    }

    pub(crate) async fn get_product_by_id(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<Option<Product>, RepositoryError> {
        self.get_product_by(tx, "id", product.into()).await
    }

    /// One page of active products and the number matching the filter.
    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &QueryFilter,
    ) -> Result<(u64, Vec<Product>), RepositoryError> {
        let selection = Self::selection();
        let statement = filtered_list_query(&selection, filter);

        let rows = query_with(statement.sql(), statement.arguments()?)
            .fetch_all(&mut **tx)
            .await?;

        let mut window_count = None;
        let mut products = Vec::with_capacity(rows.len());

        for row in &rows {
            window_count = Some(
                LISTED_PRODUCT_ROW
                    .bind(row)?
                    .leading::<i64>("total_count")?,
            );

            products.push(Self::joined(&LISTED_PRODUCT_ROW, row)?);
        }

        let count = list_total(tx, &selection, filter, window_count).await?;

        Ok((count, products))
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        progenitor: ProgenitorId,
        product: &NewProduct,
    ) -> Result<ProductId, sqlx::Error> {
        let mut insert = InsertBuilder::new(Table::Products);

        insert
            .value("product_progenitor_id", progenitor)
            .value("sku", product.sku.as_str())
            .value("name", product.name.as_str())
            .value("upc", product.upc.clone())
            .value("quantity", product.quantity)
            .value("price", product.price)
            .value("cost", product.cost);

        let statement = insert.build();

        query_scalar_with::<_, i64, _>(statement.sql(), statement.arguments()?)
            .fetch_one(&mut **tx)
            .await
            .map(ProductId::from_i64)
    }

    /// Write the changed columns of `merged`. Returns `original` untouched when
    /// nothing changed.
    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        original: &ProductRecord,
        merged: &ProductRecord,
    ) -> Result<ProductRecord, RepositoryError> {
        let mut update = UpdateBuilder::new(Table::Products);

        update
            .set_if_changed("sku", &original.sku, &merged.sku)
            .set_if_changed("name", &original.name, &merged.name)
            .set_if_changed("upc", &original.upc, &merged.upc)
            .set_if_changed("quantity", &original.quantity, &merged.quantity)
            .set_if_changed("price", &original.price, &merged.price)
            .set_if_changed("cost", &original.cost, &merged.cost);

        let Some(statement) = update.build("id", original.id, &PRODUCT_COLUMNS.column_list())
        else {
            return Ok(original.clone());
        };

        fetch_optional_record(tx, &PRODUCT_ONLY_ROW, &statement)
            .await?
            .ok_or(RepositoryError::Sql(sqlx::Error::RowNotFound))
    }

    pub(crate) async fn archive_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        sku: &str,
    ) -> Result<u64, sqlx::Error> {
        let sql = archive_query(Table::Products, "sku");

        let rows_affected = query(&sql)
            .bind(sku)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}
