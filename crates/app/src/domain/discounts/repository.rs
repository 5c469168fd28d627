//! Discounts Repository

use sqlx::{Postgres, Transaction, query, query_scalar_with, query_with};

use crate::{
    database::{RepositoryError, fetch_optional_record, list_total},
    domain::discounts::{
        data::NewDiscount,
        records::{DISCOUNT_COLUMNS, DiscountId, DiscountRecord},
    },
    filter::QueryFilter,
    mapping::RowLayout,
    query::{
        InsertBuilder, Selection, Statement, Table, UpdateBuilder, archive_query,
        filtered_list_query,
    },
};

static DISCOUNT_ROW: RowLayout = RowLayout {
    leading: &[],
    sets: &[&DISCOUNT_COLUMNS],
};

static LISTED_DISCOUNT_ROW: RowLayout = RowLayout {
    leading: &["total_count"],
    sets: &[&DISCOUNT_COLUMNS],
};

#[derive(Debug, Clone, Default)]
pub(crate) struct PgDiscountsRepository;

impl PgDiscountsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    fn selection() -> Selection {
        Selection {
            columns: DISCOUNT_COLUMNS.select_list("d"),
            from: Table::Discounts.aliased("d"),
            alias: "d",
        }
    }

    pub(crate) async fn get_discount(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        discount: DiscountId,
    ) -> Result<Option<DiscountRecord>, RepositoryError> {
        let statement = Statement::new(Self::selection().keyed_query("id"), vec![discount.into()]);

        fetch_optional_record(tx, &DISCOUNT_ROW, &statement).await
    }

    pub(crate) async fn list_discounts(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &QueryFilter,
    ) -> Result<(u64, Vec<DiscountRecord>), RepositoryError> {
        let selection = Self::selection();
        let statement = filtered_list_query(&selection, filter);

        let rows = query_with(statement.sql(), statement.arguments()?)
            .fetch_all(&mut **tx)
            .await?;

        let mut window_count = None;
        let mut discounts = Vec::with_capacity(rows.len());

        for row in &rows {
            let bound = LISTED_DISCOUNT_ROW.bind(row)?;

            window_count = Some(bound.leading::<i64>("total_count")?);
            discounts.push(bound.record::<DiscountRecord>()?);
        }

        let count = list_total(tx, &selection, filter, window_count).await?;

        Ok((count, discounts))
    }

    pub(crate) async fn create_discount(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        discount: &NewDiscount,
    ) -> Result<DiscountId, sqlx::Error> {
        let mut insert = InsertBuilder::new(Table::Discounts);

        insert
            .value("name", discount.name.as_str())
            .value("discount_type", discount.discount_type)
            .value("amount", discount.amount)
            .value("product_id", discount.product_id)
            .value("starts_on", discount.starts_on)
            .value("expires_on", discount.expires_on)
            .value("redemption_code", discount.redemption_code.clone())
            .value("max_uses", discount.max_uses)
            .value("login_required", discount.login_required);

        let statement = insert.build();

        query_scalar_with::<_, i64, _>(statement.sql(), statement.arguments()?)
            .fetch_one(&mut **tx)
            .await
            .map(DiscountId::from_i64)
    }

    /// Write the changed columns of `merged`. Returns `original` untouched when
    /// nothing changed.
    pub(crate) async fn update_discount(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        original: &DiscountRecord,
        merged: &DiscountRecord,
    ) -> Result<DiscountRecord, RepositoryError> {
        let mut update = UpdateBuilder::new(Table::Discounts);

        update
            .set_if_changed("name", &original.name, &merged.name)
            .set_if_changed("discount_type", &original.discount_type, &merged.discount_type)
            .set_if_changed("amount", &original.amount, &merged.amount)
            .set_if_changed("product_id", &original.product_id, &merged.product_id)
            .set_if_changed("starts_on", &original.starts_on, &merged.starts_on)
            .set_if_changed("expires_on", &original.expires_on, &merged.expires_on)
            .set_if_changed(
                "redemption_code",
                &original.redemption_code,
                &merged.redemption_code,
            )
            .set_if_changed("max_uses", &original.max_uses, &merged.max_uses)
            .set_if_changed(
                "login_required",
                &original.login_required,
                &merged.login_required,
            );

        let Some(statement) = update.build("id", original.id, &DISCOUNT_COLUMNS.column_list())
        else {
            return Ok(original.clone());
        };

        fetch_optional_record(tx, &DISCOUNT_ROW, &statement)
            .await?
            .ok_or(RepositoryError::Sql(sqlx::Error::RowNotFound))
    }

    pub(crate) async fn archive_discount(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        discount: DiscountId,
    ) -> Result<u64, sqlx::Error> {
        let sql = archive_query(Table::Discounts, "id");

        let rows_affected = query(&sql)
            .bind(discount.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}
