//! Existence checks against active rows.

use sqlx::{PgExecutor, query_scalar_with};

use crate::query::{SqlValue, Statement, Table, existence_query};

/// Whether an unarchived row of `table` has `column = value`.
///
/// A driver "no rows" result counts as `false`.
///
/// # Errors
///
/// Returns any other driver error.
pub async fn row_exists<'e, E>(
    executor: E,
    table: Table,
    column: &'static str,
    value: impl Into<SqlValue>,
) -> Result<bool, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let statement = Statement::new(existence_query(table, column), vec![value.into()]);

    scalar_exists(executor, &statement).await
}

/// Whether `value` is already an active value of `attribute`.
///
/// # Errors
///
/// Returns any driver error other than "no rows".
pub async fn value_exists_for_attribute<'e, E>(
    executor: E,
    attribute: i64,
    value: &str,
) -> Result<bool, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let statement = Statement::new(
        format!(
            "SELECT EXISTS(SELECT 1 FROM {table} WHERE product_attribute_id = $1 AND value = $2 AND archived_on IS NULL)",
            table = Table::ProductAttributeValues.as_str(),
        ),
        vec![attribute.into(), value.into()],
    );

    scalar_exists(executor, &statement).await
}

async fn scalar_exists<'e, E>(executor: E, statement: &Statement) -> Result<bool, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let result = query_scalar_with::<_, bool, _>(statement.sql(), statement.arguments()?)
        .fetch_one(executor)
        .await;

    match result {
        Ok(exists) => Ok(exists),
        Err(sqlx::Error::RowNotFound) => Ok(false),
        Err(error) => Err(error),
    }
}
