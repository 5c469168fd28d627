//! Database connection management

use std::time::Duration;

use sqlx::{
    PgPool, Postgres, Transaction, postgres::PgPoolOptions, query, query_scalar_with, query_with,
};
use thiserror::Error;
use tracing::debug;

use crate::{
    filter::QueryFilter,
    mapping::{MappedRecord, MappingError, RowLayout},
    query::{Selection, Statement, filtered_count_query},
};

/// SQL used to bound every statement in a transaction.
pub const SET_STATEMENT_TIMEOUT_SQL: &str = "SELECT set_config('statement_timeout', $1, true)";

/// Failure of a repository read: either the driver or the row mapping.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Sql(#[from] sqlx::Error),

    #[error(transparent)]
    Mapping(#[from] MappingError),
}

/// Pool and per-transaction limits.
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub statement_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
    statement_timeout: Duration,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool, statement_timeout: Duration) -> Self {
        Self {
            pool,
            statement_timeout,
        }
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Begin a transaction with the statement timeout applied.
    ///
    /// # Errors
    ///
    /// Returns an error when acquiring a connection, starting the transaction
    /// or setting the timeout fails.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let timeout = format!("{}ms", self.statement_timeout.as_millis());

        query(SET_STATEMENT_TIMEOUT_SQL)
            .bind(&timeout)
            .execute(&mut *tx)
            .await?;

        debug!(statement_timeout = %timeout, "transaction started");

        Ok(tx)
    }
}

/// Run `statement` and map every row through `layout`.
pub(crate) async fn fetch_records<R: MappedRecord>(
    tx: &mut Transaction<'_, Postgres>,
    layout: &'static RowLayout,
    statement: &Statement,
) -> Result<Vec<R>, RepositoryError> {
    let rows = query_with(statement.sql(), statement.arguments()?)
        .fetch_all(&mut **tx)
        .await?;

    let mut records = Vec::with_capacity(rows.len());

    for row in &rows {
        records.push(layout.bind(row)?.record()?);
    }

    Ok(records)
}

/// Run `statement` and map the row, if any, through `layout`.
pub(crate) async fn fetch_optional_record<R: MappedRecord>(
    tx: &mut Transaction<'_, Postgres>,
    layout: &'static RowLayout,
    statement: &Statement,
) -> Result<Option<R>, RepositoryError> {
    let row = query_with(statement.sql(), statement.arguments()?)
        .fetch_optional(&mut **tx)
        .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    Ok(Some(layout.bind(&row)?.record()?))
}

/// Total rows a list would report for `filter`.
///
/// The window count travels on the returned rows, so an empty page needs
/// its own count. Page one being empty means there are no matches at all.
pub(crate) async fn list_total(
    tx: &mut Transaction<'_, Postgres>,
    selection: &Selection,
    filter: &QueryFilter,
    window_count: Option<i64>,
) -> Result<u64, sqlx::Error> {
    if let Some(count) = window_count {
        return Ok(count.unsigned_abs());
    }

    if filter.page <= 1 {
        return Ok(0);
    }

    let statement = filtered_count_query(selection, filter);

    query_scalar_with::<_, i64, _>(statement.sql(), statement.arguments()?)
        .fetch_one(&mut **tx)
        .await
        .map(i64::unsigned_abs)
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect(&settings.url)
        .await
}
