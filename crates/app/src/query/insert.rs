//! `INSERT` and archive statements.

use crate::query::{Params, SqlValue, Statement, Table};

/// Builds `INSERT ... RETURNING id` so the generated identity comes back with
/// the write.
#[derive(Debug)]
pub struct InsertBuilder {
    table: Table,
    columns: Vec<&'static str>,
    placeholders: Vec<String>,
    params: Params,
}

impl InsertBuilder {
    #[must_use]
    pub fn new(table: Table) -> Self {
        Self {
            table,
            columns: Vec::new(),
            placeholders: Vec::new(),
            params: Params::default(),
        }
    }

    pub fn value(&mut self, column: &'static str, value: impl Into<SqlValue>) -> &mut Self {
        self.placeholders.push(self.params.push(value));
        self.columns.push(column);

        self
    }

    #[must_use]
    pub fn build(self) -> Statement {
        let sql = format!(
            "INSERT INTO {table} ({columns}) VALUES ({placeholders}) RETURNING id",
            table = self.table.as_str(),
            columns = self.columns.join(", "),
            placeholders = self.placeholders.join(", "),
        );

        Statement::new(sql, self.params.into_inner())
    }
}

/// Soft delete: stamp `archived_on` instead of removing the row.
#[must_use]
pub fn archive_query(table: Table, column: &str) -> String {
    format!(
        "UPDATE {table} SET archived_on = NOW() WHERE {column} = $1 AND archived_on IS NULL",
        table = table.as_str(),
    )
}
