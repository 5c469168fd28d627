//! Read queries.

use crate::{
    filter::QueryFilter,
    query::{Params, Statement, Table},
};

/// What a read selects and from where.
///
/// `alias` is the table whose id, timestamps and archive flag drive filtering
/// and ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub columns: String,
    pub from: String,
    pub alias: &'static str,
}

impl Selection {
    /// `SELECT` of this selection keyed on one column of the primary alias.
    #[must_use]
    pub fn keyed_query(&self, column: &str) -> String {
        format!(
            "SELECT {columns} FROM {from} WHERE {alias}.{column} = $1 AND {alias}.archived_on IS NULL",
            columns = self.columns,
            from = self.from,
            alias = self.alias,
        )
    }
}

#[must_use]
pub fn existence_query(table: Table, column: &str) -> String {
    format!(
        "SELECT EXISTS(SELECT 1 FROM {table} WHERE {column} = $1 AND archived_on IS NULL)",
        table = table.as_str(),
    )
}

/// Paginated list query with a `total_count` window column ahead of the
/// selected columns.
#[must_use]
pub fn filtered_list_query(selection: &Selection, filter: &QueryFilter) -> Statement {
    let alias = selection.alias;
    let mut params = Params::default();

    let mut sql = format!(
        "SELECT COUNT(*) OVER () AS total_count, {columns} FROM {from} WHERE {alias}.archived_on IS NULL",
        columns = selection.columns,
        from = selection.from,
    );

    push_time_bounds(&mut sql, &mut params, alias, filter);

    let limit = params.push(i64::from(filter.limit));
    let offset = params.push(filter.offset());

    sql.push_str(&format!(" ORDER BY {alias}.id LIMIT {limit} OFFSET {offset}"));

    Statement::new(sql, params.into_inner())
}

/// Rows matching `filter` across all pages. Used when a page lies past the
/// last row and so carries no window count.
#[must_use]
pub fn filtered_count_query(selection: &Selection, filter: &QueryFilter) -> Statement {
    let alias = selection.alias;
    let mut params = Params::default();

    let mut sql = format!(
        "SELECT COUNT(*) FROM {from} WHERE {alias}.archived_on IS NULL",
        from = selection.from,
    );

    push_time_bounds(&mut sql, &mut params, alias, filter);

    Statement::new(sql, params.into_inner())
}

fn push_time_bounds(sql: &mut String, params: &mut Params, alias: &str, filter: &QueryFilter) {
    let predicates = [
        ("created_on", ">", filter.created_after),
        ("created_on", "<", filter.created_before),
        ("updated_on", ">", filter.updated_after),
        ("updated_on", "<", filter.updated_before),
    ];

    for (column, operator, bound) in predicates {
        if let Some(bound) = bound {
            let placeholder = params.push(bound);

            sql.push_str(&format!(" AND {alias}.{column} {operator} {placeholder}"));
        }
    }
}
