//! Dynamic `UPDATE` construction.

use crate::query::{Params, SqlValue, Statement, Table};

/// Collects the columns that actually changed between an original record and
/// its merged replacement.
#[derive(Debug)]
pub struct UpdateBuilder {
    table: Table,
    assignments: Vec<String>,
    changed: Vec<&'static str>,
    params: Params,
}

impl UpdateBuilder {
    #[must_use]
    pub fn new(table: Table) -> Self {
        Self {
            table,
            assignments: Vec::new(),
            changed: Vec::new(),
            params: Params::default(),
        }
    }

    pub fn set_if_changed<V>(&mut self, column: &'static str, original: &V, merged: &V) -> &mut Self
    where
        V: PartialEq + Clone + Into<SqlValue>,
    {
        if original != merged {
            let placeholder = self.params.push(merged.clone());

            self.assignments.push(format!("{column} = {placeholder}"));
            self.changed.push(column);
        }

        self
    }

    #[must_use]
    pub fn changed_columns(&self) -> &[&'static str] {
        &self.changed
    }

    /// Finish the statement, or `None` when no column changed.
    #[must_use]
    pub fn build(
        mut self,
        key_column: &'static str,
        key: impl Into<SqlValue>,
        returning: &str,
    ) -> Option<Statement> {
        if self.assignments.is_empty() {
            return None;
        }

        let key = self.params.push(key);

        let sql = format!(
            "UPDATE {table} SET {assignments}, updated_on = NOW() \
             WHERE {key_column} = {key} AND archived_on IS NULL RETURNING {returning}",
            table = self.table.as_str(),
            assignments = self.assignments.join(", "),
        );

        Some(Statement::new(sql, self.params.into_inner()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_record_builds_nothing() {
        let mut builder = UpdateBuilder::new(Table::Products);

        builder
            .set_if_changed("name", &"skateboard".to_owned(), &"skateboard".to_owned())
            .set_if_changed("quantity", &3_i32, &3_i32);

        assert!(builder.changed_columns().is_empty());
        assert!(builder.build("id", 1_i64, "id").is_none());
    }

    #[test]
    fn only_changed_columns_are_assigned() {
        let mut builder = UpdateBuilder::new(Table::Products);

        builder
            .set_if_changed("name", &"old".to_owned(), &"new".to_owned())
            .set_if_changed("quantity", &3_i32, &3_i32)
            .set_if_changed("price", &1.0_f64, &2.5_f64);

        assert_eq!(builder.changed_columns(), &["name", "price"]);

        let statement = builder.build("id", 7_i64, "id, name");

        assert_eq!(
            statement.as_ref().map(Statement::sql),
            Some(
                "UPDATE products SET name = $1, price = $2, updated_on = NOW() \
                 WHERE id = $3 AND archived_on IS NULL RETURNING id, name"
            )
        );
        assert_eq!(
            statement.as_ref().map(Statement::args),
            Some(
                [
                    SqlValue::Text(Some("new".to_owned())),
                    SqlValue::Double(Some(2.5)),
                    SqlValue::BigInt(Some(7)),
                ]
                .as_slice()
            )
        );
    }

    #[test]
    fn clearing_a_nullable_column_binds_a_typed_null() {
        let mut builder = UpdateBuilder::new(Table::Discounts);

        builder.set_if_changed("max_uses", &Some(3_i32), &None);

        let statement = builder.build("id", 1_i64, "id");

        assert_eq!(
            statement.as_ref().and_then(|s| s.args().first()),
            Some(&SqlValue::Int(None))
        );
    }
}
