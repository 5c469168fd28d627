//! Bound values and statements.

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{Arguments, postgres::PgArguments};

use crate::ids::TypedId;

/// A single positional argument.
///
/// Every variant carries an `Option` so `NULL` is still sent with a concrete
/// type, which Postgres needs to plan the statement.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    BigInt(Option<i64>),
    Int(Option<i32>),
    Double(Option<f64>),
    Text(Option<String>),
    Bool(Option<bool>),
    Timestamp(Option<Timestamp>),
}

impl SqlValue {
    fn add_to(self, arguments: &mut PgArguments) -> Result<(), sqlx::Error> {
        match self {
            Self::BigInt(value) => arguments.add(value),
            Self::Int(value) => arguments.add(value),
            Self::Double(value) => arguments.add(value),
            Self::Text(value) => arguments.add(value),
            Self::Bool(value) => arguments.add(value),
            Self::Timestamp(value) => arguments.add(value.map(SqlxTimestamp::from)),
        }
        .map_err(sqlx::Error::Encode)
    }
}

macro_rules! sql_value_from {
    ($variant:ident, $ty:ty) => {
        impl From<$ty> for SqlValue {
            fn from(value: $ty) -> Self {
                Self::$variant(Some(value))
            }
        }

        impl From<Option<$ty>> for SqlValue {
            fn from(value: Option<$ty>) -> Self {
                Self::$variant(value)
            }
        }
    };
}

sql_value_from!(BigInt, i64);
sql_value_from!(Int, i32);
sql_value_from!(Double, f64);
sql_value_from!(Text, String);
sql_value_from!(Bool, bool);
sql_value_from!(Timestamp, Timestamp);

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        Self::Text(Some(value.to_owned()))
    }
}

impl<T> From<TypedId<T>> for SqlValue {
    fn from(value: TypedId<T>) -> Self {
        Self::BigInt(Some(value.into_i64()))
    }
}

impl<T> From<Option<TypedId<T>>> for SqlValue {
    fn from(value: Option<TypedId<T>>) -> Self {
        Self::BigInt(value.map(TypedId::into_i64))
    }
}

/// SQL text plus its positional arguments (`$1`, `$2`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql: String,
    args: Vec<SqlValue>,
}

impl Statement {
    #[must_use]
    pub fn new(sql: String, args: Vec<SqlValue>) -> Self {
        Self { sql, args }
    }

    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    #[must_use]
    pub fn args(&self) -> &[SqlValue] {
        &self.args
    }

    /// Encode the arguments for use with `sqlx::query_with` and friends.
    ///
    /// # Errors
    ///
    /// Returns [`sqlx::Error::Encode`] when a value cannot be encoded.
    pub fn arguments(&self) -> Result<PgArguments, sqlx::Error> {
        let mut arguments = PgArguments::default();

        for value in &self.args {
            value.clone().add_to(&mut arguments)?;
        }

        Ok(arguments)
    }
}

/// Accumulates arguments and hands back the placeholder for each one.
#[derive(Debug, Default)]
pub(crate) struct Params(Vec<SqlValue>);

impl Params {
    pub(crate) fn push(&mut self, value: impl Into<SqlValue>) -> String {
        self.0.push(value.into());

        format!("${}", self.0.len())
    }

    pub(crate) fn into_inner(self) -> Vec<SqlValue> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_number_placeholders_in_push_order() {
        let mut params = Params::default();

        assert_eq!(params.push("a"), "$1");
        assert_eq!(params.push(2_i64), "$2");
        assert_eq!(params.push(None::<String>), "$3");

        assert_eq!(
            params.into_inner(),
            vec![
                SqlValue::Text(Some("a".to_owned())),
                SqlValue::BigInt(Some(2)),
                SqlValue::Text(None),
            ]
        );
    }

    #[test]
    fn statement_arguments_encode_every_value() -> Result<(), sqlx::Error> {
        let statement = Statement::new(
            "SELECT $1, $2, $3".to_owned(),
            vec![
                SqlValue::from(1.5_f64),
                SqlValue::from(Timestamp::UNIX_EPOCH),
                SqlValue::Bool(None),
            ],
        );

        let arguments = statement.arguments()?;

        assert_eq!(arguments.len(), 3);

        Ok(())
    }
}
