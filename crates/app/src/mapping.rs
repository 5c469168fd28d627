//! Ordinal row mapping.
//!
//! Each record declares its columns once as a [`ColumnSet`]. Queries render
//! their select lists from those sets and rows are read back by the same
//! ordinals, so a query and its mapping cannot drift apart silently: binding a
//! row whose columns differ from the expected [`RowLayout`] fails with a
//! [`MappingError`].

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{Column as _, Decode, Postgres, Row, Type, postgres::PgRow};
use thiserror::Error;

use crate::query::Table;

#[derive(Debug, Error)]
pub enum MappingError {
    #[error("expected {expected} columns, row has {actual}")]
    ColumnCount { expected: usize, actual: usize },

    #[error("column {ordinal} should be `{expected}`, row has `{actual}`")]
    ColumnName {
        ordinal: usize,
        expected: &'static str,
        actual: String,
    },

    #[error("`{table}` has no column `{column}`")]
    UnknownColumn {
        table: &'static str,
        column: &'static str,
    },

    #[error("column `{column}` read with the wrong nullability (declared nullable: {nullable})")]
    Nullability { column: &'static str, nullable: bool },

    #[error("layout has no `{0}` section")]
    MissingSection(&'static str),

    #[error("failed to decode column `{column}`")]
    Decode {
        column: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("stored value `{value}` is not valid for `{column}`")]
    InvalidValue { column: &'static str, value: String },
}

/// One column and whether it may hold `NULL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub nullable: bool,
}

impl Column {
    #[must_use]
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            nullable: false,
        }
    }

    #[must_use]
    pub const fn nullable(name: &'static str) -> Self {
        Self {
            name,
            nullable: true,
        }
    }
}

/// The ordered columns of one table.
#[derive(Debug, PartialEq, Eq)]
pub struct ColumnSet {
    pub table: Table,
    pub columns: &'static [Column],
}

impl ColumnSet {
    /// `alias.col, alias.col, ...` in declaration order.
    #[must_use]
    pub fn select_list(&self, alias: &str) -> String {
        self.columns
            .iter()
            .map(|column| format!("{alias}.{}", column.name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Bare column names, for `RETURNING` clauses.
    #[must_use]
    pub fn column_list(&self) -> String {
        self.columns
            .iter()
            .map(|column| column.name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    fn position(&self, name: &'static str) -> Result<(usize, &Column), MappingError> {
        self.columns
            .iter()
            .enumerate()
            .find(|(_, column)| column.name == name)
            .ok_or(MappingError::UnknownColumn {
                table: self.table.as_str(),
                column: name,
            })
    }
}

/// A record that can be read from its own [`ColumnSet`].
pub trait MappedRecord: Sized {
    const COLUMNS: &'static ColumnSet;

    /// # Errors
    ///
    /// Returns a [`MappingError`] when a column is missing or fails to decode.
    fn from_cursor(cursor: &RowCursor<'_>) -> Result<Self, MappingError>;
}

/// Expected shape of a result row: optional leading columns, then each column
/// set in order.
#[derive(Debug)]
pub struct RowLayout {
    pub leading: &'static [&'static str],
    pub sets: &'static [&'static ColumnSet],
}

impl RowLayout {
    #[must_use]
    pub fn width(&self) -> usize {
        self.leading.len() + self.sets.iter().map(|set| set.len()).sum::<usize>()
    }

    fn expected_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.leading.iter().copied().chain(
            self.sets
                .iter()
                .flat_map(|set| set.columns.iter().map(|column| column.name)),
        )
    }

    /// Check column names by ordinal.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::ColumnCount`] or [`MappingError::ColumnName`]
    /// on the first difference.
    pub fn verify(&self, names: &[&str]) -> Result<(), MappingError> {
        let expected = self.width();

        if names.len() != expected {
            return Err(MappingError::ColumnCount {
                expected,
                actual: names.len(),
            });
        }

        for (ordinal, (expected, actual)) in self.expected_names().zip(names).enumerate() {
            if expected != *actual {
                return Err(MappingError::ColumnName {
                    ordinal,
                    expected,
                    actual: (*actual).to_owned(),
                });
            }
        }

        Ok(())
    }

    /// Verify `row` against this layout.
    ///
    /// # Errors
    ///
    /// Returns a [`MappingError`] when the row does not match.
    pub fn bind<'r>(&'static self, row: &'r PgRow) -> Result<BoundRow<'r>, MappingError> {
        let names: Vec<&str> = row.columns().iter().map(|column| column.name()).collect();

        self.verify(&names)?;

        Ok(BoundRow { row, layout: self })
    }
}

/// A row checked against a [`RowLayout`].
#[derive(Debug)]
pub struct BoundRow<'r> {
    row: &'r PgRow,
    layout: &'static RowLayout,
}

impl<'r> BoundRow<'r> {
    /// Read one of the leading columns.
    ///
    /// # Errors
    ///
    /// Returns a [`MappingError`] when the column is not a leading column or
    /// fails to decode.
    pub fn leading<T>(&self, name: &'static str) -> Result<T, MappingError>
    where
        T: Decode<'r, Postgres> + Type<Postgres>,
    {
        let ordinal = self
            .layout
            .leading
            .iter()
            .position(|leading| *leading == name)
            .ok_or(MappingError::MissingSection(name))?;

        self.row
            .try_get(ordinal)
            .map_err(|source| MappingError::Decode {
                column: name,
                source,
            })
    }

    /// Cursor over the section belonging to `set`.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::MissingSection`] when the layout does not
    /// include `set`.
    pub fn section(&self, set: &'static ColumnSet) -> Result<RowCursor<'r>, MappingError> {
        let mut offset = self.layout.leading.len();

        for candidate in self.layout.sets {
            if *candidate == set {
                return Ok(RowCursor {
                    row: self.row,
                    set,
                    offset,
                });
            }

            offset += candidate.len();
        }

        Err(MappingError::MissingSection(set.table.as_str()))
    }

    /// Map the section for `R`.
    ///
    /// # Errors
    ///
    /// Returns a [`MappingError`] when the section is missing or invalid.
    pub fn record<R: MappedRecord>(&self) -> Result<R, MappingError> {
        R::from_cursor(&self.section(R::COLUMNS)?)
    }
}

/// Reads one [`ColumnSet`] section of a row by ordinal.
#[derive(Debug)]
pub struct RowCursor<'r> {
    row: &'r PgRow,
    set: &'static ColumnSet,
    offset: usize,
}

impl<'r> RowCursor<'r> {
    fn ordinal(&self, name: &'static str, nullable: bool) -> Result<usize, MappingError> {
        let (index, column) = self.set.position(name)?;

        if column.nullable != nullable {
            return Err(MappingError::Nullability {
                column: name,
                nullable: column.nullable,
            });
        }

        Ok(self.offset + index)
    }

    /// Read a `NOT NULL` column.
    ///
    /// # Errors
    ///
    /// Fails when the column is unknown, declared nullable, or fails to
    /// decode.
    pub fn get<T>(&self, name: &'static str) -> Result<T, MappingError>
    where
        T: Decode<'r, Postgres> + Type<Postgres>,
    {
        let ordinal = self.ordinal(name, false)?;

        self.row
            .try_get(ordinal)
            .map_err(|source| MappingError::Decode {
                column: name,
                source,
            })
    }

    /// Read a nullable column.
    ///
    /// # Errors
    ///
    /// Fails when the column is unknown, declared `NOT NULL`, or fails to
    /// decode.
    pub fn get_optional<T>(&self, name: &'static str) -> Result<Option<T>, MappingError>
    where
        T: Decode<'r, Postgres> + Type<Postgres>,
    {
        let ordinal = self.ordinal(name, true)?;

        self.row
            .try_get(ordinal)
            .map_err(|source| MappingError::Decode {
                column: name,
                source,
            })
    }

    /// # Errors
    ///
    /// See [`RowCursor::get`].
    pub fn timestamp(&self, name: &'static str) -> Result<Timestamp, MappingError> {
        self.get::<SqlxTimestamp>(name).map(SqlxTimestamp::to_jiff)
    }

    /// # Errors
    ///
    /// See [`RowCursor::get_optional`].
    pub fn optional_timestamp(&self, name: &'static str) -> Result<Option<Timestamp>, MappingError> {
        self.get_optional::<SqlxTimestamp>(name)
            .map(|value| value.map(SqlxTimestamp::to_jiff))
    }
}
