//! Discount Records

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use thiserror::Error;

use crate::{
    domain::products::records::ProductId,
    ids::TypedId,
    mapping::{Column, ColumnSet, MappedRecord, MappingError, RowCursor},
    query::{SqlValue, Table},
};

/// Discount Id
pub type DiscountId = TypedId<DiscountRecord>;

/// How a discount's amount is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountType {
    Percentage,
    FlatAmount,
}

impl DiscountType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Percentage => "percentage",
            Self::FlatAmount => "flat_amount",
        }
    }
}

impl Display for DiscountType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Unrecognised discount type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown discount type `{0}`")]
pub struct UnknownDiscountType(pub String);

impl FromStr for DiscountType {
    type Err = UnknownDiscountType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "percentage" => Ok(Self::Percentage),
            "flat_amount" => Ok(Self::FlatAmount),
            other => Err(UnknownDiscountType(other.to_owned())),
        }
    }
}

impl From<DiscountType> for SqlValue {
    fn from(value: DiscountType) -> Self {
        Self::from(value.as_str())
    }
}

/// Discount Record
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountRecord {
    pub id: DiscountId,
    pub name: String,
    pub discount_type: DiscountType,
    pub amount: f64,
    pub product_id: Option<ProductId>,
    pub starts_on: Timestamp,
    pub expires_on: Option<Timestamp>,
    pub redemption_code: Option<String>,
    pub max_uses: Option<i32>,
    pub login_required: bool,
    pub created_on: Timestamp,
    pub updated_on: Option<Timestamp>,
    pub archived_on: Option<Timestamp>,
}

pub static DISCOUNT_COLUMNS: ColumnSet = ColumnSet {
    table: Table::Discounts,
    columns: &[
        Column::required("id"),
        Column::required("name"),
        Column::required("discount_type"),
        Column::required("amount"),
        Column::nullable("product_id"),
        Column::required("starts_on"),
        Column::nullable("expires_on"),
        Column::nullable("redemption_code"),
        Column::nullable("max_uses"),
        Column::required("login_required"),
        Column::required("created_on"),
        Column::nullable("updated_on"),
        Column::nullable("archived_on"),
    ],
};

impl MappedRecord for DiscountRecord {
    const COLUMNS: &'static ColumnSet = &DISCOUNT_COLUMNS;

    fn from_cursor(cursor: &RowCursor<'_>) -> Result<Self, MappingError> {
        let discount_type: String = cursor.get("discount_type")?;

        let discount_type = discount_type
            .parse()
            .map_err(|UnknownDiscountType(value)| MappingError::InvalidValue {
                column: "discount_type",
                value,
            })?;

        Ok(Self {
            id: DiscountId::from_i64(cursor.get("id")?),
            name: cursor.get("name")?,
            discount_type,
            amount: cursor.get("amount")?,
            product_id: cursor
                .get_optional::<i64>("product_id")?
                .map(ProductId::from_i64),
            starts_on: cursor.timestamp("starts_on")?,
            expires_on: cursor.optional_timestamp("expires_on")?,
            redemption_code: cursor.get_optional("redemption_code")?,
            max_uses: cursor.get_optional("max_uses")?,
            login_required: cursor.get("login_required")?,
            created_on: cursor.timestamp("created_on")?,
            updated_on: cursor.optional_timestamp("updated_on")?,
            archived_on: cursor.optional_timestamp("archived_on")?,
        })
    }
}
