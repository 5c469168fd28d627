//! Progenitors Repository

use sqlx::{Postgres, Transaction, query_scalar_with};

use crate::{
    database::{RepositoryError, fetch_optional_record},
    domain::progenitors::{
        data::NewProgenitor,
        records::{PROGENITOR_COLUMNS, ProgenitorId, ProgenitorRecord},
    },
    mapping::RowLayout,
    query::{InsertBuilder, Selection, Statement, Table},
};

static PROGENITOR_ROW: RowLayout = RowLayout {
    leading: &[],
    sets: &[&PROGENITOR_COLUMNS],
};

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProgenitorsRepository;

impl PgProgenitorsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    fn selection() -> Selection {
        Selection {
            columns: PROGENITOR_COLUMNS.select_list("g"),
            from: Table::ProductProgenitors.aliased("g"),
            alias: "g",
        }
    }

    pub(crate) async fn get_progenitor(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        progenitor: ProgenitorId,
    ) -> Result<Option<ProgenitorRecord>, RepositoryError> {
        let statement = Statement::new(
            Self::selection().keyed_query("id"),
            vec![progenitor.into()],
        );

        fetch_optional_record(tx, &PROGENITOR_ROW, &statement).await
    }

    pub(crate) async fn create_progenitor(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        progenitor: &NewProgenitor,
    ) -> Result<ProgenitorId, sqlx::Error> {
        let mut insert = InsertBuilder::new(Table::ProductProgenitors);

        insert
            .value("name", progenitor.name.as_str())
            .value("description", progenitor.description.as_str())
            .value("taxable", progenitor.taxable)
            .value("price", progenitor.price)
            .value("product_weight", progenitor.product_dimensions.weight)
            .value("product_height", progenitor.product_dimensions.height)
            .value("product_width", progenitor.product_dimensions.width)
            .value("product_length", progenitor.product_dimensions.length)
            .value("package_weight", progenitor.package_dimensions.weight)
            .value("package_height", progenitor.package_dimensions.height)
            .value("package_width", progenitor.package_dimensions.width)
            .value("package_length", progenitor.package_dimensions.length);

        let statement = insert.build();

        query_scalar_with::<_, i64, _>(statement.sql(), statement.arguments()?)
            .fetch_one(&mut **tx)
            .await
            .map(ProgenitorId::from_i64)
    }
}
