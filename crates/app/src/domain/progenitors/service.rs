//! Progenitors service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::progenitors::{
        errors::ProgenitorsServiceError,
        records::{ProgenitorId, ProgenitorRecord},
        repository::PgProgenitorsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProgenitorsService {
    db: Db,
    repository: PgProgenitorsRepository,
}

impl PgProgenitorsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProgenitorsRepository::new(),
        }
    }
}

#[async_trait]
impl ProgenitorsService for PgProgenitorsService {
    #[tracing::instrument(
        name = "progenitors.service.get_progenitor",
        skip(self),
        fields(progenitor_id = %progenitor),
        err
    )]
    async fn get_progenitor(
        &self,
        progenitor: ProgenitorId,
    ) -> Result<ProgenitorRecord, ProgenitorsServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self
            .repository
            .get_progenitor(&mut tx, progenitor)
            .await?
            .ok_or(ProgenitorsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(record)
    }
}

#[automock]
#[async_trait]
pub trait ProgenitorsService: Send + Sync {
    /// Retrieve a single active progenitor.
    async fn get_progenitor(
        &self,
        progenitor: ProgenitorId,
    ) -> Result<ProgenitorRecord, ProgenitorsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::progenitors::{data::NewProgenitor, records::Dimensions},
        test::TestContext,
    };

    use super::*;

    #[tokio::test]
    async fn get_progenitor_returns_stored_fields() -> TestResult {
        let ctx = TestContext::new().await;

        let mut tx = ctx.db.begin().await?;

        let id = PgProgenitorsRepository::new()
            .create_progenitor(
                &mut tx,
                &NewProgenitor {
                    name: "Skateboard".to_owned(),
                    description: "Four wheels".to_owned(),
                    taxable: true,
                    price: 99.99,
                    product_dimensions: Dimensions {
                        weight: 2.5,
                        height: 0.1,
                        width: 0.2,
                        length: 0.8,
                    },
                    package_dimensions: Dimensions::default(),
                },
            )
            .await?;

        tx.commit().await?;

        let progenitor = ctx.progenitors.get_progenitor(id).await?;

        assert_eq!(progenitor.id, id);
        assert_eq!(progenitor.name, "Skateboard");
        assert!(progenitor.taxable);
        assert!((progenitor.product_dimensions.weight - 2.5).abs() < f64::EPSILON);
        assert!(progenitor.updated_on.is_none());
        assert!(progenitor.archived_on.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn get_progenitor_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .progenitors
            .get_progenitor(ProgenitorId::from_i64(404))
            .await;

        assert!(
            matches!(result, Err(ProgenitorsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
