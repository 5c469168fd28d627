//! Disposable catalog databases for service tests.

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::{OnceCell, mpsc};

use crate::query::Table;

const USER: &str = "dairycart_test";
const PASSWORD: &str = "dairycart_test_password";

/// Database names are interpolated into DDL, so only a conservative shape is
/// accepted.
fn validate_database_name(name: &str) -> Result<(), String> {
    if name.is_empty() || name.len() > 63 {
        return Err("database name must be 1-63 characters long".to_string());
    }

    if !name.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
        return Err("database name must start with a letter or underscore".to_string());
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err("database name can only contain letters, digits and underscores".to_string());
    }

    Ok(())
}

async fn init_postgres_container() -> ContainerAsync<PostgresImage> {
    PostgresImage::default()
        .with_user(USER)
        .with_password(PASSWORD)
        .with_db_name(USER)
        .with_env_var("POSTGRES_INITDB_ARGS", "--auth-host=trust")
        .start()
        .await
        .expect("Failed to start PostgreSQL container")
}

/// One container for the whole test binary.
static POSTGRES_CONTAINER: Lazy<OnceCell<ContainerAsync<PostgresImage>>> = Lazy::new(OnceCell::new);

/// Databases waiting to be dropped.
static CLEANUP_SENDER: Lazy<OnceCell<mpsc::UnboundedSender<String>>> = Lazy::new(OnceCell::new);

async fn init_cleanup_task() -> mpsc::UnboundedSender<String> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

    tokio::spawn(async move {
        while let Some(db_name) = receiver.recv().await {
            if let Err(err) = drop_database(&db_name).await {
                eprintln!("Failed to drop database '{db_name}': {err}");
            }
        }
    });

    sender
}

async fn server_url(database: &str) -> Option<String> {
    let container = POSTGRES_CONTAINER.get()?;
    let port = container.get_host_port_ipv4(5432).await.ok()?;

    let host =
        std::env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".to_string());

    Some(format!("postgresql://{USER}:{PASSWORD}@{host}:{port}/{database}"))
}

async fn drop_database(db_name: &str) -> Result<(), sqlx::Error> {
    let Some(url) = server_url("postgres").await else {
        return Ok(());
    };

    if validate_database_name(db_name).is_err() {
        return Ok(());
    }

    let mut conn = PgConnection::connect(&url).await?;

    sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&mut conn)
        .await?;

    conn.close().await
}

/// A freshly migrated database inside the shared container.
///
/// Every test gets its own database, so services can commit normally and
/// tests never see each other's rows. The database is dropped in the
/// background once the `TestDb` goes out of scope.
#[derive(Debug, Clone)]
pub struct TestDb {
    pub pool: PgPool,
    pub name: String,
}

impl Drop for TestDb {
    fn drop(&mut self) {
        if let Some(sender) = CLEANUP_SENDER.get() {
            let _ = sender.send(self.name.clone());
        }
    }
}

impl TestDb {
    pub async fn new() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();

        let thread_id = std::thread::current().id();

        let name = format!("dairycart_test_{nanos}_{thread_id:?}")
            .replace(['(', ')', ' '], "")
            .replace("ThreadId", "t");

        CLEANUP_SENDER.get_or_init(init_cleanup_task).await;

        if let Err(error) = validate_database_name(&name) {
            panic!("Invalid database name '{name}': {error}");
        }

        POSTGRES_CONTAINER
            .get_or_init(init_postgres_container)
            .await;

        let admin_url = server_url("postgres")
            .await
            .expect("Failed to resolve container address");

        let mut conn = PgConnection::connect(&admin_url)
            .await
            .expect("Failed to connect to postgres database");

        sqlx::query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut conn)
            .await
            .expect("Failed to create test database");

        conn.close()
            .await
            .expect("Failed to close admin connection");

        let database_url = server_url(&name)
            .await
            .expect("Failed to resolve container address");

        let pool = PgPool::connect(&database_url)
            .await
            .expect("Failed to create pool for database");

        sqlx::migrate!("../../migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations on database");

        Self { pool, name }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Every row of `table`, archived or not.
    pub async fn count_rows(&self, table: Table) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table.as_str()))
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count rows")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_style_names_are_accepted() {
        assert!(validate_database_name("dairycart_test_1700000000_t12").is_ok());
        assert!(validate_database_name("_scratch").is_ok());
    }

    #[test]
    fn unsafe_names_are_rejected() {
        assert!(validate_database_name("").is_err());
        assert!(validate_database_name(&"a".repeat(64)).is_err());
        assert!(validate_database_name("1catalog").is_err());
        assert!(validate_database_name("catalog\"; DROP").is_err());
        assert!(validate_database_name("cat-alog").is_err());
    }

    #[tokio::test]
    async fn migrated_catalog_starts_empty() {
        let test_db = TestDb::new().await;

        for table in [
            Table::ProductProgenitors,
            Table::ProductAttributes,
            Table::ProductAttributeValues,
            Table::Products,
            Table::Discounts,
        ] {
            assert_eq!(test_db.count_rows(table).await, 0, "{}", table.as_str());
        }
    }
}
