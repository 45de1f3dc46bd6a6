use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::error::TestError;

/// In-memory SQLite database shared by a single test.
///
/// SQLx enables foreign key enforcement on SQLite connections, so cascade and referential
/// integrity behave as they do on Postgres.
pub struct TestSetup {
    pub db: DatabaseConnection,
}

impl TestSetup {
    /// Connects to a fresh in-memory database without any tables.
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup { db })
    }

    /// Installs the catalog schema by running every migration.
    pub async fn with_tables(&self) -> Result<(), TestError> {
        Migrator::up(&self.db, None).await?;

        Ok(())
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        async {
            let setup = $crate::TestSetup::new().await?;
            setup.with_tables().await?;

            Ok::<_, $crate::error::TestError>(setup)
        }
        .await
    }};
}
