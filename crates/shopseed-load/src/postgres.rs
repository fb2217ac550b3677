use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgConnection, PgPoolOptions};
use sqlx::PgPool;
use tracing::{debug, info, warn};

use crate::adapter::{LoadReport, StagingLoader, TableLoad};
use crate::errors::LoadError;
use crate::steps::LoadStep;
use crate::tables::{STAGING_TABLES, StagingTable};

/// Loader for PostgreSQL using `COPY ... FROM STDIN`.
#[derive(Debug, Clone)]
pub struct PostgresStagingLoader {
    pool: PgPool,
}

impl PostgresStagingLoader {
    /// Create a new loader using a pre-configured pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to `url` with the default pool settings.
    pub async fn connect(url: &str) -> Result<Self, LoadError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(10))
            .connect(url)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl StagingLoader for PostgresStagingLoader {
    fn engine(&self) -> &'static str {
        "postgres"
    }

    async fn load(&self, dataset_dir: &Path) -> Result<LoadReport, LoadError> {
        let mut payloads = Vec::with_capacity(STAGING_TABLES.len());
        for table in STAGING_TABLES {
            let path = dataset_dir.join(table.kind.file_name());
            if !path.exists() {
                return Err(LoadError::MissingFile(path.display().to_string()));
            }
            payloads.push((table, tokio::fs::read(&path).await?));
        }

        let mut tx = self.pool.begin().await?;
        match load_tables(&mut tx, &payloads).await {
            Ok(report) => {
                tx.commit().await?;
                info!(
                    tables = report.tables.len(),
                    rows = report.total_rows(),
                    "staging load committed"
                );
                Ok(report)
            }
            Err(err) => {
                warn!(error = %err, "staging load failed, rolling back");
                if let Err(rollback) = tx.rollback().await {
                    warn!(error = %rollback, "rollback failed");
                }
                Err(err)
            }
        }
    }
}

async fn load_tables(
    conn: &mut PgConnection,
    payloads: &[(StagingTable, Vec<u8>)],
) -> Result<LoadReport, LoadError> {
    sqlx::query(&StagingTable::create_schema_sql())
        .execute(&mut *conn)
        .await?;

    let mut report = LoadReport::default();
    for (table, data) in payloads {
        let mut rows = 0;
        for step in LoadStep::ORDER {
            debug!(table = %table.qualified_name(), step = %step, "running load step");
            match step {
                LoadStep::EnsureTable => {
                    sqlx::query(&table.create_table_sql())
                        .execute(&mut *conn)
                        .await?;
                }
                LoadStep::Truncate => {
                    sqlx::query(&table.truncate_sql())
                        .execute(&mut *conn)
                        .await?;
                }
                LoadStep::Append => {
                    let mut copy = conn.copy_in_raw(&table.copy_sql()).await?;
                    copy.send(data.as_slice()).await?;
                    rows = copy.finish().await?;
                }
            }
        }
        info!(table = %table.qualified_name(), rows, "table loaded");
        report.tables.push(TableLoad {
            table: table.kind.table_name().to_string(),
            rows,
        });
    }

    Ok(report)
}
