use crate::models::vote::{VoteKind, VoteOutcome, VoteRecord, VoteTally};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Country name must not be empty")]
    EmptyCountry,
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),
}

/// Vote store over a bounded SQLite pool. Every operation leases one
/// connection; the lease goes back to the pool when it is dropped.
pub struct DatabaseService {
    pool: SqlitePool,
}

impl DatabaseService {
    pub async fn new(
        database_url: &str,
        pool_size: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, DatabaseError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size.max(1))
            .acquire_timeout(acquire_timeout)
            .connect_with(options)
            .await?;

        let service = Self { pool };
        service.ensure_schema().await?;

        Ok(service)
    }

    async fn ensure_schema(&self) -> Result<(), DatabaseError> {
        let create_votes_table = r#"
        CREATE TABLE IF NOT EXISTS avaliacoes_paises (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nome_pais TEXT NOT NULL UNIQUE,
            avaliacao_positiva INTEGER NOT NULL DEFAULT 0 CHECK (avaliacao_positiva >= 0),
            avaliacao_negativa INTEGER NOT NULL DEFAULT 0 CHECK (avaliacao_negativa >= 0)
        )
        "#;

        sqlx::query(create_votes_table).execute(&self.pool).await?;

        Ok(())
    }

    /// Adds one vote of `kind` for `country`.
    ///
    /// A single `INSERT .. ON CONFLICT DO UPDATE` statement either creates the
    /// row with the voted counter at 1 or bumps the existing counter in place,
    /// so concurrent first votes for the same country cannot both insert.
    /// Each vote adds exactly one to the row's total, so a returned row whose
    /// counters sum to 1 was created by this call.
    pub async fn record_vote(
        &self,
        country: &str,
        kind: VoteKind,
    ) -> Result<VoteOutcome, DatabaseError> {
        if country.is_empty() {
            return Err(DatabaseError::EmptyCountry);
        }

        let column = kind.column();
        let upsert = format!(
            "INSERT INTO avaliacoes_paises (nome_pais, {column}) VALUES (?, 1) \
             ON CONFLICT(nome_pais) DO UPDATE SET {column} = {column} + 1 \
             RETURNING id, nome_pais, avaliacao_positiva, avaliacao_negativa"
        );

        let mut conn = self.pool.acquire().await?;
        let record = sqlx::query_as::<_, VoteRecord>(&upsert)
            .bind(country)
            .fetch_one(&mut *conn)
            .await?;

        if record.total_votes() == 1 {
            info!("First {} vote recorded for {}", kind, country);
            Ok(VoteOutcome::Created(record))
        } else {
            Ok(VoteOutcome::Incremented {
                count: record.count_for(kind),
            })
        }
    }

    /// Every country's counters, in storage order.
    pub async fn list_votes(&self) -> Result<Vec<VoteTally>, DatabaseError> {
        let mut conn = self.pool.acquire().await?;
        let tallies = sqlx::query_as::<_, VoteTally>(
            "SELECT nome_pais, avaliacao_positiva, avaliacao_negativa FROM avaliacoes_paises",
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(tallies)
    }

    /// Waits for leased connections to come back, then closes the pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
