//! PostgreSQL-backed state reference data repository.

use async_trait::async_trait;
use sqlx::PgPool;

use nairavest_application::StateRepository;
use nairavest_core::{AppError, AppResult};
use nairavest_domain::State;

/// PostgreSQL implementation of the state repository port.
#[derive(Clone)]
pub struct PostgresStateRepository {
    pool: PgPool,
}

impl PostgresStateRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StateRepository for PostgresStateRepository {
    async fn list(&self) -> AppResult<Vec<State>> {
        let rows = sqlx::query_as::<_, StateRow>(
            r#"
            SELECT code, name
            FROM states
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list states: {error}")))?;

        Ok(rows
            .into_iter()
            .map(|row| State {
                code: row.code,
                name: row.name,
            })
            .collect())
    }
}

#[derive(Debug, sqlx::FromRow)]
struct StateRow {
    code: String,
    name: String,
}
