//! PostgreSQL-backed investment package repository.

use async_trait::async_trait;
use sqlx::PgPool;

use nairavest_application::InvestmentPackageRepository;
use nairavest_core::{AppError, AppResult};
use nairavest_domain::InvestmentPackage;

/// PostgreSQL implementation of the investment package repository port.
#[derive(Clone)]
pub struct PostgresPackageRepository {
    pool: PgPool,
}

impl PostgresPackageRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvestmentPackageRepository for PostgresPackageRepository {
    async fn list_active(&self) -> AppResult<Vec<InvestmentPackage>> {
        let rows = sqlx::query_as::<_, PackageRow>(
            r#"
            SELECT id, name, min_amount, max_amount, duration_days, active, roi_percent
            FROM investment_packages
            WHERE active
            ORDER BY min_amount
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to list investment packages: {error}"))
        })?;

        rows.into_iter().map(PackageRow::into_domain).collect()
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<InvestmentPackage>> {
        let row = sqlx::query_as::<_, PackageRow>(
            r#"
            SELECT id, name, min_amount, max_amount, duration_days, active, roi_percent
            FROM investment_packages
            WHERE id = $1
            LIMIT 1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to find investment package: {error}"))
        })?;

        row.map(PackageRow::into_domain).transpose()
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PackageRow {
    id: i64,
    name: String,
    min_amount: i64,
    max_amount: i64,
    duration_days: i32,
    active: bool,
    roi_percent: f64,
}

impl PackageRow {
    fn into_domain(self) -> AppResult<InvestmentPackage> {
        InvestmentPackage::new(
            self.id,
            self.name,
            self.min_amount,
            self.max_amount,
            self.duration_days,
            self.active,
            self.roi_percent,
        )
        .map_err(|error| {
            AppError::Internal(format!("stored investment package is invalid: {error}"))
        })
    }
}
