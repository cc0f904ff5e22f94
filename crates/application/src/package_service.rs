//! Investment package ports and application service.

use std::sync::Arc;

use async_trait::async_trait;

use nairavest_core::{AppError, AppResult};
use nairavest_domain::InvestmentPackage;

/// Repository port for investment package persistence.
#[async_trait]
pub trait InvestmentPackageRepository: Send + Sync {
    /// Returns all packages currently open for investment.
    async fn list_active(&self) -> AppResult<Vec<InvestmentPackage>>;

    /// Finds a package by its identifier.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<InvestmentPackage>>;
}

/// Application service exposing the investment package catalogue.
#[derive(Clone)]
pub struct InvestmentPackageService {
    repository: Arc<dyn InvestmentPackageRepository>,
}

impl InvestmentPackageService {
    /// Creates a new package service.
    #[must_use]
    pub fn new(repository: Arc<dyn InvestmentPackageRepository>) -> Self {
        Self { repository }
    }

    /// Lists packages currently open for investment.
    pub async fn list_active(&self) -> AppResult<Vec<InvestmentPackage>> {
        self.repository.list_active().await
    }

    /// Returns the package with the given identifier.
    pub async fn find_by_id(&self, id: i64) -> AppResult<InvestmentPackage> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("investment package {id} does not exist")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptyRepo;

    #[async_trait]
    impl InvestmentPackageRepository for EmptyRepo {
        async fn list_active(&self) -> AppResult<Vec<InvestmentPackage>> {
            Ok(Vec::new())
        }

        async fn find_by_id(&self, _id: i64) -> AppResult<Option<InvestmentPackage>> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn missing_package_maps_to_not_found() {
        let service = InvestmentPackageService::new(Arc::new(EmptyRepo));
        let result = service.find_by_id(42).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
