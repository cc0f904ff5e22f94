//! State reference data port and application service.

use std::sync::Arc;

use async_trait::async_trait;

use nairavest_core::AppResult;
use nairavest_domain::State;

/// Repository port for seeded state reference data.
#[async_trait]
pub trait StateRepository: Send + Sync {
    /// Returns all seeded states ordered by name.
    async fn list(&self) -> AppResult<Vec<State>>;
}

/// Application service exposing the state reference list.
#[derive(Clone)]
pub struct StateService {
    repository: Arc<dyn StateRepository>,
}

impl StateService {
    /// Creates a new state service.
    #[must_use]
    pub fn new(repository: Arc<dyn StateRepository>) -> Self {
        Self { repository }
    }

    /// Lists all seeded states.
    pub async fn list(&self) -> AppResult<Vec<State>> {
        self.repository.list().await
    }
}
