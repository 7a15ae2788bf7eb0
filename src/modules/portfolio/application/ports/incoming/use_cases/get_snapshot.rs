use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entities::PortfolioSnapshot;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetSnapshotError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

#[async_trait]
pub trait GetSnapshotUseCase: Send + Sync {
    async fn execute(&self) -> Result<PortfolioSnapshot, GetSnapshotError>;
}
