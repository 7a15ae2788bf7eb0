// src/modules/portfolio/application/ports/outgoing/portfolio_query.rs

use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entities::PortfolioSnapshot;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PortfolioQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// A stored row holds a value outside the closed vocabularies.
    #[error("Corrupt record: {0}")]
    CorruptRecord(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side, all active records at once)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PortfolioQuery: Send + Sync {
    /// Loads the active profile, skills, projects and experiences in display
    /// order, with the related skills of every project and experience.
    async fn snapshot(&self) -> Result<PortfolioSnapshot, PortfolioQueryError>;
}
