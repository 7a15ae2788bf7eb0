pub mod portfolio_query;
pub mod project_repository;

pub use portfolio_query::{PortfolioQuery, PortfolioQueryError};
pub use project_repository::{ProjectBulkAction, ProjectRepository, ProjectRepositoryError};
