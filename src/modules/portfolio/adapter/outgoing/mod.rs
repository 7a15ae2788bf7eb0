mod portfolio_query_postgres;
mod project_repository_postgres;
pub mod sea_orm_entity;

pub use portfolio_query_postgres::PortfolioQueryPostgres;
pub use project_repository_postgres::ProjectRepositoryPostgres;
