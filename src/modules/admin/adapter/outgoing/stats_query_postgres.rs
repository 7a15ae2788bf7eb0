use async_trait::async_trait;
use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};
use std::sync::Arc;

use crate::modules::admin::application::domain::entities::DashboardStats;
use crate::modules::admin::application::ports::outgoing::{StatsQuery, StatsQueryError};

#[derive(Clone)]
pub struct StatsQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl StatsQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct StatsRow {
    total_projects: i64,
    featured_projects: i64,
    total_skills: i64,
    total_experiences: i64,
    unread_messages: i64,
    total_project_views: i64,
}

// Single round trip; SUM over bigint yields numeric, hence the cast.
const DASHBOARD_STATS_SQL: &str = r#"
    SELECT
      (SELECT COUNT(*) FROM projects WHERE active = true) AS total_projects,
      (SELECT COUNT(*) FROM projects WHERE active = true AND featured = true) AS featured_projects,
      (SELECT COUNT(*) FROM skills WHERE active = true) AS total_skills,
      (SELECT COUNT(*) FROM experiences WHERE active = true) AS total_experiences,
      (SELECT COUNT(*) FROM contact_messages WHERE read = false) AS unread_messages,
      (SELECT COALESCE(SUM(views), 0)::bigint FROM projects WHERE active = true)
        AS total_project_views
"#;

#[async_trait]
impl StatsQuery for StatsQueryPostgres {
    async fn dashboard_stats(&self) -> Result<DashboardStats, StatsQueryError> {
        let row = StatsRow::find_by_statement(Statement::from_string(
            DatabaseBackend::Postgres,
            DASHBOARD_STATS_SQL,
        ))
        .one(&*self.db)
        .await
        .map_err(|e| StatsQueryError::DatabaseError(e.to_string()))?
        .ok_or_else(|| StatsQueryError::DatabaseError("stats query returned no row".to_string()))?;

        Ok(DashboardStats {
            total_projects: row.total_projects,
            featured_projects: row.featured_projects,
            total_skills: row.total_skills,
            total_experiences: row.total_experiences,
            unread_messages: row.unread_messages,
            total_project_views: row.total_project_views,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::btreemap;
    use sea_orm::{DbErr, MockDatabase, Value};

    #[tokio::test]
    async fn test_dashboard_stats_maps_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![btreemap! {
                "total_projects".to_string() => Value::BigInt(Some(5)),
                "featured_projects".to_string() => Value::BigInt(Some(2)),
                "total_skills".to_string() => Value::BigInt(Some(14)),
                "total_experiences".to_string() => Value::BigInt(Some(3)),
                "unread_messages".to_string() => Value::BigInt(Some(1)),
                "total_project_views".to_string() => Value::BigInt(Some(980)),
            }]])
            .into_connection();

        let query = StatsQueryPostgres::new(Arc::new(db));
        let stats = query.dashboard_stats().await.unwrap();

        assert_eq!(
            stats,
            DashboardStats {
                total_projects: 5,
                featured_projects: 2,
                total_skills: 14,
                total_experiences: 3,
                unread_messages: 1,
                total_project_views: 980,
            }
        );
    }

    #[tokio::test]
    async fn test_dashboard_stats_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("relation does not exist".to_string())])
            .into_connection();

        let query = StatsQueryPostgres::new(Arc::new(db));
        let err = query.dashboard_stats().await.unwrap_err();

        assert!(matches!(err, StatsQueryError::DatabaseError(msg) if msg.contains("relation")));
    }
}
