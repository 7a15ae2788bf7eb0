use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::projects::{Column, Entity};
use crate::modules::portfolio::application::domain::entities::ProjectStatus;
use crate::modules::portfolio::application::ports::outgoing::{
    ProjectBulkAction, ProjectRepository, ProjectRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn increment_views(&self, project_id: i64) -> Result<i64, ProjectRepositoryError> {
        // UPDATE projects SET views = views + 1 WHERE id = $1 AND active RETURNING *
        let updated = Entity::update_many()
            .col_expr(Column::Views, Expr::col(Column::Views).add(1))
            .filter(Column::Id.eq(project_id))
            .filter(Column::Active.eq(true))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .into_iter()
            .next()
            .map(|model| model.views)
            .ok_or(ProjectRepositoryError::NotFound)
    }

    async fn apply_bulk_action(
        &self,
        project_ids: &[i64],
        action: ProjectBulkAction,
    ) -> Result<u64, ProjectRepositoryError> {
        if project_ids.is_empty() {
            return Ok(0);
        }

        let update = Entity::update_many();
        let update = match action {
            ProjectBulkAction::Feature => update.col_expr(Column::Featured, Expr::value(true)),
            ProjectBulkAction::Unfeature => update.col_expr(Column::Featured, Expr::value(false)),
            ProjectBulkAction::MarkFinished => update.col_expr(
                Column::Status,
                Expr::value(ProjectStatus::Finished.code()),
            ),
        };

        let result = update
            .filter(Column::Id.is_in(project_ids.iter().copied()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
