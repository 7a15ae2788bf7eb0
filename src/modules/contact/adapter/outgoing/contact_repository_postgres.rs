use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;

use crate::modules::contact::adapter::outgoing::sea_orm_entity::contact_messages::{
    ActiveModel, Column, Entity, Model,
};
use crate::modules::contact::application::domain::entities::{
    ContactBulkAction, ContactMessage, ContactMessageFilter, NewContactMessage,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};

#[derive(Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<Model> for ContactMessage {
    fn from(model: Model) -> Self {
        ContactMessage {
            id: model.id,
            name: model.name,
            email: model.email,
            subject: model.subject,
            message: model.message,
            sent_at: model.sent_at.with_timezone(&Utc),
            read: model.read,
            replied: model.replied,
        }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn create(
        &self,
        message: &NewContactMessage,
    ) -> Result<ContactMessage, ContactRepositoryError> {
        let model = ActiveModel {
            name: Set(message.name().to_string()),
            email: Set(message.email().to_string()),
            subject: Set(message.subject().to_string()),
            message: Set(message.message().to_string()),
            sent_at: Set(Utc::now().fixed_offset()),
            read: Set(false),
            replied: Set(false),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn list(
        &self,
        filter: ContactMessageFilter,
    ) -> Result<Vec<ContactMessage>, ContactRepositoryError> {
        let mut query = Entity::find();
        if let Some(read) = filter.read {
            query = query.filter(Column::Read.eq(read));
        }
        if let Some(replied) = filter.replied {
            query = query.filter(Column::Replied.eq(replied));
        }

        let rows = query
            .order_by_desc(Column::SentAt)
            .order_by_desc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(ContactMessage::from).collect())
    }

    async fn apply_bulk_action(
        &self,
        message_ids: &[i64],
        action: ContactBulkAction,
    ) -> Result<u64, ContactRepositoryError> {
        if message_ids.is_empty() {
            return Ok(0);
        }

        let update = Entity::update_many();
        let update = match action {
            ContactBulkAction::MarkRead => update.col_expr(Column::Read, Expr::value(true)),
            ContactBulkAction::MarkUnread => update.col_expr(Column::Read, Expr::value(false)),
            ContactBulkAction::MarkReplied => update
                .col_expr(Column::Replied, Expr::value(true))
                .col_expr(Column::Read, Expr::value(true)),
        };

        let result = update
            .filter(Column::Id.is_in(message_ids.iter().copied()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }
}

fn map_db_err(e: DbErr) -> ContactRepositoryError {
    ContactRepositoryError::DatabaseError(e.to_string())
}
