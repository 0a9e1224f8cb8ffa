//! Notification repository.
//!
//! Notifications are append-only except for the read flag. Rows survive the
//! event that produced them: unfollowing someone does not delete their old
//! follow notification.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::notification::CreateNotificationParams;

/// Repository providing database operations for the notification feed.
pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateNotificationParams,
    ) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            actor_id: ActiveValue::Set(params.actor_id),
            kind: ActiveValue::Set(params.kind),
            message: ActiveValue::Set(params.message),
            target_type: ActiveValue::Set(params.target_type),
            target_id: ActiveValue::Set(params.target_id),
            is_read: ActiveValue::Set(false),
            created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Notifications of one user, newest first.
    pub async fn list_for_user(
        &self,
        user_id: i32,
        unread_only: bool,
    ) -> Result<Vec<entity::notification::Model>, DbErr> {
        let mut query = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id));

        if unread_only {
            query = query.filter(entity::notification::Column::IsRead.eq(false));
        }

        query
            .order_by_desc(entity::notification::Column::Created)
            .all(self.db)
            .await
    }

    /// Marks one notification read, scoped to its recipient.
    ///
    /// # Returns
    /// - `Ok(true)` - Notification found and marked
    /// - `Ok(false)` - No such notification for this user
    pub async fn mark_read(&self, notification_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .filter(entity::notification::Column::Id.eq(notification_id))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .col_expr(
                entity::notification::Column::IsRead,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Marks every unread notification of the user read.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of notifications flipped to read
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .col_expr(
                entity::notification::Column::IsRead,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn unread_count(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .count(self.db)
            .await
    }
}
