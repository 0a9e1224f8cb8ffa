//! Action log repository.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::admin::{ActionLogQuery, CreateActionLogParams};

/// Listings are capped; the log table grows without bound.
const LIST_LIMIT: u64 = 500;

/// Repository providing database operations for the action audit log.
pub struct ActionLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActionLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateActionLogParams,
    ) -> Result<entity::user_action_log::Model, DbErr> {
        entity::user_action_log::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            action: ActiveValue::Set(params.action),
            path: ActiveValue::Set(params.path),
            ip_address: ActiveValue::Set(params.ip_address),
            extra: ActiveValue::Set(params.extra),
            created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Lists log rows, newest first, with optional filters. Capped at 500
    /// rows.
    pub async fn list(
        &self,
        query: &ActionLogQuery,
    ) -> Result<Vec<entity::user_action_log::Model>, DbErr> {
        let mut find = entity::prelude::UserActionLog::find();

        if let Some(user_id) = query.user_id {
            find = find.filter(entity::user_action_log::Column::UserId.eq(user_id));
        }

        if let Some(action) = &query.action {
            if !action.is_empty() {
                find = find.filter(entity::user_action_log::Column::Action.contains(action));
            }
        }

        if let Some(days) = query.days {
            let since = Utc::now() - Duration::days(days.max(0));
            find = find.filter(entity::user_action_log::Column::Created.gte(since));
        }

        find.order_by_desc(entity::user_action_log::Column::Created)
            .limit(LIST_LIMIT)
            .all(self.db)
            .await
    }

    pub async fn count_since(&self, since: DateTime<Utc>) -> Result<u64, DbErr> {
        entity::prelude::UserActionLog::find()
            .filter(entity::user_action_log::Column::Created.gte(since))
            .count(self.db)
            .await
    }

    /// Timestamps of all rows since `since`, for the activity histogram.
    pub async fn created_since(&self, since: DateTime<Utc>) -> Result<Vec<DateTime<Utc>>, DbErr> {
        let timestamps = entity::prelude::UserActionLog::find()
            .filter(entity::user_action_log::Column::Created.gte(since))
            .select_only()
            .column(entity::user_action_log::Column::Created)
            .into_tuple::<DateTime<Utc>>()
            .all(self.db)
            .await?;

        Ok(timestamps)
    }
}
