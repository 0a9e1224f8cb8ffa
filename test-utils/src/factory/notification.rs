//! Notification factory.

use chrono::Utc;
use entity::notification::NotificationKind;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an unread follow notification for `user_id` from `actor_id`.
pub async fn create_notification(
    db: &DatabaseConnection,
    user_id: i32,
    actor_id: i32,
) -> Result<entity::notification::Model, DbErr> {
    entity::notification::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        actor_id: ActiveValue::Set(Some(actor_id)),
        kind: ActiveValue::Set(NotificationKind::Follow),
        message: ActiveValue::Set("started following you".to_string()),
        target_type: ActiveValue::Set(Some("user".to_string())),
        target_id: ActiveValue::Set(Some(actor_id)),
        is_read: ActiveValue::Set(false),
        created: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
