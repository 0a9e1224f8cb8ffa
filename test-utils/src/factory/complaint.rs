//! Complaint factory.

use chrono::Utc;
use entity::complaint::ComplaintStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a new (untriaged) complaint from `user_id`.
pub async fn create_complaint(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::complaint::Model, DbErr> {
    entity::complaint::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        category: ActiveValue::Set("spam".to_string()),
        text: ActiveValue::Set("Test complaint".to_string()),
        status: ActiveValue::Set(ComplaintStatus::New),
        handled_by: ActiveValue::Set(None),
        internal_comment: ActiveValue::Set(String::new()),
        created: ActiveValue::Set(Utc::now()),
        updated: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
