//! Follow edge factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a follow edge: `follower_id` follows `followee_id`.
pub async fn create_follow(
    db: &DatabaseConnection,
    follower_id: i32,
    followee_id: i32,
) -> Result<entity::follow::Model, DbErr> {
    entity::follow::ActiveModel {
        follower_id: ActiveValue::Set(follower_id),
        followee_id: ActiveValue::Set(followee_id),
        created: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
