//! Post factory for creating test posts and attachments.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test posts with customizable fields.
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    creator_id: i32,
    content: String,
    images: Vec<String>,
}

impl<'a> PostFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, creator_id: i32) -> Self {
        Self {
            db,
            creator_id,
            content: "Test post".to_string(),
            images: Vec::new(),
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Adds an image attachment; attachments keep insertion order.
    pub fn image(mut self, key: impl Into<String>) -> Self {
        self.images.push(key.into());
        self
    }

    /// Inserts the post and its ordered image attachments.
    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        let post = entity::post::ActiveModel {
            creator_id: ActiveValue::Set(self.creator_id),
            content: ActiveValue::Set(self.content),
            is_edited: ActiveValue::Set(false),
            created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for (position, key) in self.images.into_iter().enumerate() {
            entity::post_image::ActiveModel {
                post_id: ActiveValue::Set(post.id),
                image: ActiveValue::Set(key),
                position: ActiveValue::Set(position as i32),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(post)
    }
}

/// Creates a post with default content and no attachments.
pub async fn create_post(
    db: &DatabaseConnection,
    creator_id: i32,
) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, creator_id).build().await
}
