//! Comment repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository providing database operations for post comments.
pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        post_id: i32,
        creator_id: i32,
        content: String,
    ) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            post_id: ActiveValue::Set(post_id),
            creator_id: ActiveValue::Set(creator_id),
            content: ActiveValue::Set(content),
            created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        comment_id: i32,
    ) -> Result<Option<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find_by_id(comment_id)
            .one(self.db)
            .await
    }

    /// Comments of a post, oldest first.
    pub async fn list_for_post(
        &self,
        post_id: i32,
    ) -> Result<Vec<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.eq(post_id))
            .order_by_asc(entity::comment::Column::Created)
            .all(self.db)
            .await
    }

    /// Updates a comment owned by `creator_id`.
    ///
    /// # Returns
    /// - `Ok(None)` - Comment does not exist or belongs to someone else
    pub async fn update_owned(
        &self,
        comment_id: i32,
        creator_id: i32,
        content: String,
    ) -> Result<Option<entity::comment::Model>, DbErr> {
        let comment = entity::prelude::Comment::find_by_id(comment_id)
            .filter(entity::comment::Column::CreatorId.eq(creator_id))
            .one(self.db)
            .await?;

        let Some(comment) = comment else {
            return Ok(None);
        };

        let mut active: entity::comment::ActiveModel = comment.into();
        active.content = ActiveValue::Set(content);

        let updated = active.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Deletes a comment owned by `creator_id`.
    ///
    /// # Returns
    /// - `Ok(rows)` - 0 when the comment does not exist or is owned by someone else
    pub async fn delete_owned(&self, comment_id: i32, creator_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::Id.eq(comment_id))
            .filter(entity::comment::Column::CreatorId.eq(creator_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Whether `user_id` has commented on the post at least once.
    pub async fn has_commented(&self, post_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.eq(post_id))
            .filter(entity::comment::Column::CreatorId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn count_for_post(&self, post_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.eq(post_id))
            .count(self.db)
            .await
    }
}
