//! Post repository: posts, image attachments, likes and saves.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::model::post::CreatePostParams;

/// Repository providing database operations for posts and their attachments.
pub struct PostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a post together with its ordered image rows.
    ///
    /// Post and images are inserted in one transaction so a failed image
    /// insert never leaves a half-attached post behind.
    ///
    /// # Arguments
    /// - `params` - Creator, content and image storage keys in display order
    ///
    /// # Returns
    /// - `Ok(Model)` - The created post
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn create(&self, params: CreatePostParams) -> Result<entity::post::Model, DbErr> {
        let txn = self.db.begin().await?;

        let post = entity::post::ActiveModel {
            creator_id: ActiveValue::Set(params.creator_id),
            content: ActiveValue::Set(params.content),
            is_edited: ActiveValue::Set(false),
            created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for (position, image) in params.images.into_iter().enumerate() {
            entity::post_image::ActiveModel {
                post_id: ActiveValue::Set(post.id),
                image: ActiveValue::Set(image),
                position: ActiveValue::Set(position as i32),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(post)
    }

    pub async fn find_by_id(&self, post_id: i32) -> Result<Option<entity::post::Model>, DbErr> {
        entity::prelude::Post::find_by_id(post_id).one(self.db).await
    }

    /// Lists every post, newest first.
    pub async fn list_recent(&self) -> Result<Vec<entity::post::Model>, DbErr> {
        entity::prelude::Post::find()
            .order_by_desc(entity::post::Column::Created)
            .all(self.db)
            .await
    }

    /// Updates the content of a post owned by `creator_id` and marks it
    /// edited.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated post
    /// - `Ok(None)` - Post does not exist or belongs to someone else; the
    ///   caller maps this to 404 so ownership is not revealed
    pub async fn update_content(
        &self,
        post_id: i32,
        creator_id: i32,
        content: String,
    ) -> Result<Option<entity::post::Model>, DbErr> {
        let post = entity::prelude::Post::find_by_id(post_id)
            .filter(entity::post::Column::CreatorId.eq(creator_id))
            .one(self.db)
            .await?;

        let Some(post) = post else {
            return Ok(None);
        };

        let mut active: entity::post::ActiveModel = post.into();
        active.content = ActiveValue::Set(content);
        active.is_edited = ActiveValue::Set(true);

        let updated = active.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Deletes a post owned by `creator_id`. Images, comments, likes and
    /// saves go with it via cascading foreign keys.
    ///
    /// # Returns
    /// - `Ok(rows)` - 0 when the post does not exist or is owned by someone else
    pub async fn delete_owned(&self, post_id: i32, creator_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Post::delete_many()
            .filter(entity::post::Column::Id.eq(post_id))
            .filter(entity::post::Column::CreatorId.eq(creator_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Image rows of one post, in attachment order.
    pub async fn images_for(
        &self,
        post_id: i32,
    ) -> Result<Vec<entity::post_image::Model>, DbErr> {
        entity::prelude::PostImage::find()
            .filter(entity::post_image::Column::PostId.eq(post_id))
            .order_by_asc(entity::post_image::Column::Position)
            .all(self.db)
            .await
    }

    /// Image rows of many posts in one query. Ordered by post then position;
    /// the service groups them per post.
    pub async fn images_for_many(
        &self,
        post_ids: Vec<i32>,
    ) -> Result<Vec<entity::post_image::Model>, DbErr> {
        if post_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::PostImage::find()
            .filter(entity::post_image::Column::PostId.is_in(post_ids))
            .order_by_asc(entity::post_image::Column::PostId)
            .order_by_asc(entity::post_image::Column::Position)
            .all(self.db)
            .await
    }

    pub async fn like_exists(&self, post_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::PostLike::find()
            .filter(entity::post_like::Column::PostId.eq(post_id))
            .filter(entity::post_like::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn add_like(&self, post_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::post_like::ActiveModel {
            post_id: ActiveValue::Set(post_id),
            user_id: ActiveValue::Set(user_id),
            created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn remove_like(&self, post_id: i32, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::PostLike::delete_many()
            .filter(entity::post_like::Column::PostId.eq(post_id))
            .filter(entity::post_like::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn like_count(&self, post_id: i32) -> Result<u64, DbErr> {
        entity::prelude::PostLike::find()
            .filter(entity::post_like::Column::PostId.eq(post_id))
            .count(self.db)
            .await
    }

    pub async fn save_exists(&self, post_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::PostSave::find()
            .filter(entity::post_save::Column::PostId.eq(post_id))
            .filter(entity::post_save::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn add_save(&self, post_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::post_save::ActiveModel {
            post_id: ActiveValue::Set(post_id),
            user_id: ActiveValue::Set(user_id),
            created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn remove_save(&self, post_id: i32, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::PostSave::delete_many()
            .filter(entity::post_save::Column::PostId.eq(post_id))
            .filter(entity::post_save::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn save_count(&self, post_id: i32) -> Result<u64, DbErr> {
        entity::prelude::PostSave::find()
            .filter(entity::post_save::Column::PostId.eq(post_id))
            .count(self.db)
            .await
    }

    /// Posts the user saved, most recently saved first.
    pub async fn list_saved_by(&self, user_id: i32) -> Result<Vec<entity::post::Model>, DbErr> {
        let saves = entity::prelude::PostSave::find()
            .filter(entity::post_save::Column::UserId.eq(user_id))
            .order_by_desc(entity::post_save::Column::Created)
            .all(self.db)
            .await?;

        let ordered_ids: Vec<i32> = saves.iter().map(|save| save.post_id).collect();

        if ordered_ids.is_empty() {
            return Ok(Vec::new());
        }

        let posts = entity::prelude::Post::find()
            .filter(entity::post::Column::Id.is_in(ordered_ids.clone()))
            .all(self.db)
            .await?;

        let mut by_id: std::collections::HashMap<i32, entity::post::Model> =
            posts.into_iter().map(|post| (post.id, post)).collect();

        Ok(ordered_ids
            .into_iter()
            .filter_map(|id| by_id.remove(&id))
            .collect())
    }

    pub async fn count_by_creator(&self, creator_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Post::find()
            .filter(entity::post::Column::CreatorId.eq(creator_id))
            .count(self.db)
            .await
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::Post::find().count(self.db).await
    }

    pub async fn count_created_since(&self, since: DateTime<Utc>) -> Result<u64, DbErr> {
        entity::prelude::Post::find()
            .filter(entity::post::Column::Created.gte(since))
            .count(self.db)
            .await
    }
}
