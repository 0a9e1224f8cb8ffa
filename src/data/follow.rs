//! Follow-graph repository.
//!
//! A follow relationship is a single directed edge row: follower -> followee.
//! Counts and reverse lookups come from the two indexed columns.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Repository providing database operations for the follow graph.
pub struct FollowRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FollowRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn exists(&self, follower_id: i32, followee_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Follow::find()
            .filter(entity::follow::Column::FollowerId.eq(follower_id))
            .filter(entity::follow::Column::FolloweeId.eq(followee_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts the follow edge. The unique pair index rejects duplicates.
    pub async fn create(
        &self,
        follower_id: i32,
        followee_id: i32,
    ) -> Result<entity::follow::Model, DbErr> {
        entity::follow::ActiveModel {
            follower_id: ActiveValue::Set(follower_id),
            followee_id: ActiveValue::Set(followee_id),
            created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Removes the follow edge.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of deleted rows (0 when the edge did not exist)
    pub async fn delete(&self, follower_id: i32, followee_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Follow::delete_many()
            .filter(entity::follow::Column::FollowerId.eq(follower_id))
            .filter(entity::follow::Column::FolloweeId.eq(followee_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// How many users follow `user_id`.
    pub async fn follower_count(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Follow::find()
            .filter(entity::follow::Column::FolloweeId.eq(user_id))
            .count(self.db)
            .await
    }

    /// How many users `user_id` follows.
    pub async fn following_count(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Follow::find()
            .filter(entity::follow::Column::FollowerId.eq(user_id))
            .count(self.db)
            .await
    }

    /// Ids of everyone `user_id` follows. Feeds the route visibility filter
    /// and the following feed.
    pub async fn following_ids(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        let ids = entity::prelude::Follow::find()
            .filter(entity::follow::Column::FollowerId.eq(user_id))
            .select_only()
            .column(entity::follow::Column::FolloweeId)
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        Ok(ids)
    }

    /// Users who follow `user_id`, most recent follower first.
    pub async fn followers_of(&self, user_id: i32) -> Result<Vec<entity::user::Model>, DbErr> {
        let edges = entity::prelude::Follow::find()
            .filter(entity::follow::Column::FolloweeId.eq(user_id))
            .order_by_desc(entity::follow::Column::Created)
            .all(self.db)
            .await?;

        self.users_in_edge_order(edges.iter().map(|edge| edge.follower_id).collect())
            .await
    }

    /// Users `user_id` follows, most recently followed first.
    pub async fn following_of(&self, user_id: i32) -> Result<Vec<entity::user::Model>, DbErr> {
        let edges = entity::prelude::Follow::find()
            .filter(entity::follow::Column::FollowerId.eq(user_id))
            .order_by_desc(entity::follow::Column::Created)
            .all(self.db)
            .await?;

        self.users_in_edge_order(edges.iter().map(|edge| edge.followee_id).collect())
            .await
    }

    /// Loads users by id, preserving the given order.
    async fn users_in_edge_order(
        &self,
        ordered_ids: Vec<i32>,
    ) -> Result<Vec<entity::user::Model>, DbErr> {
        if ordered_ids.is_empty() {
            return Ok(Vec::new());
        }

        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ordered_ids.clone()))
            .all(self.db)
            .await?;

        let mut by_id: std::collections::HashMap<i32, entity::user::Model> =
            users.into_iter().map(|user| (user.id, user)).collect();

        Ok(ordered_ids
            .into_iter()
            .filter_map(|id| by_id.remove(&id))
            .collect())
    }
}
