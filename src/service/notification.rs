//! Notification service: the feed, read receipts and target resolution.

use std::collections::{HashMap, HashSet};

use chrono::Utc;

use crate::{
    data::{
        notification::NotificationRepository, post::PostRepository, route::RouteRepository,
        user::UserRepository,
    },
    error::AppError,
    model::notification::{
        NotificationActorDto, NotificationDto, NotificationQuery, NotificationTargetDto,
        UnreadCountDto,
    },
    service::media::MediaService,
    state::AppState,
};

/// Service providing business logic for the notification feed.
pub struct NotificationService<'a> {
    state: &'a AppState,
}

impl<'a> NotificationService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// The caller's notifications, newest first.
    ///
    /// Actors are resolved in one batch. Targets whose row has been deleted
    /// since the notification was created resolve to `None`; the notification
    /// itself is kept.
    pub async fn list(
        &self,
        user: &entity::user::Model,
        query: &NotificationQuery,
    ) -> Result<Vec<NotificationDto>, AppError> {
        let notification_repo = NotificationRepository::new(&self.state.db);
        let notifications = notification_repo.list_for_user(user.id, query.unread).await?;

        let actors = self
            .actor_map(
                notifications
                    .iter()
                    .filter_map(|notification| notification.actor_id)
                    .collect(),
            )
            .await?;

        let now = Utc::now();
        let mut dtos = Vec::with_capacity(notifications.len());

        for notification in notifications {
            let target = self
                .resolve_target(
                    notification.target_type.as_deref(),
                    notification.target_id,
                )
                .await?;

            dtos.push(NotificationDto {
                id: notification.id,
                kind: notification.kind,
                message: notification.message,
                actor: notification
                    .actor_id
                    .and_then(|actor_id| actors.get(&actor_id).cloned()),
                target,
                is_read: notification.is_read,
                created: notification.created,
                created_display: crate::util::humanize::natural_time(notification.created, now),
            });
        }

        Ok(dtos)
    }

    /// Marks one of the caller's notifications read.
    pub async fn mark_read(
        &self,
        user: &entity::user::Model,
        notification_id: i32,
    ) -> Result<(), AppError> {
        let notification_repo = NotificationRepository::new(&self.state.db);

        if !notification_repo.mark_read(notification_id, user.id).await? {
            return Err(AppError::NotFound("Notification not found.".to_string()));
        }

        Ok(())
    }

    /// Marks every unread notification of the caller read.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of notifications flipped
    pub async fn mark_all_read(&self, user: &entity::user::Model) -> Result<u64, AppError> {
        let notification_repo = NotificationRepository::new(&self.state.db);

        Ok(notification_repo.mark_all_read(user.id).await?)
    }

    pub async fn unread_count(
        &self,
        user: &entity::user::Model,
    ) -> Result<UnreadCountDto, AppError> {
        let notification_repo = NotificationRepository::new(&self.state.db);

        Ok(UnreadCountDto {
            unread_count: notification_repo.unread_count(user.id).await?,
        })
    }

    async fn actor_map(
        &self,
        ids: HashSet<i32>,
    ) -> Result<HashMap<i32, NotificationActorDto>, AppError> {
        let user_repo = UserRepository::new(&self.state.db);
        let media = MediaService::new(&self.state.http_client, &self.state.media);

        let users = user_repo.find_many(ids.into_iter().collect()).await?;

        Ok(users
            .into_iter()
            .map(|user| {
                let profile_pic = media.resolve(user.profile_pic.as_deref());
                (
                    user.id,
                    NotificationActorDto {
                        id: user.id,
                        username: user.username,
                        profile_pic,
                    },
                )
            })
            .collect())
    }

    /// Resolves the stored soft reference into a typed target, checking the
    /// referenced row still exists.
    async fn resolve_target(
        &self,
        target_type: Option<&str>,
        target_id: Option<i32>,
    ) -> Result<Option<NotificationTargetDto>, AppError> {
        let (Some(target_type), Some(id)) = (target_type, target_id) else {
            return Ok(None);
        };

        let target = match target_type {
            "post" => PostRepository::new(&self.state.db)
                .find_by_id(id)
                .await?
                .map(|post| NotificationTargetDto::Post { id: post.id }),
            "route" => RouteRepository::new(&self.state.db)
                .find_by_id(id)
                .await?
                .map(|route| NotificationTargetDto::Route { id: route.id }),
            "user" => UserRepository::new(&self.state.db)
                .find_by_id(id)
                .await?
                .map(|user| NotificationTargetDto::User { id: user.id }),
            _ => None,
        };

        Ok(target)
    }
}
