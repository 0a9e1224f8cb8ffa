//! User service: profiles, the pilot directory and the follow graph.

use std::collections::HashMap;

use crate::{
    data::{
        follow::FollowRepository, notification::NotificationRepository, post::PostRepository,
        route::RouteRepository, user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        notification::CreateNotificationParams,
        user::{CreatorDto, FollowToggleDto, PilotQuery, UpdateUserParams, UserDto},
    },
    service::media::MediaService,
    state::AppState,
};
use entity::notification::NotificationKind;

/// Service providing business logic for pilot accounts and follows.
pub struct UserService<'a> {
    state: &'a AppState,
}

impl<'a> UserService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn media(&self) -> MediaService<'_> {
        MediaService::new(&self.state.http_client, &self.state.media)
    }

    /// Assembles the full profile DTO with live counts and viewer flags.
    ///
    /// # Arguments
    /// - `user` - The profiled account
    /// - `viewer_id` - The authenticated caller, if any; drives
    ///   `is_following` / `is_followed`
    pub async fn user_dto(
        &self,
        user: &entity::user::Model,
        viewer_id: Option<i32>,
    ) -> Result<UserDto, AppError> {
        let follow_repo = FollowRepository::new(&self.state.db);
        let post_repo = PostRepository::new(&self.state.db);
        let route_repo = RouteRepository::new(&self.state.db);
        let media = self.media();

        let followers_count = follow_repo.follower_count(user.id).await?;
        let following_count = follow_repo.following_count(user.id).await?;
        let posts_count = post_repo.count_by_creator(user.id).await?;
        let routes_count = route_repo.count_by_pilot(user.id).await?;

        let (is_following, is_followed) = match viewer_id {
            Some(viewer_id) if viewer_id != user.id => (
                follow_repo.exists(viewer_id, user.id).await?,
                follow_repo.exists(user.id, viewer_id).await?,
            ),
            _ => (false, false),
        };

        Ok(UserDto {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            pilot_type: user.pilot_type.clone(),
            flight_hours: user.flight_hours,
            aircraft_types: user.aircraft_types.clone(),
            license_number: user.license_number.clone(),
            bio: user.bio.clone(),
            profile_pic: media.resolve(user.profile_pic.as_deref()),
            cover_pic: media.resolve(user.cover_pic.as_deref()),
            is_staff: user.is_staff,
            date_joined: user.date_joined,
            followers_count,
            following_count,
            posts_count,
            routes_count,
            is_following,
            is_followed,
        })
    }

    pub fn creator_dto(&self, user: &entity::user::Model) -> CreatorDto {
        let media = self.media();

        CreatorDto {
            id: user.id,
            username: user.username.clone(),
            pilot_type: user.pilot_type.clone(),
            profile_pic: media.resolve(user.profile_pic.as_deref()),
        }
    }

    /// Batch-loads compact creator DTOs for feed assembly.
    pub async fn creator_map(&self, ids: Vec<i32>) -> Result<HashMap<i32, CreatorDto>, AppError> {
        let user_repo = UserRepository::new(&self.state.db);

        let mut unique = ids;
        unique.sort_unstable();
        unique.dedup();

        let users = user_repo.find_many(unique).await?;

        Ok(users
            .iter()
            .map(|user| (user.id, self.creator_dto(user)))
            .collect())
    }

    /// Profile lookup by id. Banned accounts are hidden from everyone except
    /// themselves.
    pub async fn profile(&self, user_id: i32, viewer_id: Option<i32>) -> Result<UserDto, AppError> {
        let user_repo = UserRepository::new(&self.state.db);

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found.".to_string()));
        };

        if !user.is_active && viewer_id != Some(user.id) {
            return Err(AppError::NotFound("User not found.".to_string()));
        }

        self.user_dto(&user, viewer_id).await
    }

    /// Applies a profile update for the authenticated user.
    ///
    /// `password` is the plain new password, hashed here; email changes are
    /// checked against other accounts.
    pub async fn update_profile(
        &self,
        user: &entity::user::Model,
        mut params: UpdateUserParams,
        password: Option<String>,
    ) -> Result<UserDto, AppError> {
        let user_repo = UserRepository::new(&self.state.db);

        if let Some(email) = &params.email {
            let changed = email.to_lowercase() != user.email;
            if changed && user_repo.email_taken(email).await? {
                return Err(AppError::Validation {
                    field: "email".to_string(),
                    message: "An account with this email already exists.".to_string(),
                });
            }
        }

        if let Some(password) = password {
            if password.len() < 8 || !password.chars().any(|c| c.is_ascii_alphabetic()) {
                return Err(AppError::Validation {
                    field: "password".to_string(),
                    message: "Password must be at least 8 characters and contain a letter."
                        .to_string(),
                });
            }
            params.password_hash = Some(bcrypt::hash(&password, bcrypt::DEFAULT_COST)?);
        }

        let Some(updated) = user_repo.update(user.id, params).await? else {
            return Err(AppError::NotFound("User not found.".to_string()));
        };

        self.user_dto(&updated, Some(updated.id)).await
    }

    /// Toggles the follow edge from `actor` to `target_id`.
    ///
    /// Following yourself is denied. A new follow (not an unfollow) notifies
    /// the target; old notifications survive a later unfollow.
    ///
    /// # Returns
    /// - `Ok(FollowToggleDto)` - New edge state plus fresh counts
    /// - `Err(AuthError::AccessDenied)` - Self-follow attempt
    /// - `Err(AppError::NotFound)` - Target does not exist or is banned
    pub async fn follow_toggle(
        &self,
        actor: &entity::user::Model,
        target_id: i32,
    ) -> Result<FollowToggleDto, AppError> {
        if actor.id == target_id {
            return Err(AuthError::AccessDenied(
                actor.id,
                "Attempted to follow themselves".to_string(),
            )
            .into());
        }

        let user_repo = UserRepository::new(&self.state.db);
        let follow_repo = FollowRepository::new(&self.state.db);

        let target = user_repo.find_by_id(target_id).await?;
        let Some(target) = target.filter(|target| target.is_active) else {
            return Err(AppError::NotFound("User not found.".to_string()));
        };

        let followed = if follow_repo.exists(actor.id, target.id).await? {
            follow_repo.delete(actor.id, target.id).await?;
            false
        } else {
            follow_repo.create(actor.id, target.id).await?;

            let notification_repo = NotificationRepository::new(&self.state.db);
            notification_repo
                .create(CreateNotificationParams {
                    user_id: target.id,
                    actor_id: Some(actor.id),
                    kind: NotificationKind::Follow,
                    message: format!("{} started following you", actor.username),
                    target_type: Some("user".to_string()),
                    target_id: Some(actor.id),
                })
                .await?;

            true
        };

        Ok(FollowToggleDto {
            followed,
            followers_count: follow_repo.follower_count(target.id).await?,
            following_count: follow_repo.following_count(actor.id).await?,
        })
    }

    /// Followers of a user, as full profile DTOs.
    pub async fn followers(
        &self,
        user_id: i32,
        viewer_id: Option<i32>,
    ) -> Result<Vec<UserDto>, AppError> {
        let follow_repo = FollowRepository::new(&self.state.db);
        let users = follow_repo.followers_of(user_id).await?;

        self.user_dtos(users, viewer_id).await
    }

    /// Users someone follows, as full profile DTOs.
    pub async fn following(
        &self,
        user_id: i32,
        viewer_id: Option<i32>,
    ) -> Result<Vec<UserDto>, AppError> {
        let follow_repo = FollowRepository::new(&self.state.db);
        let users = follow_repo.following_of(user_id).await?;

        self.user_dtos(users, viewer_id).await
    }

    /// The pilot directory with filters and ordering.
    pub async fn pilots(
        &self,
        query: &PilotQuery,
        viewer_id: Option<i32>,
    ) -> Result<Vec<UserDto>, AppError> {
        let user_repo = UserRepository::new(&self.state.db);
        let users = user_repo.search_pilots(query).await?;

        self.user_dtos(users, viewer_id).await
    }

    async fn user_dtos(
        &self,
        users: Vec<entity::user::Model>,
        viewer_id: Option<i32>,
    ) -> Result<Vec<UserDto>, AppError> {
        let mut dtos = Vec::with_capacity(users.len());

        for user in &users {
            dtos.push(self.user_dto(user, viewer_id).await?);
        }

        Ok(dtos)
    }
}
