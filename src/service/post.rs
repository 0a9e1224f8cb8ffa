//! Post service: the feed, posts, comments and like/save toggles.

use std::collections::HashMap;

use crate::{
    data::{
        comment::CommentRepository, notification::NotificationRepository, post::PostRepository,
    },
    error::AppError,
    model::{
        notification::CreateNotificationParams,
        post::{
            CommentDto, CreatePostParams, ImageField, LikeToggleDto, PostDto, SaveToggleDto,
        },
    },
    service::{media::MediaService, user::UserService},
    state::AppState,
    util::humanize,
};
use chrono::Utc;
use entity::notification::NotificationKind;

/// Service providing business logic for posts and comments.
pub struct PostService<'a> {
    state: &'a AppState,
}

impl<'a> PostService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn media(&self) -> MediaService<'_> {
        MediaService::new(&self.state.http_client, &self.state.media)
    }

    /// The global feed, newest first.
    pub async fn feed(&self, viewer_id: Option<i32>) -> Result<Vec<PostDto>, AppError> {
        let post_repo = PostRepository::new(&self.state.db);
        let posts = post_repo.list_recent().await?;

        self.post_dtos(posts, viewer_id).await
    }

    /// Creates a post. Either content or at least one image is required.
    pub async fn create(
        &self,
        creator: &entity::user::Model,
        content: String,
        images: Vec<String>,
    ) -> Result<PostDto, AppError> {
        if content.trim().is_empty() && images.is_empty() {
            return Err(AppError::Validation {
                field: "content".to_string(),
                message: "A post needs text or at least one image.".to_string(),
            });
        }

        let post_repo = PostRepository::new(&self.state.db);
        let post = post_repo
            .create(CreatePostParams {
                creator_id: creator.id,
                content,
                images,
            })
            .await?;

        self.get(post.id, Some(creator.id)).await
    }

    /// Single post by id.
    pub async fn get(&self, post_id: i32, viewer_id: Option<i32>) -> Result<PostDto, AppError> {
        let post_repo = PostRepository::new(&self.state.db);

        let Some(post) = post_repo.find_by_id(post_id).await? else {
            return Err(AppError::NotFound("Post not found.".to_string()));
        };

        let mut dtos = self.post_dtos(vec![post], viewer_id).await?;

        dtos.pop()
            .ok_or_else(|| AppError::InternalError("Post DTO assembly produced nothing".to_string()))
    }

    /// Updates the content of the caller's own post.
    ///
    /// Someone else's post is indistinguishable from a missing one: 404.
    pub async fn update(
        &self,
        user: &entity::user::Model,
        post_id: i32,
        content: String,
    ) -> Result<PostDto, AppError> {
        if content.trim().is_empty() {
            return Err(AppError::Validation {
                field: "content".to_string(),
                message: "Content cannot be empty.".to_string(),
            });
        }

        let post_repo = PostRepository::new(&self.state.db);

        let updated = post_repo.update_content(post_id, user.id, content).await?;
        if updated.is_none() {
            return Err(AppError::NotFound("Post not found.".to_string()));
        }

        self.get(post_id, Some(user.id)).await
    }

    /// Deletes the caller's own post.
    pub async fn delete(&self, user: &entity::user::Model, post_id: i32) -> Result<(), AppError> {
        let post_repo = PostRepository::new(&self.state.db);

        let deleted = post_repo.delete_owned(post_id, user.id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Post not found.".to_string()));
        }

        Ok(())
    }

    /// Toggles the caller's like on a post.
    ///
    /// A new like (not an unlike) notifies the post owner, unless the caller
    /// likes their own post.
    pub async fn like_toggle(
        &self,
        user: &entity::user::Model,
        post_id: i32,
    ) -> Result<LikeToggleDto, AppError> {
        let post_repo = PostRepository::new(&self.state.db);

        let Some(post) = post_repo.find_by_id(post_id).await? else {
            return Err(AppError::NotFound("Post not found.".to_string()));
        };

        let liked = if post_repo.like_exists(post.id, user.id).await? {
            post_repo.remove_like(post.id, user.id).await?;
            false
        } else {
            post_repo.add_like(post.id, user.id).await?;

            if post.creator_id != user.id {
                let notification_repo = NotificationRepository::new(&self.state.db);
                notification_repo
                    .create(CreateNotificationParams {
                        user_id: post.creator_id,
                        actor_id: Some(user.id),
                        kind: NotificationKind::PostLike,
                        message: format!("{} liked your post", user.username),
                        target_type: Some("post".to_string()),
                        target_id: Some(post.id),
                    })
                    .await?;
            }

            true
        };

        Ok(LikeToggleDto {
            liked,
            likes_count: post_repo.like_count(post.id).await?,
        })
    }

    /// Toggles the caller's save on a post. Mirrors the like toggle.
    pub async fn save_toggle(
        &self,
        user: &entity::user::Model,
        post_id: i32,
    ) -> Result<SaveToggleDto, AppError> {
        let post_repo = PostRepository::new(&self.state.db);

        let Some(post) = post_repo.find_by_id(post_id).await? else {
            return Err(AppError::NotFound("Post not found.".to_string()));
        };

        let saved = if post_repo.save_exists(post.id, user.id).await? {
            post_repo.remove_save(post.id, user.id).await?;
            false
        } else {
            post_repo.add_save(post.id, user.id).await?;

            if post.creator_id != user.id {
                let notification_repo = NotificationRepository::new(&self.state.db);
                notification_repo
                    .create(CreateNotificationParams {
                        user_id: post.creator_id,
                        actor_id: Some(user.id),
                        kind: NotificationKind::PostSave,
                        message: format!("{} saved your post", user.username),
                        target_type: Some("post".to_string()),
                        target_id: Some(post.id),
                    })
                    .await?;
            }

            true
        };

        Ok(SaveToggleDto {
            saved,
            saves_count: post_repo.save_count(post.id).await?,
        })
    }

    /// Posts the caller saved, most recently saved first.
    pub async fn saved(&self, user: &entity::user::Model) -> Result<Vec<PostDto>, AppError> {
        let post_repo = PostRepository::new(&self.state.db);
        let posts = post_repo.list_saved_by(user.id).await?;

        self.post_dtos(posts, Some(user.id)).await
    }

    /// Comments of a post, oldest first.
    pub async fn comments(&self, post_id: i32) -> Result<Vec<CommentDto>, AppError> {
        let post_repo = PostRepository::new(&self.state.db);
        let comment_repo = CommentRepository::new(&self.state.db);

        if post_repo.find_by_id(post_id).await?.is_none() {
            return Err(AppError::NotFound("Post not found.".to_string()));
        }

        let comments = comment_repo.list_for_post(post_id).await?;

        let user_service = UserService::new(self.state);
        let creators = user_service
            .creator_map(comments.iter().map(|comment| comment.creator_id).collect())
            .await?;

        let now = Utc::now();

        Ok(comments
            .into_iter()
            .filter_map(|comment| {
                let creator = creators.get(&comment.creator_id)?.clone();
                Some(CommentDto {
                    id: comment.id,
                    post_id: comment.post_id,
                    creator,
                    content: comment.content,
                    created: comment.created,
                    created_display: humanize::natural_time(comment.created, now),
                })
            })
            .collect())
    }

    /// Adds a comment to a post.
    pub async fn add_comment(
        &self,
        user: &entity::user::Model,
        post_id: i32,
        content: String,
    ) -> Result<CommentDto, AppError> {
        if content.trim().is_empty() {
            return Err(AppError::Validation {
                field: "content".to_string(),
                message: "Content cannot be empty.".to_string(),
            });
        }

        let post_repo = PostRepository::new(&self.state.db);
        if post_repo.find_by_id(post_id).await?.is_none() {
            return Err(AppError::NotFound("Post not found.".to_string()));
        }

        let comment_repo = CommentRepository::new(&self.state.db);
        let comment = comment_repo.create(post_id, user.id, content).await?;

        let user_service = UserService::new(self.state);

        Ok(CommentDto {
            id: comment.id,
            post_id: comment.post_id,
            creator: user_service.creator_dto(user),
            content: comment.content,
            created: comment.created,
            created_display: humanize::natural_time(comment.created, Utc::now()),
        })
    }

    /// Updates the caller's own comment; someone else's is a 404.
    pub async fn update_comment(
        &self,
        user: &entity::user::Model,
        comment_id: i32,
        content: String,
    ) -> Result<CommentDto, AppError> {
        if content.trim().is_empty() {
            return Err(AppError::Validation {
                field: "content".to_string(),
                message: "Content cannot be empty.".to_string(),
            });
        }

        let comment_repo = CommentRepository::new(&self.state.db);

        let Some(comment) = comment_repo
            .update_owned(comment_id, user.id, content)
            .await?
        else {
            return Err(AppError::NotFound("Comment not found.".to_string()));
        };

        let user_service = UserService::new(self.state);

        Ok(CommentDto {
            id: comment.id,
            post_id: comment.post_id,
            creator: user_service.creator_dto(user),
            content: comment.content,
            created: comment.created,
            created_display: humanize::natural_time(comment.created, Utc::now()),
        })
    }

    /// Deletes the caller's own comment; someone else's is a 404.
    pub async fn delete_comment(
        &self,
        user: &entity::user::Model,
        comment_id: i32,
    ) -> Result<(), AppError> {
        let comment_repo = CommentRepository::new(&self.state.db);

        let deleted = comment_repo.delete_owned(comment_id, user.id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Comment not found.".to_string()));
        }

        Ok(())
    }

    /// Assembles post DTOs: batched images and creators, per-post counts and
    /// viewer flags.
    async fn post_dtos(
        &self,
        posts: Vec<entity::post::Model>,
        viewer_id: Option<i32>,
    ) -> Result<Vec<PostDto>, AppError> {
        let post_repo = PostRepository::new(&self.state.db);
        let comment_repo = CommentRepository::new(&self.state.db);
        let user_service = UserService::new(self.state);
        let media = self.media();

        let post_ids: Vec<i32> = posts.iter().map(|post| post.id).collect();

        let mut images_by_post: HashMap<i32, Vec<String>> = HashMap::new();
        for image in post_repo.images_for_many(post_ids).await? {
            images_by_post
                .entry(image.post_id)
                .or_default()
                .push(media.url_for(&image.image));
        }

        let creators = user_service
            .creator_map(posts.iter().map(|post| post.creator_id).collect())
            .await?;

        let now = Utc::now();
        let mut dtos = Vec::with_capacity(posts.len());

        for post in posts {
            // Creator rows are missing only mid-cascade during account
            // deletion; skip such posts instead of failing the whole feed.
            let Some(creator) = creators.get(&post.creator_id).cloned() else {
                continue;
            };

            let images = images_by_post.remove(&post.id).unwrap_or_default();

            let (is_liked, is_saved, is_commented) = match viewer_id {
                Some(viewer_id) => (
                    post_repo.like_exists(post.id, viewer_id).await?,
                    post_repo.save_exists(post.id, viewer_id).await?,
                    comment_repo.has_commented(post.id, viewer_id).await?,
                ),
                None => (false, false, false),
            };

            dtos.push(PostDto {
                id: post.id,
                creator,
                content: post.content,
                image: ImageField::from_urls(&images),
                images,
                likes_count: post_repo.like_count(post.id).await?,
                comments_count: comment_repo.count_for_post(post.id).await?,
                saves_count: post_repo.save_count(post.id).await?,
                is_liked,
                is_saved,
                is_commented,
                is_edited: post.is_edited,
                created: post.created,
                created_display: humanize::natural_time(post.created, now),
            });
        }

        Ok(dtos)
    }
}
