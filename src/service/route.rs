//! Flight route service: listings under visibility rules, CRUD, toggles.

use crate::{
    data::{
        follow::FollowRepository, notification::NotificationRepository, route::RouteRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        notification::CreateNotificationParams,
        post::{LikeToggleDto, SaveToggleDto},
        route::{
            CreateRouteParams, RouteDto, RouteQuery, RouteViewer, UpdateRouteParams, Waypoint,
        },
    },
    service::{media::MediaService, user::UserService},
    state::AppState,
    util::humanize,
};
use entity::flight_route::RouteVisibility;
use entity::notification::NotificationKind;

/// Service providing business logic for flight routes.
pub struct RouteService<'a> {
    state: &'a AppState,
}

impl<'a> RouteService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Builds the viewer context for visibility filtering.
    pub async fn viewer(&self, viewer_id: Option<i32>) -> Result<Option<RouteViewer>, AppError> {
        let Some(user_id) = viewer_id else {
            return Ok(None);
        };

        let follow_repo = FollowRepository::new(&self.state.db);
        let following_ids = follow_repo.following_ids(user_id).await?;

        Ok(Some(RouteViewer {
            user_id,
            following_ids,
        }))
    }

    /// Routes visible to the viewer, filtered and ordered by the query.
    pub async fn list(
        &self,
        query: &RouteQuery,
        viewer_id: Option<i32>,
    ) -> Result<Vec<RouteDto>, AppError> {
        let viewer = self.viewer(viewer_id).await?;

        let route_repo = RouteRepository::new(&self.state.db);
        let routes = route_repo.list_visible(query, viewer.as_ref()).await?;

        self.route_dtos(routes, viewer_id).await
    }

    /// The caller's own routes, all visibilities.
    pub async fn mine(&self, user: &entity::user::Model) -> Result<Vec<RouteDto>, AppError> {
        let viewer = self.viewer(Some(user.id)).await?;

        let route_repo = RouteRepository::new(&self.state.db);
        let routes = route_repo.list_by_pilot(user.id, viewer.as_ref()).await?;

        self.route_dtos(routes, Some(user.id)).await
    }

    /// Routes from pilots the caller follows.
    pub async fn following_feed(
        &self,
        user: &entity::user::Model,
    ) -> Result<Vec<RouteDto>, AppError> {
        let Some(viewer) = self.viewer(Some(user.id)).await? else {
            return Ok(Vec::new());
        };

        let route_repo = RouteRepository::new(&self.state.db);
        let routes = route_repo.list_following(&viewer).await?;

        self.route_dtos(routes, Some(user.id)).await
    }

    /// Routes the caller saved and can still see.
    pub async fn saved(&self, user: &entity::user::Model) -> Result<Vec<RouteDto>, AppError> {
        let Some(viewer) = self.viewer(Some(user.id)).await? else {
            return Ok(Vec::new());
        };

        let route_repo = RouteRepository::new(&self.state.db);
        let routes = route_repo.list_saved_by(user.id, &viewer).await?;

        self.route_dtos(routes, Some(user.id)).await
    }

    /// Single route, 404 when hidden from this viewer.
    pub async fn get(&self, route_id: i32, viewer_id: Option<i32>) -> Result<RouteDto, AppError> {
        let viewer = self.viewer(viewer_id).await?;

        let route_repo = RouteRepository::new(&self.state.db);
        let Some(route) = route_repo.find_visible(route_id, viewer.as_ref()).await? else {
            return Err(AppError::NotFound("Route not found.".to_string()));
        };

        self.route_dto(route, viewer_id).await
    }

    pub async fn create(
        &self,
        user: &entity::user::Model,
        mut params: CreateRouteParams,
    ) -> Result<RouteDto, AppError> {
        params.pilot_id = user.id;

        let route_repo = RouteRepository::new(&self.state.db);
        let route = route_repo.create(params).await?;

        self.route_dto(route, Some(user.id)).await
    }

    /// Updates the caller's own route; someone else's is a 404.
    pub async fn update(
        &self,
        user: &entity::user::Model,
        route_id: i32,
        params: UpdateRouteParams,
    ) -> Result<RouteDto, AppError> {
        let route_repo = RouteRepository::new(&self.state.db);

        let Some(route) = route_repo.find_owned(route_id, user.id).await? else {
            return Err(AppError::NotFound("Route not found.".to_string()));
        };

        let updated = route_repo.update(route, params).await?;

        self.route_dto(updated, Some(user.id)).await
    }

    /// Deletes the caller's own route; someone else's is a 404.
    pub async fn delete(&self, user: &entity::user::Model, route_id: i32) -> Result<(), AppError> {
        let route_repo = RouteRepository::new(&self.state.db);

        let deleted = route_repo.delete_owned(route_id, user.id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Route not found.".to_string()));
        }

        Ok(())
    }

    /// Toggles the caller's like on a route they can see.
    pub async fn like_toggle(
        &self,
        user: &entity::user::Model,
        route_id: i32,
    ) -> Result<LikeToggleDto, AppError> {
        let viewer = self.viewer(Some(user.id)).await?;

        let route_repo = RouteRepository::new(&self.state.db);
        let Some(route) = route_repo.find_visible(route_id, viewer.as_ref()).await? else {
            return Err(AppError::NotFound("Route not found.".to_string()));
        };

        let liked = if route_repo.like_exists(route.id, user.id).await? {
            route_repo.remove_like(route.id, user.id).await?;
            false
        } else {
            route_repo.add_like(route.id, user.id).await?;

            if route.pilot_id != user.id {
                let notification_repo = NotificationRepository::new(&self.state.db);
                notification_repo
                    .create(CreateNotificationParams {
                        user_id: route.pilot_id,
                        actor_id: Some(user.id),
                        kind: NotificationKind::RouteLike,
                        message: format!("{} liked your route", user.username),
                        target_type: Some("route".to_string()),
                        target_id: Some(route.id),
                    })
                    .await?;
            }

            true
        };

        Ok(LikeToggleDto {
            liked,
            likes_count: route_repo.like_count(route.id).await?,
        })
    }

    /// Toggles the caller's save on a route they can see.
    pub async fn save_toggle(
        &self,
        user: &entity::user::Model,
        route_id: i32,
    ) -> Result<SaveToggleDto, AppError> {
        let viewer = self.viewer(Some(user.id)).await?;

        let route_repo = RouteRepository::new(&self.state.db);
        let Some(route) = route_repo.find_visible(route_id, viewer.as_ref()).await? else {
            return Err(AppError::NotFound("Route not found.".to_string()));
        };

        let saved = if route_repo.save_exists(route.id, user.id).await? {
            route_repo.remove_save(route.id, user.id).await?;
            false
        } else {
            route_repo.add_save(route.id, user.id).await?;

            if route.pilot_id != user.id {
                let notification_repo = NotificationRepository::new(&self.state.db);
                notification_repo
                    .create(CreateNotificationParams {
                        user_id: route.pilot_id,
                        actor_id: Some(user.id),
                        kind: NotificationKind::RouteSave,
                        message: format!("{} saved your route", user.username),
                        target_type: Some("route".to_string()),
                        target_id: Some(route.id),
                    })
                    .await?;
            }

            true
        };

        Ok(SaveToggleDto {
            saved,
            saves_count: route_repo.save_count(route.id).await?,
        })
    }

    async fn route_dtos(
        &self,
        routes: Vec<entity::flight_route::Model>,
        viewer_id: Option<i32>,
    ) -> Result<Vec<RouteDto>, AppError> {
        let mut dtos = Vec::with_capacity(routes.len());

        for route in routes {
            dtos.push(self.route_dto(route, viewer_id).await?);
        }

        Ok(dtos)
    }

    async fn route_dto(
        &self,
        route: entity::flight_route::Model,
        viewer_id: Option<i32>,
    ) -> Result<RouteDto, AppError> {
        let route_repo = RouteRepository::new(&self.state.db);
        let user_repo = UserRepository::new(&self.state.db);
        let user_service = UserService::new(self.state);
        let media = MediaService::new(&self.state.http_client, &self.state.media);

        let Some(pilot) = user_repo.find_by_id(route.pilot_id).await? else {
            return Err(AppError::InternalError(format!(
                "Route {} references missing pilot {}",
                route.id, route.pilot_id
            )));
        };

        let (is_liked, is_saved) = match viewer_id {
            Some(viewer_id) => (
                route_repo.like_exists(route.id, viewer_id).await?,
                route_repo.save_exists(route.id, viewer_id).await?,
            ),
            None => (false, false),
        };

        // Stored waypoints were validated on the way in; anything unreadable
        // degrades to an empty list instead of failing the response.
        let waypoints: Vec<Waypoint> = route
            .waypoints
            .clone()
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default();

        Ok(RouteDto {
            id: route.id,
            pilot: user_service.creator_dto(&pilot),
            title: route.title,
            departure: route.departure,
            destination: route.destination,
            departure_lat: route.departure_lat,
            departure_lng: route.departure_lng,
            destination_lat: route.destination_lat,
            destination_lng: route.destination_lng,
            description: route.description,
            flight_date: route.flight_date,
            flight_duration: route.flight_duration,
            flight_duration_display: route.flight_duration.map(humanize::duration_display),
            distance: route.distance,
            aircraft_type: route.aircraft_type,
            route_file: media.resolve(route.route_file.as_deref()),
            waypoints,
            is_public: route.visibility == RouteVisibility::Public,
            visibility: route.visibility,
            likes_count: route_repo.like_count(route.id).await?,
            saves_count: route_repo.save_count(route.id).await?,
            is_liked,
            is_saved,
            created: route.created,
            updated: route.updated,
        })
    }
}
