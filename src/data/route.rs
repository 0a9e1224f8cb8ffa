//! Flight route repository: routes, visibility filtering, likes and saves.
//!
//! Every read that serves another user goes through the visibility condition:
//! public routes for everyone, followers-only routes for followers of the
//! owner, private routes for the owner alone. Owners always see their own
//! routes.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::route::{CreateRouteParams, RouteQuery, RouteViewer, UpdateRouteParams};
use entity::flight_route::RouteVisibility;

/// Repository providing database operations for flight routes.
pub struct RouteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RouteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the visibility condition for a viewer.
    ///
    /// Anonymous viewers only match public routes. Authenticated viewers
    /// additionally match their own routes and followers-only routes of
    /// pilots they follow.
    fn visible_condition(viewer: Option<&RouteViewer>) -> Condition {
        let mut condition = Condition::any()
            .add(entity::flight_route::Column::Visibility.eq(RouteVisibility::Public));

        if let Some(viewer) = viewer {
            condition = condition
                .add(entity::flight_route::Column::PilotId.eq(viewer.user_id))
                .add(
                    Condition::all()
                        .add(
                            entity::flight_route::Column::Visibility
                                .eq(RouteVisibility::Followers),
                        )
                        .add(
                            entity::flight_route::Column::PilotId
                                .is_in(viewer.following_ids.clone()),
                        ),
                );
        }

        condition
    }

    pub async fn create(
        &self,
        params: CreateRouteParams,
    ) -> Result<entity::flight_route::Model, DbErr> {
        entity::flight_route::ActiveModel {
            pilot_id: ActiveValue::Set(params.pilot_id),
            title: ActiveValue::Set(params.title),
            departure: ActiveValue::Set(params.departure),
            destination: ActiveValue::Set(params.destination),
            departure_lat: ActiveValue::Set(params.departure_lat),
            departure_lng: ActiveValue::Set(params.departure_lng),
            destination_lat: ActiveValue::Set(params.destination_lat),
            destination_lng: ActiveValue::Set(params.destination_lng),
            description: ActiveValue::Set(params.description),
            flight_date: ActiveValue::Set(params.flight_date),
            flight_duration: ActiveValue::Set(params.flight_duration),
            distance: ActiveValue::Set(params.distance),
            aircraft_type: ActiveValue::Set(params.aircraft_type),
            route_file: ActiveValue::Set(params.route_file),
            waypoints: ActiveValue::Set(params.waypoints),
            visibility: ActiveValue::Set(params.visibility),
            created: ActiveValue::Set(Utc::now()),
            updated: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Plain existence lookup, no visibility applied. Used where only the
    /// row's presence matters, such as notification target resolution.
    pub async fn find_by_id(
        &self,
        route_id: i32,
    ) -> Result<Option<entity::flight_route::Model>, DbErr> {
        entity::prelude::FlightRoute::find_by_id(route_id)
            .one(self.db)
            .await
    }

    /// Finds a route the viewer is allowed to see.
    ///
    /// # Returns
    /// - `Ok(None)` - Route does not exist or is hidden from this viewer;
    ///   both cases look identical to the caller
    pub async fn find_visible(
        &self,
        route_id: i32,
        viewer: Option<&RouteViewer>,
    ) -> Result<Option<entity::flight_route::Model>, DbErr> {
        entity::prelude::FlightRoute::find_by_id(route_id)
            .filter(Self::visible_condition(viewer))
            .one(self.db)
            .await
    }

    /// Finds a route owned by `pilot_id`, for update and delete paths.
    pub async fn find_owned(
        &self,
        route_id: i32,
        pilot_id: i32,
    ) -> Result<Option<entity::flight_route::Model>, DbErr> {
        entity::prelude::FlightRoute::find_by_id(route_id)
            .filter(entity::flight_route::Column::PilotId.eq(pilot_id))
            .one(self.db)
            .await
    }

    /// Lists routes visible to the viewer, with optional search filters.
    ///
    /// `order_by` accepts {created, flight_date, distance} with a "-" prefix
    /// for descending; anything else falls back to newest first.
    pub async fn list_visible(
        &self,
        query: &RouteQuery,
        viewer: Option<&RouteViewer>,
    ) -> Result<Vec<entity::flight_route::Model>, DbErr> {
        let mut condition = Condition::all().add(Self::visible_condition(viewer));

        if let Some(q) = &query.q {
            if !q.is_empty() {
                condition = condition.add(
                    Condition::any()
                        .add(entity::flight_route::Column::Title.contains(q))
                        .add(entity::flight_route::Column::Departure.contains(q))
                        .add(entity::flight_route::Column::Destination.contains(q)),
                );
            }
        }

        if let Some(pilot_id) = query.pilot {
            condition = condition.add(entity::flight_route::Column::PilotId.eq(pilot_id));
        }

        if let Some(aircraft_type) = &query.aircraft_type {
            condition = condition
                .add(entity::flight_route::Column::AircraftType.eq(aircraft_type.as_str()));
        }

        if let Some(distance_min) = query.distance_min {
            condition = condition.add(entity::flight_route::Column::Distance.gte(distance_min));
        }

        if let Some(distance_max) = query.distance_max {
            condition = condition.add(entity::flight_route::Column::Distance.lte(distance_max));
        }

        let order_by = query.order_by.as_deref().unwrap_or("-created");
        let (key, descending) = match order_by.strip_prefix('-') {
            Some(key) => (key, true),
            None => (order_by, false),
        };

        let column = match key {
            "flight_date" => entity::flight_route::Column::FlightDate,
            "distance" => entity::flight_route::Column::Distance,
            "created" => entity::flight_route::Column::Created,
            _ => {
                return entity::prelude::FlightRoute::find()
                    .filter(condition)
                    .order_by_desc(entity::flight_route::Column::Created)
                    .all(self.db)
                    .await
            }
        };

        let find = entity::prelude::FlightRoute::find().filter(condition);

        let find = if descending {
            find.order_by_desc(column)
        } else {
            find.order_by_asc(column)
        };

        find.all(self.db).await
    }

    /// Routes of one pilot that the viewer is allowed to see, newest first.
    pub async fn list_by_pilot(
        &self,
        pilot_id: i32,
        viewer: Option<&RouteViewer>,
    ) -> Result<Vec<entity::flight_route::Model>, DbErr> {
        entity::prelude::FlightRoute::find()
            .filter(entity::flight_route::Column::PilotId.eq(pilot_id))
            .filter(Self::visible_condition(viewer))
            .order_by_desc(entity::flight_route::Column::Created)
            .all(self.db)
            .await
    }

    /// Routes from pilots the viewer follows (the following feed), newest
    /// first. Visibility still applies per route.
    pub async fn list_following(
        &self,
        viewer: &RouteViewer,
    ) -> Result<Vec<entity::flight_route::Model>, DbErr> {
        if viewer.following_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::FlightRoute::find()
            .filter(entity::flight_route::Column::PilotId.is_in(viewer.following_ids.clone()))
            .filter(Self::visible_condition(Some(viewer)))
            .order_by_desc(entity::flight_route::Column::Created)
            .all(self.db)
            .await
    }

    /// Applies a partial update. `None` fields are left untouched; the
    /// `updated` timestamp is always refreshed.
    pub async fn update(
        &self,
        route: entity::flight_route::Model,
        params: UpdateRouteParams,
    ) -> Result<entity::flight_route::Model, DbErr> {
        let mut active: entity::flight_route::ActiveModel = route.into();

        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(departure) = params.departure {
            active.departure = ActiveValue::Set(departure);
        }
        if let Some(destination) = params.destination {
            active.destination = ActiveValue::Set(destination);
        }
        if let Some(lat) = params.departure_lat {
            active.departure_lat = ActiveValue::Set(Some(lat));
        }
        if let Some(lng) = params.departure_lng {
            active.departure_lng = ActiveValue::Set(Some(lng));
        }
        if let Some(lat) = params.destination_lat {
            active.destination_lat = ActiveValue::Set(Some(lat));
        }
        if let Some(lng) = params.destination_lng {
            active.destination_lng = ActiveValue::Set(Some(lng));
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(flight_date) = params.flight_date {
            active.flight_date = ActiveValue::Set(Some(flight_date));
        }
        if let Some(flight_duration) = params.flight_duration {
            active.flight_duration = ActiveValue::Set(Some(flight_duration));
        }
        if let Some(distance) = params.distance {
            active.distance = ActiveValue::Set(Some(distance));
        }
        if let Some(aircraft_type) = params.aircraft_type {
            active.aircraft_type = ActiveValue::Set(Some(aircraft_type));
        }
        if let Some(route_file) = params.route_file {
            active.route_file = ActiveValue::Set(Some(route_file));
        }
        if let Some(waypoints) = params.waypoints {
            active.waypoints = ActiveValue::Set(Some(waypoints));
        }
        if let Some(visibility) = params.visibility {
            active.visibility = ActiveValue::Set(visibility);
        }

        active.updated = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Deletes a route owned by `pilot_id`.
    ///
    /// # Returns
    /// - `Ok(rows)` - 0 when the route does not exist or is owned by someone else
    pub async fn delete_owned(&self, route_id: i32, pilot_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::FlightRoute::delete_many()
            .filter(entity::flight_route::Column::Id.eq(route_id))
            .filter(entity::flight_route::Column::PilotId.eq(pilot_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn like_exists(&self, route_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::RouteLike::find()
            .filter(entity::route_like::Column::RouteId.eq(route_id))
            .filter(entity::route_like::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn add_like(&self, route_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::route_like::ActiveModel {
            route_id: ActiveValue::Set(route_id),
            user_id: ActiveValue::Set(user_id),
            created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn remove_like(&self, route_id: i32, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::RouteLike::delete_many()
            .filter(entity::route_like::Column::RouteId.eq(route_id))
            .filter(entity::route_like::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn like_count(&self, route_id: i32) -> Result<u64, DbErr> {
        entity::prelude::RouteLike::find()
            .filter(entity::route_like::Column::RouteId.eq(route_id))
            .count(self.db)
            .await
    }

    pub async fn save_exists(&self, route_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::RouteSave::find()
            .filter(entity::route_save::Column::RouteId.eq(route_id))
            .filter(entity::route_save::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn add_save(&self, route_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::route_save::ActiveModel {
            route_id: ActiveValue::Set(route_id),
            user_id: ActiveValue::Set(user_id),
            created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn remove_save(&self, route_id: i32, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::RouteSave::delete_many()
            .filter(entity::route_save::Column::RouteId.eq(route_id))
            .filter(entity::route_save::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn save_count(&self, route_id: i32) -> Result<u64, DbErr> {
        entity::prelude::RouteSave::find()
            .filter(entity::route_save::Column::RouteId.eq(route_id))
            .count(self.db)
            .await
    }

    /// Routes the user saved and can still see, most recently saved first.
    ///
    /// A save does not grant access: a route whose visibility changed after
    /// the save drops out of the list.
    pub async fn list_saved_by(
        &self,
        user_id: i32,
        viewer: &RouteViewer,
    ) -> Result<Vec<entity::flight_route::Model>, DbErr> {
        let saves = entity::prelude::RouteSave::find()
            .filter(entity::route_save::Column::UserId.eq(user_id))
            .order_by_desc(entity::route_save::Column::Created)
            .all(self.db)
            .await?;

        let ordered_ids: Vec<i32> = saves.iter().map(|save| save.route_id).collect();

        if ordered_ids.is_empty() {
            return Ok(Vec::new());
        }

        let routes = entity::prelude::FlightRoute::find()
            .filter(entity::flight_route::Column::Id.is_in(ordered_ids.clone()))
            .filter(Self::visible_condition(Some(viewer)))
            .all(self.db)
            .await?;

        let mut by_id: std::collections::HashMap<i32, entity::flight_route::Model> =
            routes.into_iter().map(|route| (route.id, route)).collect();

        Ok(ordered_ids
            .into_iter()
            .filter_map(|id| by_id.remove(&id))
            .collect())
    }

    pub async fn count_by_pilot(&self, pilot_id: i32) -> Result<u64, DbErr> {
        entity::prelude::FlightRoute::find()
            .filter(entity::flight_route::Column::PilotId.eq(pilot_id))
            .count(self.db)
            .await
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::FlightRoute::find().count(self.db).await
    }

    pub async fn count_created_since(&self, since: DateTime<Utc>) -> Result<u64, DbErr> {
        entity::prelude::FlightRoute::find()
            .filter(entity::flight_route::Column::Created.gte(since))
            .count(self.db)
            .await
    }
}
