//! Flight route factory.

use chrono::Utc;
use entity::flight_route::RouteVisibility;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test flight routes with customizable fields.
pub struct RouteFactory<'a> {
    db: &'a DatabaseConnection,
    pilot_id: i32,
    title: String,
    departure: String,
    destination: String,
    distance: Option<f64>,
    aircraft_type: Option<String>,
    visibility: RouteVisibility,
    waypoints: Option<serde_json::Value>,
}

impl<'a> RouteFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, pilot_id: i32) -> Self {
        Self {
            db,
            pilot_id,
            title: "Test route".to_string(),
            departure: "UUEE".to_string(),
            destination: "ULLI".to_string(),
            distance: None,
            aircraft_type: None,
            visibility: RouteVisibility::Public,
            waypoints: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn departure(mut self, departure: impl Into<String>) -> Self {
        self.departure = departure.into();
        self
    }

    pub fn destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    pub fn distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn aircraft_type(mut self, aircraft_type: impl Into<String>) -> Self {
        self.aircraft_type = Some(aircraft_type.into());
        self
    }

    pub fn visibility(mut self, visibility: RouteVisibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn waypoints(mut self, waypoints: serde_json::Value) -> Self {
        self.waypoints = Some(waypoints);
        self
    }

    pub async fn build(self) -> Result<entity::flight_route::Model, DbErr> {
        entity::flight_route::ActiveModel {
            pilot_id: ActiveValue::Set(self.pilot_id),
            title: ActiveValue::Set(self.title),
            departure: ActiveValue::Set(self.departure),
            destination: ActiveValue::Set(self.destination),
            departure_lat: ActiveValue::Set(None),
            departure_lng: ActiveValue::Set(None),
            destination_lat: ActiveValue::Set(None),
            destination_lng: ActiveValue::Set(None),
            description: ActiveValue::Set(None),
            flight_date: ActiveValue::Set(None),
            flight_duration: ActiveValue::Set(None),
            distance: ActiveValue::Set(self.distance),
            aircraft_type: ActiveValue::Set(self.aircraft_type),
            route_file: ActiveValue::Set(None),
            waypoints: ActiveValue::Set(self.waypoints),
            visibility: ActiveValue::Set(self.visibility),
            created: ActiveValue::Set(Utc::now()),
            updated: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a public route with default values.
pub async fn create_route(
    db: &DatabaseConnection,
    pilot_id: i32,
) -> Result<entity::flight_route::Model, DbErr> {
    RouteFactory::new(db, pilot_id).build().await
}
