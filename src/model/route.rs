//! Flight route DTOs and parameter types.

use chrono::{DateTime, NaiveDate, Utc};
use entity::flight_route::RouteVisibility;
use serde::{Deserialize, Serialize};

use crate::model::user::CreatorDto;

/// A single point along a route. Stored inside the `waypoints` JSON column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub lat: f64,
    pub lng: f64,
}

/// Route representation returned by route endpoints.
///
/// `visibility` is canonical; `is_public` is derived from it for clients that
/// still expect the old boolean flag.
#[derive(Debug, Clone, Serialize)]
pub struct RouteDto {
    pub id: i32,
    pub pilot: CreatorDto,
    pub title: String,
    pub departure: String,
    pub destination: String,
    pub departure_lat: Option<f64>,
    pub departure_lng: Option<f64>,
    pub destination_lat: Option<f64>,
    pub destination_lng: Option<f64>,
    pub description: Option<String>,
    pub flight_date: Option<NaiveDate>,

    /// Duration in seconds.
    pub flight_duration: Option<i64>,

    /// Duration formatted as "2h 15m", when present.
    pub flight_duration_display: Option<String>,

    /// Distance in kilometers.
    pub distance: Option<f64>,

    pub aircraft_type: Option<String>,

    /// Resolved URL of the attached route file.
    pub route_file: Option<String>,

    pub waypoints: Vec<Waypoint>,

    pub visibility: RouteVisibility,

    /// Legacy flag: true exactly when `visibility` is "public".
    pub is_public: bool,

    pub likes_count: u64,
    pub saves_count: u64,
    pub is_liked: bool,
    pub is_saved: bool,

    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

/// Query parameters of the route listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteQuery {
    /// Substring match against title, departure and destination.
    pub q: Option<String>,

    /// Restrict to one pilot by id.
    pub pilot: Option<i32>,

    pub aircraft_type: Option<String>,

    /// Distance window in kilometers.
    pub distance_min: Option<f64>,
    pub distance_max: Option<f64>,

    /// Sort key from the allow-list {created, flight_date, distance}, with a
    /// "-" prefix for descending. Anything else falls back to newest first.
    pub order_by: Option<String>,
}

/// Viewer context for the visibility filter: who is asking, and whom they
/// follow. `None` at the call sites means an anonymous viewer who only sees
/// public routes.
#[derive(Debug, Clone)]
pub struct RouteViewer {
    pub user_id: i32,
    pub following_ids: Vec<i32>,
}

/// Inputs for creating a route.
#[derive(Debug, Clone)]
pub struct CreateRouteParams {
    pub pilot_id: i32,
    pub title: String,
    pub departure: String,
    pub destination: String,
    pub departure_lat: Option<f64>,
    pub departure_lng: Option<f64>,
    pub destination_lat: Option<f64>,
    pub destination_lng: Option<f64>,
    pub description: Option<String>,
    pub flight_date: Option<NaiveDate>,
    pub flight_duration: Option<i64>,
    pub distance: Option<f64>,
    pub aircraft_type: Option<String>,
    pub route_file: Option<String>,
    pub waypoints: Option<serde_json::Value>,
    pub visibility: RouteVisibility,
}

/// Inputs for updating a route; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateRouteParams {
    pub title: Option<String>,
    pub departure: Option<String>,
    pub destination: Option<String>,
    pub departure_lat: Option<f64>,
    pub departure_lng: Option<f64>,
    pub destination_lat: Option<f64>,
    pub destination_lng: Option<f64>,
    pub description: Option<String>,
    pub flight_date: Option<NaiveDate>,
    pub flight_duration: Option<i64>,
    pub distance: Option<f64>,
    pub aircraft_type: Option<String>,
    pub route_file: Option<String>,
    pub waypoints: Option<serde_json::Value>,
    pub visibility: Option<RouteVisibility>,
}
