//! Flight route entity.
//!
//! `visibility` is the canonical access level. The legacy `is_public` flag of
//! older clients is derived from it at the serialization boundary and never
//! stored.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "flight_route")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub pilot_id: i32,

    pub title: String,

    pub departure: String,

    pub destination: String,

    #[sea_orm(nullable)]
    pub departure_lat: Option<f64>,

    #[sea_orm(nullable)]
    pub departure_lng: Option<f64>,

    #[sea_orm(nullable)]
    pub destination_lat: Option<f64>,

    #[sea_orm(nullable)]
    pub destination_lng: Option<f64>,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    #[sea_orm(nullable)]
    pub flight_date: Option<Date>,

    /// Flight duration in seconds.
    #[sea_orm(nullable)]
    pub flight_duration: Option<i64>,

    /// Distance in kilometers.
    #[sea_orm(nullable)]
    pub distance: Option<f64>,

    #[sea_orm(nullable)]
    pub aircraft_type: Option<String>,

    /// Object-storage key of the attached route file.
    #[sea_orm(nullable)]
    pub route_file: Option<String>,

    /// Ordered waypoint list as a JSON array of {name?, lat, lng}.
    #[sea_orm(nullable)]
    pub waypoints: Option<Json>,

    pub visibility: RouteVisibility,

    pub created: DateTimeUtc,

    pub updated: DateTimeUtc,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "lowercase")]
pub enum RouteVisibility {
    #[sea_orm(string_value = "public")]
    Public,
    #[sea_orm(string_value = "followers")]
    Followers,
    #[sea_orm(string_value = "private")]
    Private,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::PilotId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Pilot,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pilot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
