//! Pilot account entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub username: String,

    /// Stored lowercased so lookups by email are case-insensitive.
    #[sea_orm(unique)]
    pub email: String,

    pub password_hash: String,

    pub pilot_type: PilotType,

    pub flight_hours: f64,

    /// Comma-separated aircraft type list, e.g. "Cessna 172, Boeing 737".
    #[sea_orm(column_type = "Text", nullable)]
    pub aircraft_types: Option<String>,

    #[sea_orm(nullable)]
    pub license_number: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,

    /// Object-storage key of the profile image.
    #[sea_orm(nullable)]
    pub profile_pic: Option<String>,

    /// Object-storage key of the cover image.
    #[sea_orm(nullable)]
    pub cover_pic: Option<String>,

    /// False when the account is banned.
    pub is_active: bool,

    /// Demo accounts: read access plus low-risk social actions only.
    pub is_read_only: bool,

    pub is_staff: bool,

    pub date_joined: DateTimeUtc,

    #[sea_orm(nullable)]
    pub last_login: Option<DateTimeUtc>,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "lowercase")]
pub enum PilotType {
    #[sea_orm(string_value = "virtual")]
    Virtual,
    #[sea_orm(string_value = "real")]
    Real,
    #[sea_orm(string_value = "both")]
    Both,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Post,

    #[sea_orm(has_many = "super::flight_route::Entity")]
    FlightRoute,

    #[sea_orm(has_many = "super::notification::Entity")]
    Notification,
}

impl ActiveModelBehavior for ActiveModel {}
