//! User-facing profile DTOs and parameter types.

use chrono::{DateTime, Utc};
use entity::user::PilotType;
use serde::{Deserialize, Serialize};

/// Full profile representation returned by profile endpoints.
///
/// `profile_pic` and `cover_pic` are resolved media URLs, never raw storage
/// keys. `is_following` reflects the authenticated viewer and is always
/// `false` for anonymous requests.
#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub pilot_type: PilotType,
    pub flight_hours: f64,
    pub aircraft_types: Option<String>,
    pub license_number: Option<String>,
    pub bio: Option<String>,
    pub profile_pic: Option<String>,
    pub cover_pic: Option<String>,
    pub is_staff: bool,
    pub date_joined: DateTime<Utc>,
    pub followers_count: u64,
    pub following_count: u64,
    pub posts_count: u64,
    pub routes_count: u64,

    /// True when the viewer follows this user.
    pub is_following: bool,

    /// True when this user follows the viewer back.
    pub is_followed: bool,
}

/// Compact user reference embedded in posts, comments and routes.
#[derive(Debug, Clone, Serialize)]
pub struct CreatorDto {
    pub id: i32,
    pub username: String,
    pub pilot_type: PilotType,
    pub profile_pic: Option<String>,
}

/// Query parameters of the pilot directory listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PilotQuery {
    /// Filter by pilot type ("virtual", "real", "both").
    pub pilot_type: Option<String>,

    /// Substring match against username and aircraft types.
    pub q: Option<String>,

    /// Sort key from the allow-list {username, flight_hours, date_joined},
    /// with a "-" prefix for descending. Anything else falls back to the
    /// default username ordering.
    pub order_by: Option<String>,
}

/// Result of a follow toggle, with fresh counts for the UI.
#[derive(Debug, Clone, Serialize)]
pub struct FollowToggleDto {
    /// True when the toggle resulted in an active follow edge.
    pub followed: bool,

    /// Follower count of the target user after the toggle.
    pub followers_count: u64,

    /// Following count of the acting user after the toggle.
    pub following_count: u64,
}

/// Profile update inputs; `None` fields are left untouched.
///
/// `profile_pic` / `cover_pic` carry freshly uploaded storage keys, set by the
/// controller after the multipart files have been stored.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub email: Option<String>,

    /// Bcrypt hash of the new password; hashing happens in the service layer.
    pub password_hash: Option<String>,
    pub pilot_type: Option<PilotType>,
    pub flight_hours: Option<f64>,
    pub aircraft_types: Option<String>,
    pub license_number: Option<String>,
    pub bio: Option<String>,
    pub profile_pic: Option<String>,
    pub cover_pic: Option<String>,
}

impl UpdateUserParams {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.password_hash.is_none()
            && self.pilot_type.is_none()
            && self.flight_hours.is_none()
            && self.aircraft_types.is_none()
            && self.license_number.is_none()
            && self.bio.is_none()
            && self.profile_pic.is_none()
            && self.cover_pic.is_none()
    }
}

/// Parses the wire form of a pilot type. Unknown values are a caller error.
pub fn parse_pilot_type(value: &str) -> Option<PilotType> {
    match value {
        "virtual" => Some(PilotType::Virtual),
        "real" => Some(PilotType::Real),
        "both" => Some(PilotType::Both),
        _ => None,
    }
}

/// Inputs for creating a new account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub pilot_type: PilotType,
    pub flight_hours: f64,
    pub aircraft_types: Option<String>,
    pub bio: Option<String>,
}
