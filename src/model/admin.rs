//! Back-office DTOs: dashboard, complaints, navigation, settings, audit log.

use chrono::{DateTime, NaiveDate, Utc};
use entity::{complaint::ComplaintStatus, navigation_item::NavLocation, user::PilotType};
use serde::{Deserialize, Serialize};

/// Minimal user reference in admin payloads.
#[derive(Debug, Clone, Serialize)]
pub struct UserRefDto {
    pub id: i32,
    pub username: String,
}

/// Headline metrics on the admin dashboard. "Week" windows cover the last
/// seven days including today.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardDto {
    pub total_users: u64,
    pub new_users_week: u64,
    pub total_posts: u64,
    pub new_posts_week: u64,
    pub total_routes: u64,
    pub open_complaints: u64,
    pub actions_week: u64,
}

/// One day of the seven-day activity histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityPointDto {
    pub date: NaiveDate,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplaintDto {
    pub id: i32,
    pub user: Option<UserRefDto>,
    pub category: String,
    pub text: String,
    pub status: ComplaintStatus,
    pub handled_by: Option<UserRefDto>,
    pub internal_comment: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateComplaintRequest {
    pub category: String,
    pub text: String,
}

/// Triage update; `None` fields are left untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateComplaintRequest {
    pub status: Option<ComplaintStatus>,
    pub internal_comment: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComplaintQuery {
    pub status: Option<ComplaintStatus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavigationItemDto {
    pub id: i32,
    pub key: String,
    pub label: String,
    pub location: NavLocation,
    pub is_visible_for_users: bool,
    pub is_enabled: bool,
    pub order: i32,
}

/// One navigation entry in a replace request. `order` defaults to the item's
/// position in the submitted list when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct NavItemParams {
    pub key: String,
    pub label: String,
    pub location: NavLocation,
    #[serde(default = "default_true")]
    pub is_visible_for_users: bool,
    #[serde(default = "default_true")]
    pub is_enabled: bool,
    pub order: Option<i32>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceNavigationRequest {
    pub items: Vec<NavItemParams>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteSettingsDto {
    pub is_closed_for_public: bool,
    pub maintenance_message: String,
    pub updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSiteSettingsRequest {
    pub is_closed_for_public: Option<bool>,
    pub maintenance_message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionLogDto {
    pub id: i32,
    pub user: Option<UserRefDto>,
    pub action: String,
    pub path: String,
    pub ip_address: Option<String>,
    pub created: DateTime<Utc>,
}

/// Query parameters of the action log listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionLogQuery {
    pub user_id: Option<i32>,

    /// Substring match against the recorded action ("METHOD /path").
    pub action: Option<String>,

    /// Restrict to the last N days.
    pub days: Option<i64>,
}

/// Inputs for recording one action log row.
#[derive(Debug, Clone)]
pub struct CreateActionLogParams {
    pub user_id: Option<i32>,
    pub action: String,
    pub path: String,
    pub ip_address: Option<String>,
    pub extra: serde_json::Value,
}

/// Account row in the admin user list.
#[derive(Debug, Clone, Serialize)]
pub struct AdminUserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub pilot_type: PilotType,
    pub is_active: bool,
    pub is_read_only: bool,
    pub is_staff: bool,
    pub date_joined: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

/// Result of a ban toggle.
#[derive(Debug, Clone, Serialize)]
pub struct BanToggleDto {
    pub id: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminGrantRequest {
    pub user_id: i32,
}
