//! Notification feed DTOs.

use chrono::{DateTime, Utc};
use entity::notification::NotificationKind;
use serde::{Deserialize, Serialize};

/// Compact actor reference on a notification.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationActorDto {
    pub id: i32,
    pub username: String,
    pub profile_pic: Option<String>,
}

/// Typed notification target, resolved from the stored soft reference.
///
/// Serialized as `{"type": "post", "id": 42}`. Absent when the target row has
/// been deleted since the notification was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotificationTargetDto {
    Post { id: i32 },
    Route { id: i32 },
    User { id: i32 },
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationDto {
    pub id: i32,
    pub kind: NotificationKind,
    pub message: String,
    pub actor: Option<NotificationActorDto>,
    pub target: Option<NotificationTargetDto>,
    pub is_read: bool,
    pub created: DateTime<Utc>,
    pub created_display: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnreadCountDto {
    pub unread_count: u64,
}

/// Query parameters of the notification list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationQuery {
    /// When true, only unread notifications are returned.
    #[serde(default)]
    pub unread: bool,
}

/// Inputs for creating a notification.
#[derive(Debug, Clone)]
pub struct CreateNotificationParams {
    pub user_id: i32,
    pub actor_id: Option<i32>,
    pub kind: NotificationKind,
    pub message: String,
    pub target_type: Option<String>,
    pub target_id: Option<i32>,
}
