//! Notification feed entry.
//!
//! Immutable once created except for `is_read`. The target is a soft
//! reference (`target_type` + `target_id`); the data layer resolves it into a
//! typed variant at read time.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "notification")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Recipient of the notification.
    pub user_id: i32,

    /// User whose action produced the notification, if any.
    #[sea_orm(nullable)]
    pub actor_id: Option<i32>,

    pub kind: NotificationKind,

    pub message: String,

    #[sea_orm(nullable)]
    pub target_type: Option<String>,

    #[sea_orm(nullable)]
    pub target_id: Option<i32>,

    pub is_read: bool,

    pub created: DateTimeUtc,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    #[sea_orm(string_value = "follow")]
    Follow,
    #[sea_orm(string_value = "post_like")]
    PostLike,
    #[sea_orm(string_value = "post_save")]
    PostSave,
    #[sea_orm(string_value = "route_like")]
    RouteLike,
    #[sea_orm(string_value = "route_save")]
    RouteSave,
    #[sea_orm(string_value = "system")]
    System,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Recipient,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ActorId",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    Actor,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recipient.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
