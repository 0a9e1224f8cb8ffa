//! User complaint, triaged by staff.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "complaint")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// The reporting user.
    pub user_id: i32,

    pub category: String,

    #[sea_orm(column_type = "Text")]
    pub text: String,

    pub status: ComplaintStatus,

    /// Staff member who handled the complaint; set on status update.
    #[sea_orm(nullable)]
    pub handled_by: Option<i32>,

    #[sea_orm(column_type = "Text")]
    pub internal_comment: String,

    pub created: DateTimeUtc,

    pub updated: DateTimeUtc,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    #[sea_orm(string_value = "new")]
    New,
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "closed")]
    Closed,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::HandledBy",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    Handler,
}

impl ActiveModelBehavior for ActiveModel {}
