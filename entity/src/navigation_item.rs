//! Configurable navigation entry (public sidebar, admin sidebar).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "navigation_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Slug identifying the entry, e.g. "home", "explore".
    #[sea_orm(unique)]
    pub key: String,

    pub label: String,

    pub location: NavLocation,

    pub is_visible_for_users: bool,

    pub is_enabled: bool,

    pub order: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
#[serde(rename_all = "snake_case")]
pub enum NavLocation {
    #[sea_orm(string_value = "public_sidebar")]
    PublicSidebar,
    #[sea_orm(string_value = "admin_sidebar")]
    AdminSidebar,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
