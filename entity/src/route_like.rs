//! Like join row between a user and a flight route.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "route_like")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub route_id: i32,

    pub user_id: i32,

    pub created: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::flight_route::Entity",
        from = "Column::RouteId",
        to = "super::flight_route::Column::Id",
        on_delete = "Cascade"
    )]
    Route,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl ActiveModelBehavior for ActiveModel {}
