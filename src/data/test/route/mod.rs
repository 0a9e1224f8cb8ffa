use crate::{
    data::route::RouteRepository,
    model::route::{RouteQuery, RouteViewer, UpdateRouteParams},
};
use entity::flight_route::RouteVisibility;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::flight_route::RouteFactory};

mod list_visible;
mod saved;
mod update;
mod visibility;

fn viewer(user_id: i32, following_ids: Vec<i32>) -> RouteViewer {
    RouteViewer {
        user_id,
        following_ids,
    }
}
