use crate::{data::navigation::NavigationRepository, model::admin::NavItemParams};
use entity::navigation_item::NavLocation;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod config;

fn item(key: &str, label: &str, order: Option<i32>) -> NavItemParams {
    NavItemParams {
        key: key.to_string(),
        label: label.to_string(),
        location: NavLocation::PublicSidebar,
        is_visible_for_users: true,
        is_enabled: true,
        order,
    }
}
