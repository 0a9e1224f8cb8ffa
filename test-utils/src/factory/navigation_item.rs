//! Navigation item factory.

use crate::factory::helpers::next_id;
use entity::navigation_item::NavLocation;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a visible, enabled public-sidebar navigation item with a unique key.
pub async fn create_nav_item(
    db: &DatabaseConnection,
    order: i32,
) -> Result<entity::navigation_item::Model, DbErr> {
    let id = next_id();
    entity::navigation_item::ActiveModel {
        key: ActiveValue::Set(format!("item{}", id)),
        label: ActiveValue::Set(format!("Item {}", id)),
        location: ActiveValue::Set(NavLocation::PublicSidebar),
        is_visible_for_users: ActiveValue::Set(true),
        is_enabled: ActiveValue::Set(true),
        order: ActiveValue::Set(order),
        ..Default::default()
    }
    .insert(db)
    .await
}
