//! Navigation configuration repository.
//!
//! The navigation config is replaced wholesale: the admin UI submits the full
//! list and the repository swaps it in atomically. Readers never observe a
//! half-replaced menu.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::model::admin::NavItemParams;
use entity::navigation_item::NavLocation;

/// Repository providing database operations for navigation entries.
pub struct NavigationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NavigationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every entry, grouped by location then ordered.
    pub async fn list_all(&self) -> Result<Vec<entity::navigation_item::Model>, DbErr> {
        entity::prelude::NavigationItem::find()
            .order_by_asc(entity::navigation_item::Column::Location)
            .order_by_asc(entity::navigation_item::Column::Order)
            .all(self.db)
            .await
    }

    /// Entries shown to regular users: visible, enabled, ordered.
    pub async fn list_for_users(&self) -> Result<Vec<entity::navigation_item::Model>, DbErr> {
        entity::prelude::NavigationItem::find()
            .filter(entity::navigation_item::Column::IsVisibleForUsers.eq(true))
            .filter(entity::navigation_item::Column::IsEnabled.eq(true))
            .order_by_asc(entity::navigation_item::Column::Location)
            .order_by_asc(entity::navigation_item::Column::Order)
            .all(self.db)
            .await
    }

    /// Replaces the whole navigation config in one transaction.
    ///
    /// Items without an explicit `order` take their position in the submitted
    /// list. Either the full new config lands or the old one stays.
    ///
    /// # Returns
    /// - `Ok(items)` - The freshly stored config
    /// - `Err(DbErr)` - Database error; the previous config is untouched
    pub async fn replace_all(
        &self,
        items: Vec<NavItemParams>,
    ) -> Result<Vec<entity::navigation_item::Model>, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::NavigationItem::delete_many()
            .exec(&txn)
            .await?;

        for (position, item) in items.into_iter().enumerate() {
            entity::navigation_item::ActiveModel {
                key: ActiveValue::Set(item.key),
                label: ActiveValue::Set(item.label),
                location: ActiveValue::Set(item.location),
                is_visible_for_users: ActiveValue::Set(item.is_visible_for_users),
                is_enabled: ActiveValue::Set(item.is_enabled),
                order: ActiveValue::Set(item.order.unwrap_or(position as i32)),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        self.list_all().await
    }

    /// Seeds the default navigation when the table is empty. Idempotent.
    pub async fn ensure_defaults(&self) -> Result<(), DbErr> {
        let count = entity::prelude::NavigationItem::find()
            .count(self.db)
            .await?;

        if count > 0 {
            return Ok(());
        }

        let defaults = [
            ("feed", "Feed", NavLocation::PublicSidebar),
            ("pilots", "Pilots", NavLocation::PublicSidebar),
            ("routes", "Routes", NavLocation::PublicSidebar),
            ("notifications", "Notifications", NavLocation::PublicSidebar),
            ("profile", "Profile", NavLocation::PublicSidebar),
            ("dashboard", "Dashboard", NavLocation::AdminSidebar),
            ("complaints", "Complaints", NavLocation::AdminSidebar),
            ("users", "Users", NavLocation::AdminSidebar),
            ("navigation", "Navigation", NavLocation::AdminSidebar),
            ("settings", "Settings", NavLocation::AdminSidebar),
            ("logs", "Action log", NavLocation::AdminSidebar),
        ];

        for (position, (key, label, location)) in defaults.into_iter().enumerate() {
            entity::navigation_item::ActiveModel {
                key: ActiveValue::Set(key.to_string()),
                label: ActiveValue::Set(label.to_string()),
                location: ActiveValue::Set(location),
                is_visible_for_users: ActiveValue::Set(true),
                is_enabled: ActiveValue::Set(true),
                order: ActiveValue::Set(position as i32),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }
}
