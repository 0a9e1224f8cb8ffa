pub use sea_orm_migration::prelude::*;

mod m20260210_000001_create_user_table;
mod m20260210_000002_create_follow_table;
mod m20260211_000003_create_post_table;
mod m20260211_000004_create_post_image_table;
mod m20260211_000005_create_comment_table;
mod m20260211_000006_create_post_like_table;
mod m20260211_000007_create_post_save_table;
mod m20260212_000008_create_flight_route_table;
mod m20260212_000009_create_route_like_table;
mod m20260212_000010_create_route_save_table;
mod m20260213_000011_create_notification_table;
mod m20260214_000012_create_complaint_table;
mod m20260214_000013_create_site_settings_table;
mod m20260214_000014_create_navigation_item_table;
mod m20260214_000015_create_user_action_log_table;
mod m20260215_000016_create_revoked_token_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260210_000001_create_user_table::Migration),
            Box::new(m20260210_000002_create_follow_table::Migration),
            Box::new(m20260211_000003_create_post_table::Migration),
            Box::new(m20260211_000004_create_post_image_table::Migration),
            Box::new(m20260211_000005_create_comment_table::Migration),
            Box::new(m20260211_000006_create_post_like_table::Migration),
            Box::new(m20260211_000007_create_post_save_table::Migration),
            Box::new(m20260212_000008_create_flight_route_table::Migration),
            Box::new(m20260212_000009_create_route_like_table::Migration),
            Box::new(m20260212_000010_create_route_save_table::Migration),
            Box::new(m20260213_000011_create_notification_table::Migration),
            Box::new(m20260214_000012_create_complaint_table::Migration),
            Box::new(m20260214_000013_create_site_settings_table::Migration),
            Box::new(m20260214_000014_create_navigation_item_table::Migration),
            Box::new(m20260214_000015_create_user_action_log_table::Migration),
            Box::new(m20260215_000016_create_revoked_token_table::Migration),
        ]
    }
}
