use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SiteSettings::Table)
                    .if_not_exists()
                    .col(integer(SiteSettings::Id).primary_key())
                    .col(boolean(SiteSettings::IsClosedForPublic).default(false))
                    .col(string(SiteSettings::MaintenanceMessage).default(""))
                    .col(
                        timestamp_with_time_zone(SiteSettings::Updated)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SiteSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SiteSettings {
    Table,
    Id,
    IsClosedForPublic,
    MaintenanceMessage,
    Updated,
}
