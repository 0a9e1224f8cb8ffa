use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NavigationItem::Table)
                    .if_not_exists()
                    .col(pk_auto(NavigationItem::Id))
                    .col(string_uniq(NavigationItem::Key))
                    .col(string(NavigationItem::Label))
                    .col(string_len(NavigationItem::Location, 50).default("public_sidebar"))
                    .col(boolean(NavigationItem::IsVisibleForUsers).default(true))
                    .col(boolean(NavigationItem::IsEnabled).default(true))
                    .col(integer(NavigationItem::Order).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NavigationItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NavigationItem {
    Table,
    Id,
    Key,
    Label,
    Location,
    IsVisibleForUsers,
    IsEnabled,
    Order,
}
