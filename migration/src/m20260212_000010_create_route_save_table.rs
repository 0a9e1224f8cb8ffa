use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260210_000001_create_user_table::User,
    m20260212_000008_create_flight_route_table::FlightRoute,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RouteSave::Table)
                    .if_not_exists()
                    .col(pk_auto(RouteSave::Id))
                    .col(integer(RouteSave::RouteId))
                    .col(integer(RouteSave::UserId))
                    .col(
                        timestamp_with_time_zone(RouteSave::Created)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_route_save_route_id")
                            .from(RouteSave::Table, RouteSave::RouteId)
                            .to(FlightRoute::Table, FlightRoute::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_route_save_user_id")
                            .from(RouteSave::Table, RouteSave::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_route_save_pair")
                    .table(RouteSave::Table)
                    .col(RouteSave::RouteId)
                    .col(RouteSave::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RouteSave::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RouteSave {
    Table,
    Id,
    RouteId,
    UserId,
    Created,
}
