use sea_orm_migration::{prelude::*, schema::*};

use super::m20260210_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FlightRoute::Table)
                    .if_not_exists()
                    .col(pk_auto(FlightRoute::Id))
                    .col(integer(FlightRoute::PilotId))
                    .col(string(FlightRoute::Title))
                    .col(string(FlightRoute::Departure))
                    .col(string(FlightRoute::Destination))
                    .col(double_null(FlightRoute::DepartureLat))
                    .col(double_null(FlightRoute::DepartureLng))
                    .col(double_null(FlightRoute::DestinationLat))
                    .col(double_null(FlightRoute::DestinationLng))
                    .col(text_null(FlightRoute::Description))
                    .col(date_null(FlightRoute::FlightDate))
                    .col(big_integer_null(FlightRoute::FlightDuration))
                    .col(double_null(FlightRoute::Distance))
                    .col(string_null(FlightRoute::AircraftType))
                    .col(string_null(FlightRoute::RouteFile))
                    .col(json_null(FlightRoute::Waypoints))
                    .col(string_len(FlightRoute::Visibility, 10).default("public"))
                    .col(
                        timestamp_with_time_zone(FlightRoute::Created)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(FlightRoute::Updated)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_route_pilot_id")
                            .from(FlightRoute::Table, FlightRoute::PilotId)
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
                    .name("idx_flight_route_pilot")
                    .table(FlightRoute::Table)
                    .col(FlightRoute::PilotId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FlightRoute::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FlightRoute {
    Table,
    Id,
    PilotId,
    Title,
    Departure,
    Destination,
    DepartureLat,
    DepartureLng,
    DestinationLat,
    DestinationLng,
    Description,
    FlightDate,
    FlightDuration,
    Distance,
    AircraftType,
    RouteFile,
    Waypoints,
    Visibility,
    Created,
    Updated,
}
