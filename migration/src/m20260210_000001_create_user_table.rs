use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_uniq(User::Username))
                    .col(string_uniq(User::Email))
                    .col(string(User::PasswordHash))
                    .col(string_len(User::PilotType, 10))
                    .col(double(User::FlightHours).default(0.0))
                    .col(text_null(User::AircraftTypes))
                    .col(string_null(User::LicenseNumber))
                    .col(text_null(User::Bio))
                    .col(string_null(User::ProfilePic))
                    .col(string_null(User::CoverPic))
                    .col(boolean(User::IsActive).default(true))
                    .col(boolean(User::IsReadOnly).default(false))
                    .col(boolean(User::IsStaff).default(false))
                    .col(
                        timestamp_with_time_zone(User::DateJoined)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(User::LastLogin))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    PilotType,
    FlightHours,
    AircraftTypes,
    LicenseNumber,
    Bio,
    ProfilePic,
    CoverPic,
    IsActive,
    IsReadOnly,
    IsStaff,
    DateJoined,
    LastLogin,
}
