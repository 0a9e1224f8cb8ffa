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
                    .table(UserActionLog::Table)
                    .if_not_exists()
                    .col(pk_auto(UserActionLog::Id))
                    .col(integer_null(UserActionLog::UserId))
                    .col(string(UserActionLog::Action))
                    .col(string(UserActionLog::Path).default(""))
                    .col(string_null(UserActionLog::IpAddress))
                    .col(json(UserActionLog::Extra))
                    .col(
                        timestamp_with_time_zone(UserActionLog::Created)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_action_log_user_id")
                            .from(UserActionLog::Table, UserActionLog::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_action_log_created")
                    .table(UserActionLog::Table)
                    .col(UserActionLog::Created)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserActionLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserActionLog {
    Table,
    Id,
    UserId,
    Action,
    Path,
    IpAddress,
    Extra,
    Created,
}
