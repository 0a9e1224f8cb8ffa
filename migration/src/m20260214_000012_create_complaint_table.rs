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
                    .table(Complaint::Table)
                    .if_not_exists()
                    .col(pk_auto(Complaint::Id))
                    .col(integer(Complaint::UserId))
                    .col(string(Complaint::Category).default(""))
                    .col(text(Complaint::Text))
                    .col(string_len(Complaint::Status, 20).default("new"))
                    .col(integer_null(Complaint::HandledBy))
                    .col(text(Complaint::InternalComment).default(""))
                    .col(
                        timestamp_with_time_zone(Complaint::Created)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Complaint::Updated)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_complaint_user_id")
                            .from(Complaint::Table, Complaint::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_complaint_handled_by")
                            .from(Complaint::Table, Complaint::HandledBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Complaint::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Complaint {
    Table,
    Id,
    UserId,
    Category,
    Text,
    Status,
    HandledBy,
    InternalComment,
    Created,
    Updated,
}
