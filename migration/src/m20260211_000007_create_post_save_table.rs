use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260210_000001_create_user_table::User, m20260211_000003_create_post_table::Post,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PostSave::Table)
                    .if_not_exists()
                    .col(pk_auto(PostSave::Id))
                    .col(integer(PostSave::PostId))
                    .col(integer(PostSave::UserId))
                    .col(
                        timestamp_with_time_zone(PostSave::Created)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_save_post_id")
                            .from(PostSave::Table, PostSave::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_save_user_id")
                            .from(PostSave::Table, PostSave::UserId)
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
                    .name("idx_post_save_pair")
                    .table(PostSave::Table)
                    .col(PostSave::PostId)
                    .col(PostSave::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PostSave::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PostSave {
    Table,
    Id,
    PostId,
    UserId,
    Created,
}
