//! Refresh-token blacklist repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Repository providing database operations for revoked refresh tokens.
pub struct RevokedTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RevokedTokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn is_revoked(&self, jti: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::RevokedToken::find()
            .filter(entity::revoked_token::Column::Jti.eq(jti))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Puts a jti on the blacklist. Revoking an already-revoked token is a
    /// no-op.
    pub async fn revoke(&self, jti: &str, expires_at: DateTime<Utc>) -> Result<(), DbErr> {
        if self.is_revoked(jti).await? {
            return Ok(());
        }

        entity::revoked_token::ActiveModel {
            jti: ActiveValue::Set(jti.to_string()),
            expires_at: ActiveValue::Set(expires_at),
            created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Drops blacklist rows whose tokens have expired anyway.
    pub async fn prune_expired(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::RevokedToken::delete_many()
            .filter(entity::revoked_token::Column::ExpiresAt.lt(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
