//! Revoked refresh-token identifiers (the token blacklist).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "revoked_token")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// jti claim of the revoked refresh token.
    #[sea_orm(unique)]
    pub jti: String,

    /// Expiry of the revoked token; rows older than this can be pruned.
    pub expires_at: DateTimeUtc,

    pub created: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
