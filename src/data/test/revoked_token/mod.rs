use crate::data::revoked_token::RevokedTokenRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod blacklist;
