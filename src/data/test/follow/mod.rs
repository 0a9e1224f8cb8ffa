use crate::data::follow::FollowRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod edges;
mod listings;
