use crate::{data::user::UserRepository, model::user::{PilotQuery, UpdateUserParams}};
use entity::user::PilotType;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::user::UserFactory};

mod find_by_login;
mod search_pilots;
mod update;
