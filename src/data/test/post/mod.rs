use crate::{data::post::PostRepository, model::post::CreatePostParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::post::PostFactory};

mod create;
mod saves_and_likes;
mod update_content;
