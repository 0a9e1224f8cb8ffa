use crate::data::notification::NotificationRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod read_state;
