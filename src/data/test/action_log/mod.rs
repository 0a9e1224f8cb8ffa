use crate::{
    data::action_log::ActionLogRepository,
    model::admin::{ActionLogQuery, CreateActionLogParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod filters;

fn log_entry(user_id: Option<i32>, action: &str) -> CreateActionLogParams {
    CreateActionLogParams {
        user_id,
        action: action.to_string(),
        path: action
            .split_once(' ')
            .map(|(_, path)| path.to_string())
            .unwrap_or_default(),
        ip_address: Some("127.0.0.1".to_string()),
        extra: serde_json::json!({}),
    }
}
