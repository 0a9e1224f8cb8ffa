use crate::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Claims, Permission, TOKEN_TYPE_ACCESS},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::user::UserFactory};

mod guard;
mod maintenance;
mod should_log;

/// Claims as minted for an access token of `user_id`. Only the subject
/// matters to the guard; the display snapshot is decoration.
fn claims_for(user_id: i32) -> Claims {
    let now = chrono::Utc::now().timestamp();
    Claims {
        sub: user_id,
        user_name: "tester".to_string(),
        is_staff: false,
        profile_pic: String::new(),
        token_type: TOKEN_TYPE_ACCESS.to_string(),
        jti: "test-jti".to_string(),
        iat: now,
        exp: now + 3600,
    }
}
