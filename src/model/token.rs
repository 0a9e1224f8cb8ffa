//! Authentication request and response shapes.

use serde::{Deserialize, Serialize};

use crate::model::user::UserDto;

/// Login request. `username` accepts either a username or an email address;
/// email matching is case-insensitive.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub pilot_type: Option<String>,
    pub flight_hours: Option<f64>,
    pub aircraft_types: Option<String>,
    pub bio: Option<String>,
}

/// Refresh and logout requests both carry the refresh token.
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// A freshly issued token pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPairDto {
    pub refresh: String,
    pub access: String,
}

/// Response to signup and login: the token pair plus the account snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponseDto {
    pub tokens: TokenPairDto,
    pub user: UserDto,
}
