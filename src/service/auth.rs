//! Authentication service: signup, login, token refresh and revocation.
//!
//! Tokens are bcrypt + JWT: passwords hash with bcrypt, sessions are a signed
//! access/refresh pair. Refreshing rotates the pair and blacklists the spent
//! refresh token's jti, so a leaked refresh token dies on first legitimate
//! use.

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};

use crate::{
    data::{revoked_token::RevokedTokenRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::auth::{decode_claims, Claims, TOKEN_TYPE_ACCESS, TOKEN_TYPE_REFRESH},
    model::{
        token::{AuthResponseDto, LoginRequest, SignupRequest, TokenPairDto},
        user::{parse_pilot_type, CreateUserParams},
    },
    service::{media::MediaService, user::UserService},
    state::AppState,
};

/// Service providing authentication and token lifecycle logic.
pub struct AuthService<'a> {
    state: &'a AppState,
}

impl<'a> AuthService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Registers a new account and logs it in.
    ///
    /// # Returns
    /// - `Ok(AuthResponseDto)` - Token pair plus the fresh profile
    /// - `Err(AppError::Validation)` - Bad username, email, password, or a
    ///   taken username/email, with the offending field named
    pub async fn signup(&self, request: SignupRequest) -> Result<AuthResponseDto, AppError> {
        let user_repo = UserRepository::new(&self.state.db);

        validate_username(&request.username)?;
        validate_email(&request.email)?;
        validate_password(&request.password)?;

        if user_repo.username_taken(&request.username).await? {
            return Err(AppError::Validation {
                field: "username".to_string(),
                message: "This username is already taken.".to_string(),
            });
        }

        if user_repo.email_taken(&request.email).await? {
            return Err(AppError::Validation {
                field: "email".to_string(),
                message: "An account with this email already exists.".to_string(),
            });
        }

        let pilot_type = match &request.pilot_type {
            Some(value) => parse_pilot_type(value).ok_or_else(|| AppError::Validation {
                field: "pilot_type".to_string(),
                message: "Expected one of: virtual, real, both.".to_string(),
            })?,
            None => entity::user::PilotType::Virtual,
        };

        let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)?;

        let user = user_repo
            .create(CreateUserParams {
                username: request.username,
                email: request.email,
                password_hash,
                pilot_type,
                flight_hours: request.flight_hours.unwrap_or(0.0),
                aircraft_types: request.aircraft_types,
                bio: request.bio,
            })
            .await?;

        user_repo.set_last_login(user.id).await?;

        let tokens = self.issue_pair(&user)?;

        let user_service = UserService::new(self.state);
        let user_dto = user_service.user_dto(&user, Some(user.id)).await?;

        Ok(AuthResponseDto {
            tokens,
            user: user_dto,
        })
    }

    /// Authenticates by username or case-insensitive email plus password.
    ///
    /// Unknown accounts and wrong passwords produce the same error so the
    /// response does not reveal whether the login exists. Banned accounts get
    /// a distinguishable message.
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponseDto, AppError> {
        let user_repo = UserRepository::new(&self.state.db);

        let Some(user) = user_repo.find_by_login(&request.username).await? else {
            return Err(AuthError::InvalidCredentials(request.username).into());
        };

        if !bcrypt::verify(&request.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials(request.username).into());
        }

        if !user.is_active {
            return Err(AuthError::AccountDisabled(user.username).into());
        }

        user_repo.set_last_login(user.id).await?;

        let tokens = self.issue_pair(&user)?;

        let user_service = UserService::new(self.state);
        let user_dto = user_service.user_dto(&user, Some(user.id)).await?;

        Ok(AuthResponseDto {
            tokens,
            user: user_dto,
        })
    }

    /// Exchanges a refresh token for a fresh pair, rotating the refresh
    /// token.
    ///
    /// The spent token's jti goes on the blacklist. Claims are rebuilt from
    /// the current user row so a username or picture change propagates.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPairDto, AppError> {
        let claims = decode_claims(refresh_token, &self.state.jwt_secret)?;

        if claims.token_type != TOKEN_TYPE_REFRESH {
            return Err(AuthError::InvalidToken.into());
        }

        let revoked_repo = RevokedTokenRepository::new(&self.state.db);
        if revoked_repo.is_revoked(&claims.jti).await? {
            return Err(AuthError::RevokedToken.into());
        }

        let user_repo = UserRepository::new(&self.state.db);
        let Some(user) = user_repo.find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        if !user.is_active {
            return Err(AuthError::AccountDisabled(user.username).into());
        }

        revoked_repo
            .revoke(&claims.jti, expiry_time(claims.exp))
            .await?;

        self.issue_pair(&user)
    }

    /// Blacklists a refresh token (logout).
    ///
    /// Revoking an already-revoked token succeeds; expired blacklist rows are
    /// pruned opportunistically.
    pub async fn blacklist(&self, refresh_token: &str) -> Result<(), AppError> {
        let claims = decode_claims(refresh_token, &self.state.jwt_secret)?;

        if claims.token_type != TOKEN_TYPE_REFRESH {
            return Err(AuthError::InvalidToken.into());
        }

        let revoked_repo = RevokedTokenRepository::new(&self.state.db);
        revoked_repo
            .revoke(&claims.jti, expiry_time(claims.exp))
            .await?;

        if let Err(err) = revoked_repo.prune_expired().await {
            tracing::warn!("Failed to prune expired revoked tokens: {}", err);
        }

        Ok(())
    }

    /// Issues an access + refresh pair for the user.
    pub fn issue_pair(&self, user: &entity::user::Model) -> Result<TokenPairDto, AppError> {
        let access = self.encode_token(
            user,
            TOKEN_TYPE_ACCESS,
            Duration::minutes(self.state.access_token_minutes),
        )?;
        let refresh = self.encode_token(
            user,
            TOKEN_TYPE_REFRESH,
            Duration::days(self.state.refresh_token_days),
        )?;

        Ok(TokenPairDto { refresh, access })
    }

    fn encode_token(
        &self,
        user: &entity::user::Model,
        token_type: &str,
        lifetime: Duration,
    ) -> Result<String, AppError> {
        let media = MediaService::new(&self.state.http_client, &self.state.media);
        let now = Utc::now();

        let claims = Claims {
            sub: user.id,
            user_name: user.username.clone(),
            is_staff: user.is_staff,
            profile_pic: media.resolve_or_empty(user.profile_pic.as_deref()),
            token_type: token_type.to_string(),
            jti: new_jti(),
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.state.jwt_secret.as_bytes()),
        )?;

        Ok(token)
    }
}

/// Random 128-bit token id.
fn new_jti() -> String {
    format!(
        "{:016x}{:016x}",
        rand::random::<u64>(),
        rand::random::<u64>()
    )
}

fn expiry_time(exp: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(exp, 0).single().unwrap_or_else(Utc::now)
}

fn validate_username(username: &str) -> Result<(), AppError> {
    let valid_chars = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if username.len() < 3 || username.len() > 30 || !valid_chars {
        return Err(AppError::Validation {
            field: "username".to_string(),
            message: "Username must be 3-30 characters: letters, digits, '_' or '-'.".to_string(),
        });
    }

    Ok(())
}

fn validate_email(email: &str) -> Result<(), AppError> {
    let well_formed = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    };

    if !well_formed {
        return Err(AppError::Validation {
            field: "email".to_string(),
            message: "Enter a valid email address.".to_string(),
        });
    }

    Ok(())
}

fn validate_password(password: &str) -> Result<(), AppError> {
    if password.len() < 8 || !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(AppError::Validation {
            field: "password".to_string(),
            message: "Password must be at least 8 characters and contain a letter.".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn password_rules() {
        assert!(validate_password("flyhigh99").is_ok());
        assert!(validate_password("short1a").is_err());
        assert!(validate_password("12345678").is_err());
    }

    #[test]
    fn email_rules() {
        assert!(validate_email("pilot@example.com").is_ok());
        assert!(validate_email("pilot@localhost").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("no-at-sign").is_err());
    }

    #[test]
    fn username_rules() {
        assert!(validate_username("maverick_1").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("has space").is_err());
    }

    #[test]
    fn jtis_are_unique() {
        assert_ne!(new_jti(), new_jti());
        assert_eq!(new_jti().len(), 32);
    }
}
