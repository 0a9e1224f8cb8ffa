//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::user::PilotType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .username("maverick")
///     .pilot_type(PilotType::Real)
///     .staff(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: String,
    password: Option<String>,
    pilot_type: PilotType,
    flight_hours: f64,
    aircraft_types: Option<String>,
    bio: Option<String>,
    profile_pic: Option<String>,
    active: bool,
    read_only: bool,
    staff: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Username and email are derived from a unique counter so multiple
    /// factory users never collide on unique columns.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("pilot{}", id),
            email: format!("pilot{}@example.com", id),
            password: None,
            pilot_type: PilotType::Virtual,
            flight_hours: 0.0,
            aircraft_types: None,
            bio: None,
            profile_pic: None,
            active: true,
            read_only: false,
            staff: false,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets a login password. The factory stores a real bcrypt hash (minimum
    /// cost, tests only) so authentication flows can verify it.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn pilot_type(mut self, pilot_type: PilotType) -> Self {
        self.pilot_type = pilot_type;
        self
    }

    pub fn flight_hours(mut self, hours: f64) -> Self {
        self.flight_hours = hours;
        self
    }

    pub fn aircraft_types(mut self, types: impl Into<String>) -> Self {
        self.aircraft_types = Some(types.into());
        self
    }

    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn profile_pic(mut self, key: impl Into<String>) -> Self {
        self.profile_pic = Some(key.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn staff(mut self, staff: bool) -> Self {
        self.staff = staff;
        self
    }

    /// Inserts the user and returns the created entity.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let password_hash = match self.password {
            Some(password) => {
                bcrypt::hash(password, 4).map_err(|e| DbErr::Custom(e.to_string()))?
            }
            None => "unusable-password".to_string(),
        };

        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email.to_lowercase()),
            password_hash: ActiveValue::Set(password_hash),
            pilot_type: ActiveValue::Set(self.pilot_type),
            flight_hours: ActiveValue::Set(self.flight_hours),
            aircraft_types: ActiveValue::Set(self.aircraft_types),
            license_number: ActiveValue::Set(None),
            bio: ActiveValue::Set(self.bio),
            profile_pic: ActiveValue::Set(self.profile_pic),
            cover_pic: ActiveValue::Set(None),
            is_active: ActiveValue::Set(self.active),
            is_read_only: ActiveValue::Set(self.read_only),
            is_staff: ActiveValue::Set(self.staff),
            date_joined: ActiveValue::Set(Utc::now()),
            last_login: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
