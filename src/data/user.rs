//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing pilot accounts in the
//! database. It handles account creation, login lookups, profile updates, the
//! pilot directory search, and the staff/active flags used by the back-office.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::user::{CreateUserParams, PilotQuery, UpdateUserParams};

/// Repository providing database operations for pilot accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new account.
    ///
    /// The email is stored lowercased so later lookups are case-insensitive.
    ///
    /// # Arguments
    /// - `params` - Account fields including the pre-hashed password
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violations on
    ///   username or email
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email.to_lowercase()),
            password_hash: ActiveValue::Set(params.password_hash),
            pilot_type: ActiveValue::Set(params.pilot_type),
            flight_hours: ActiveValue::Set(params.flight_hours),
            aircraft_types: ActiveValue::Set(params.aircraft_types),
            license_number: ActiveValue::Set(None),
            bio: ActiveValue::Set(params.bio),
            profile_pic: ActiveValue::Set(None),
            cover_pic: ActiveValue::Set(None),
            is_active: ActiveValue::Set(true),
            is_read_only: ActiveValue::Set(false),
            is_staff: ActiveValue::Set(false),
            date_joined: ActiveValue::Set(Utc::now()),
            last_login: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Finds an account by login: exact username match, or case-insensitive
    /// email match (emails are stored lowercased).
    pub async fn find_by_login(
        &self,
        login: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(
                Condition::any()
                    .add(entity::user::Column::Username.eq(login))
                    .add(entity::user::Column::Email.eq(login.to_lowercase())),
            )
            .one(self.db)
            .await
    }

    pub async fn username_taken(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn email_taken(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.to_lowercase()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Applies a partial profile update. `None` fields are left untouched.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during load or update
    pub async fn update(
        &self,
        user_id: i32,
        params: UpdateUserParams,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.find_by_id(user_id).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = user.into();

        if let Some(email) = params.email {
            active.email = ActiveValue::Set(email.to_lowercase());
        }
        if let Some(password_hash) = params.password_hash {
            active.password_hash = ActiveValue::Set(password_hash);
        }
        if let Some(pilot_type) = params.pilot_type {
            active.pilot_type = ActiveValue::Set(pilot_type);
        }
        if let Some(flight_hours) = params.flight_hours {
            active.flight_hours = ActiveValue::Set(flight_hours);
        }
        if let Some(aircraft_types) = params.aircraft_types {
            active.aircraft_types = ActiveValue::Set(Some(aircraft_types));
        }
        if let Some(license_number) = params.license_number {
            active.license_number = ActiveValue::Set(Some(license_number));
        }
        if let Some(bio) = params.bio {
            active.bio = ActiveValue::Set(Some(bio));
        }
        if let Some(profile_pic) = params.profile_pic {
            active.profile_pic = ActiveValue::Set(Some(profile_pic));
        }
        if let Some(cover_pic) = params.cover_pic {
            active.cover_pic = ActiveValue::Set(Some(cover_pic));
        }

        let updated = active.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Stamps the last successful login time.
    pub async fn set_last_login(&self, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::LastLogin,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Sets the active flag (false = banned).
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated user
    /// - `Ok(None)` - No user with that id
    pub async fn set_active(
        &self,
        user_id: i32,
        is_active: bool,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.find_by_id(user_id).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = user.into();
        active.is_active = ActiveValue::Set(is_active);

        let updated = active.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Sets the staff flag (admin grant / revoke).
    pub async fn set_staff(
        &self,
        user_id: i32,
        is_staff: bool,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.find_by_id(user_id).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = user.into();
        active.is_staff = ActiveValue::Set(is_staff);

        let updated = active.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Searches the pilot directory.
    ///
    /// Only active accounts are listed. Filtering by "real" or "virtual"
    /// includes hybrid ("both") pilots; `q` substring-matches username and
    /// aircraft types. `order_by` accepts {username, flight_hours,
    /// date_joined} with a "-" prefix for descending; anything else falls
    /// back to username ascending.
    pub async fn search_pilots(
        &self,
        query: &PilotQuery,
    ) -> Result<Vec<entity::user::Model>, DbErr> {
        use entity::user::PilotType;

        let mut condition = Condition::all().add(entity::user::Column::IsActive.eq(true));

        match query.pilot_type.as_deref() {
            Some("real") => {
                condition = condition.add(
                    entity::user::Column::PilotType.is_in([PilotType::Real, PilotType::Both]),
                );
            }
            Some("virtual") => {
                condition = condition.add(
                    entity::user::Column::PilotType.is_in([PilotType::Virtual, PilotType::Both]),
                );
            }
            Some("both") => {
                condition = condition.add(entity::user::Column::PilotType.eq(PilotType::Both));
            }
            _ => {}
        }

        if let Some(q) = &query.q {
            if !q.is_empty() {
                condition = condition.add(
                    Condition::any()
                        .add(entity::user::Column::Username.contains(q))
                        .add(entity::user::Column::AircraftTypes.contains(q)),
                );
            }
        }

        let order_by = query.order_by.as_deref().unwrap_or("username");
        let (key, descending) = match order_by.strip_prefix('-') {
            Some(key) => (key, true),
            None => (order_by, false),
        };

        let column = match key {
            "flight_hours" => entity::user::Column::FlightHours,
            "date_joined" => entity::user::Column::DateJoined,
            _ => entity::user::Column::Username,
        };

        let find = entity::prelude::User::find().filter(condition);

        let find = if descending {
            find.order_by_desc(column)
        } else {
            find.order_by_asc(column)
        };

        find.all(self.db).await
    }

    /// Lists every staff account, ordered by username.
    pub async fn list_staff(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::IsStaff.eq(true))
            .order_by_asc(entity::user::Column::Username)
            .all(self.db)
            .await
    }

    /// Lists every account, newest first, for the admin user list.
    pub async fn list_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_desc(entity::user::Column::DateJoined)
            .all(self.db)
            .await
    }

    /// Loads many users by id in one query, e.g. for embedding creators.
    pub async fn find_many(&self, ids: Vec<i32>) -> Result<Vec<entity::user::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    pub async fn count_joined_since(&self, since: DateTime<Utc>) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::DateJoined.gte(since))
            .count(self.db)
            .await
    }
}
