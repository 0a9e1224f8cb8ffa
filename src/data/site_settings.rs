//! Site settings repository. A single row with id = 1, created on demand.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

const SETTINGS_ID: i32 = 1;

/// Repository providing database operations for global site settings.
pub struct SiteSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SiteSettingsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the settings row, creating it with defaults on first access.
    pub async fn get_solo(&self) -> Result<entity::site_settings::Model, DbErr> {
        let existing = entity::prelude::SiteSettings::find_by_id(SETTINGS_ID)
            .one(self.db)
            .await?;

        if let Some(settings) = existing {
            return Ok(settings);
        }

        entity::site_settings::ActiveModel {
            id: ActiveValue::Set(SETTINGS_ID),
            is_closed_for_public: ActiveValue::Set(false),
            maintenance_message: ActiveValue::Set(String::new()),
            updated: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Applies a partial settings update. `None` fields are left untouched.
    pub async fn update(
        &self,
        is_closed_for_public: Option<bool>,
        maintenance_message: Option<String>,
    ) -> Result<entity::site_settings::Model, DbErr> {
        let settings = self.get_solo().await?;

        let mut active: entity::site_settings::ActiveModel = settings.into();

        if let Some(is_closed) = is_closed_for_public {
            active.is_closed_for_public = ActiveValue::Set(is_closed);
        }
        if let Some(message) = maintenance_message {
            active.maintenance_message = ActiveValue::Set(message);
        }

        active.updated = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }
}
