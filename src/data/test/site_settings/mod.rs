use crate::data::site_settings::SiteSettingsRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod solo_row;
