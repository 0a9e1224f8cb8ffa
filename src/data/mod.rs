//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and accept
//! parameter models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

pub mod action_log;
pub mod comment;
pub mod complaint;
pub mod follow;
pub mod navigation;
pub mod notification;
pub mod post;
pub mod revoked_token;
pub mod route;
pub mod site_settings;
pub mod user;

#[cfg(test)]
mod test;
