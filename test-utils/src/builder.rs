use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with
/// in-memory SQLite databases. Use the builder pattern to add entity tables,
/// then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Post};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Post)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, generated
    /// from entity models and executed in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity
    /// using SQLite backend syntax. Tables should be added in dependency order
    /// (tables with foreign keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for social-graph and post operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - User
    /// - Follow
    /// - Post, PostImage, Comment, PostLike, PostSave
    /// - Notification
    ///
    /// Use this when testing follow/post functionality. For flight-route
    /// tests, use `with_route_tables()`.
    pub fn with_social_tables(self) -> Self {
        self.with_table(User)
            .with_table(Follow)
            .with_table(Post)
            .with_table(PostImage)
            .with_table(Comment)
            .with_table(PostLike)
            .with_table(PostSave)
            .with_table(Notification)
    }

    /// Adds all tables required for flight-route operations.
    ///
    /// Adds User, Follow, FlightRoute, RouteLike, RouteSave and Notification
    /// in dependency order. Follow is included because route visibility
    /// depends on the follow graph.
    pub fn with_route_tables(self) -> Self {
        self.with_table(User)
            .with_table(Follow)
            .with_table(FlightRoute)
            .with_table(RouteLike)
            .with_table(RouteSave)
            .with_table(Notification)
    }

    /// Adds all tables required for admin back-office operations.
    ///
    /// Adds User, Complaint, SiteSettings, NavigationItem, UserActionLog and
    /// Notification in dependency order.
    pub fn with_admin_tables(self) -> Self {
        self.with_table(User)
            .with_table(Complaint)
            .with_table(SiteSettings)
            .with_table(NavigationItem)
            .with_table(UserActionLog)
            .with_table(Notification)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all
    /// CREATE TABLE statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
