//! PilotHub test utilities.
//!
//! Builds isolated in-memory SQLite databases for data-layer and
//! middleware tests, plus factories for the rows most tests need
//! (users, follows, posts, routes, complaints, navigation items,
//! notifications).
//!
//! A test picks the tables it needs through `TestBuilder` and then
//! works against the connection in the resulting `TestContext`:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn finds_nothing_in_an_empty_table() {
//!     let test = TestBuilder::new().with_social_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!     // ...
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
