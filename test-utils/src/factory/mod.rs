//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories handle foreign keys and unique fields automatically,
//! keeping tests concise.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let user = factory::user::create_user(&db).await?;
//! let post = factory::post::create_post(&db, user.id).await?;
//!
//! // Using builder pattern for customization
//! let demo = factory::user::UserFactory::new(&db)
//!     .username("demo")
//!     .read_only(true)
//!     .build()
//!     .await?;
//! ```

pub mod complaint;
pub mod flight_route;
pub mod follow;
pub mod helpers;
pub mod navigation_item;
pub mod notification;
pub mod post;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use complaint::create_complaint;
pub use flight_route::create_route;
pub use follow::create_follow;
pub use navigation_item::create_nav_item;
pub use notification::create_notification;
pub use post::create_post;
pub use user::create_user;
