//! PilotHub backend API.
//!
//! A social-networking backend for aviation enthusiasts: user accounts with
//! follow relationships, media posts with likes/comments/saves, flight-route
//! sharing with geographic waypoints and visibility rules, a notification
//! feed, and an administrative back-office (complaints, site-wide maintenance
//! mode, navigation configuration, action audit log). The backend uses Axum
//! as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations through per-domain repositories
//! - **Model Layer** (`model/`) - DTOs and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Authentication guard, maintenance gate, action logging
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Middleware** applies the maintenance gate and records the action log
//! 3. **Controller** authenticates the caller through `AuthGuard`, parses the request
//! 4. **Service** executes business logic and assembles response DTOs
//! 5. **Data** queries the database through SeaORM repositories

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
