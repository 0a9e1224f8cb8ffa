//! Business logic layer.
//!
//! Services orchestrate repositories, enforce domain rules (ownership,
//! visibility, validation) and assemble response DTOs. Controllers stay thin:
//! authentication plus request parsing, then a service call.

pub mod admin;
pub mod auth;
pub mod media;
pub mod notification;
pub mod post;
pub mod route;
pub mod user;
