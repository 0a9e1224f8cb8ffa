//! DTOs and operation-specific parameter types.
//!
//! DTOs define the JSON shapes of the HTTP API. Parameter structs carry
//! operation inputs from controllers through services into the data layer so
//! repository methods don't grow long argument lists.

pub mod admin;
pub mod api;
pub mod notification;
pub mod post;
pub mod route;
pub mod token;
pub mod user;
