//! Request-level middleware: bearer authentication, the maintenance gate and
//! the action audit log.

pub mod action_log;
pub mod auth;
pub mod maintenance;

#[cfg(test)]
mod test;
