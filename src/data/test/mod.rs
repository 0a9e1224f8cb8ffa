mod action_log;
mod comment;
mod complaint;
mod follow;
mod navigation;
mod notification;
mod post;
mod revoked_token;
mod route;
mod site_settings;
mod user;
