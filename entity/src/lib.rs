pub mod comment;
pub mod complaint;
pub mod flight_route;
pub mod follow;
pub mod navigation_item;
pub mod notification;
pub mod post;
pub mod post_image;
pub mod post_like;
pub mod post_save;
pub mod revoked_token;
pub mod route_like;
pub mod route_save;
pub mod site_settings;
pub mod user;
pub mod user_action_log;

pub mod prelude;
