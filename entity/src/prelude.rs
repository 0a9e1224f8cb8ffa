pub use super::comment::Entity as Comment;
pub use super::complaint::Entity as Complaint;
pub use super::flight_route::Entity as FlightRoute;
pub use super::follow::Entity as Follow;
pub use super::navigation_item::Entity as NavigationItem;
pub use super::notification::Entity as Notification;
pub use super::post::Entity as Post;
pub use super::post_image::Entity as PostImage;
pub use super::post_like::Entity as PostLike;
pub use super::post_save::Entity as PostSave;
pub use super::revoked_token::Entity as RevokedToken;
pub use super::route_like::Entity as RouteLike;
pub use super::route_save::Entity as RouteSave;
pub use super::site_settings::Entity as SiteSettings;
pub use super::user::Entity as User;
pub use super::user_action_log::Entity as UserActionLog;
