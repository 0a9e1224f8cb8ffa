//! Post, comment and toggle DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::user::CreatorDto;

/// Legacy `image` field shape: "" without attachments, a single URL string
/// for one attachment, an ordered URL array for several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageField {
    Single(String),
    Many(Vec<String>),
}

impl ImageField {
    /// Builds the legacy shape from the canonical ordered URL list.
    pub fn from_urls(urls: &[String]) -> Self {
        match urls {
            [] => ImageField::Single(String::new()),
            [single] => ImageField::Single(single.clone()),
            many => ImageField::Many(many.to_vec()),
        }
    }
}

/// Post representation returned by feed and detail endpoints.
///
/// `images` is the canonical ordered attachment list. `image` carries the
/// legacy polymorphic shape older clients expect.
#[derive(Debug, Clone, Serialize)]
pub struct PostDto {
    pub id: i32,
    pub creator: CreatorDto,
    pub content: String,

    pub image: ImageField,

    /// All image URLs in attachment order.
    pub images: Vec<String>,

    pub likes_count: u64,
    pub comments_count: u64,
    pub saves_count: u64,

    /// Viewer-specific flags; always false for anonymous requests.
    pub is_liked: bool,
    pub is_saved: bool,
    pub is_commented: bool,

    pub is_edited: bool,
    pub created: DateTime<Utc>,

    /// Humanized timestamp, e.g. "3 hours ago".
    pub created_display: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentDto {
    pub id: i32,
    pub post_id: i32,
    pub creator: CreatorDto,
    pub content: String,
    pub created: DateTime<Utc>,
    pub created_display: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentRequest {
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePostRequest {
    pub content: String,
}

/// Result of a like toggle.
#[derive(Debug, Clone, Serialize)]
pub struct LikeToggleDto {
    pub liked: bool,
    pub likes_count: u64,
}

/// Result of a save toggle.
#[derive(Debug, Clone, Serialize)]
pub struct SaveToggleDto {
    pub saved: bool,
    pub saves_count: u64,
}

/// Inputs for creating a post; `images` holds storage keys in display order.
#[derive(Debug, Clone)]
pub struct CreatePostParams {
    pub creator_id: i32,
    pub content: String,
    pub images: Vec<String>,
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn urls(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn no_attachments_serialize_as_empty_string() {
        let field = ImageField::from_urls(&[]);

        assert_eq!(serde_json::to_value(&field).unwrap(), json!(""));
    }

    #[test]
    fn single_attachment_serializes_as_bare_string() {
        let field = ImageField::from_urls(&urls(&["/media/images/posts/images/a.png"]));

        assert_eq!(
            serde_json::to_value(&field).unwrap(),
            json!("/media/images/posts/images/a.png")
        );
    }

    #[test]
    fn several_attachments_serialize_as_ordered_array() {
        let field = ImageField::from_urls(&urls(&["/m/c.png", "/m/a.png", "/m/b.png"]));

        // Attachment order, not lexicographic.
        assert_eq!(
            serde_json::to_value(&field).unwrap(),
            json!(["/m/c.png", "/m/a.png", "/m/b.png"])
        );
    }
}
