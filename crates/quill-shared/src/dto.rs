//! Data Transfer Objects - request/response types for post submission.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quill_core::domain::Post;
use quill_core::{NewPost, PostUpdate};

/// Request to create a post. Fields are accepted loosely; the domain
/// validator decides what is required and reports every violation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<Uuid>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: Option<String>,
}

impl From<CreatePostRequest> for NewPost {
    fn from(req: CreatePostRequest) -> Self {
        NewPost {
            title: req.title,
            content: req.content,
            author: req.author,
            tags: req.tags,
            status: req.status,
            ..NewPost::default()
        }
    }
}

/// Request to edit an existing post. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<String>,
}

impl From<UpdatePostRequest> for PostUpdate {
    fn from(req: UpdatePostRequest) -> Self {
        PostUpdate {
            title: req.title,
            content: req.content,
            tags: req.tags,
            status: req.status,
        }
    }
}

/// Serialized view of a normalized post, including the derived fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub author: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    pub views: u64,
    pub likes: u64,
    pub created_at: String,
    pub updated_at: String,
    pub summary: String,
    pub reading_time: u32,
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            author: post.author.to_string(),
            title: post.title.clone(),
            content: post.content.clone(),
            tags: post.tags.clone(),
            status: post.status.as_str().to_owned(),
            published_at: post.published_at.map(|t| t.to_rfc3339()),
            views: post.views,
            likes: post.likes,
            created_at: post.created_at.to_rfc3339(),
            updated_at: post.updated_at.to_rfc3339(),
            summary: post.summary(),
            reading_time: post.reading_time(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use quill_core::validate_new;

    #[test]
    fn response_carries_derived_fields() {
        let draft = NewPost {
            title: Some("A post".to_owned()),
            content: Some("word ".repeat(400).trim_end().to_owned()),
            author: Some(Uuid::new_v4()),
            status: Some("published".to_owned()),
            ..NewPost::default()
        };
        let post = validate_new(draft, Utc::now()).unwrap();
        let view = PostResponse::from(&post);

        assert_eq!(view.status, "published");
        assert!(view.published_at.is_some());
        assert_eq!(view.reading_time, 2);
        assert!(view.summary.ends_with("..."));

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["reading_time"], 2);
        assert_eq!(json["summary"], view.summary);
    }

    #[test]
    fn create_request_maps_onto_the_candidate_shape() {
        let req: CreatePostRequest = serde_json::from_str(
            r#"{"title": "Hi", "content": "Body", "tags": [" Tech ", "AI"]}"#,
        )
        .unwrap();
        let draft = NewPost::from(req);

        assert_eq!(draft.title.as_deref(), Some("Hi"));
        assert!(draft.author.is_none());
        assert_eq!(draft.tags, vec![" Tech ", "AI"]);
        assert!(draft.views.is_none());
    }
}
