//! Post validator/normalizer.
//!
//! Turns a structurally loose candidate payload into a normalized [`Post`]
//! or the complete set of field-level violations. Checks run independently
//! and never short-circuit, so every problem in a payload is reported at
//! once. The `published_at` stamp is applied here, at the write boundary,
//! with the clock passed in explicitly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Post, PostStatus};
use crate::error::{ValidationErrorKind, ValidationErrors};

pub const TITLE_MAX_LEN: usize = 100;
pub const CONTENT_MAX_LEN: usize = 5000;

/// Candidate values for creating a post. Everything is optional; the
/// validator decides what is actually required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPost {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<Uuid>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub views: Option<u64>,
    pub likes: Option<u64>,
}

/// Partial edit of an existing post. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<String>,
}

/// Validate and normalize a creation payload.
///
/// On success the returned record has a fresh id, `created_at` and
/// `updated_at` set to `now`, `status` defaulted to `draft`, counters
/// defaulted to 0, and `published_at` stamped if the candidate arrives
/// already published.
pub fn validate_new(draft: NewPost, now: DateTime<Utc>) -> Result<Post, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let title = check_title(draft.title.as_deref(), &mut errors);
    let content = check_content(draft.content.as_deref(), &mut errors);
    let status = match draft.status.as_deref() {
        Some(text) => check_status(text, &mut errors),
        None => Some(PostStatus::default()),
    };

    if draft.author.is_none() {
        errors.push("author", ValidationErrorKind::MissingRequiredField);
    }

    // Each check pushes an error exactly when it yields `None`.
    let (Some(title), Some(content), Some(author), Some(status)) =
        (title, content, draft.author, status)
    else {
        return Err(errors);
    };

    let mut post = Post {
        id: Uuid::new_v4(),
        author,
        title,
        content,
        tags: normalize_tags(draft.tags),
        status,
        published_at: draft.published_at,
        views: draft.views.unwrap_or(0),
        likes: draft.likes.unwrap_or(0),
        created_at: now,
        updated_at: now,
    };
    post.stamp_published(now);
    Ok(post)
}

/// Merge an edit into an existing record and re-validate the result.
///
/// `updated_at` is bumped to `now`. A first transition to `published`
/// stamps `published_at`; a post already published keeps its original
/// timestamp.
pub fn apply_update(
    post: Post,
    update: PostUpdate,
    now: DateTime<Utc>,
) -> Result<Post, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let title = match update.title.as_deref() {
        Some(text) => check_title(Some(text), &mut errors),
        None => Some(post.title.clone()),
    };
    let content = match update.content.as_deref() {
        Some(text) => check_content(Some(text), &mut errors),
        None => Some(post.content.clone()),
    };
    let status = match update.status.as_deref() {
        Some(text) => check_status(text, &mut errors),
        None => Some(post.status),
    };

    let (Some(title), Some(content), Some(status)) = (title, content, status) else {
        return Err(errors);
    };

    let mut post = Post {
        title,
        content,
        tags: update.tags.map(normalize_tags).unwrap_or(post.tags),
        status,
        updated_at: now,
        ..post
    };
    post.stamp_published(now);
    Ok(post)
}

fn check_title(value: Option<&str>, errors: &mut ValidationErrors) -> Option<String> {
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        errors.push("title", ValidationErrorKind::MissingRequiredField);
        return None;
    }
    if trimmed.chars().count() > TITLE_MAX_LEN {
        errors.push("title", ValidationErrorKind::too_long(TITLE_MAX_LEN));
        return None;
    }
    Some(trimmed.to_owned())
}

fn check_content(value: Option<&str>, errors: &mut ValidationErrors) -> Option<String> {
    // Content is stored verbatim, no trimming.
    let Some(content) = value.filter(|c| !c.is_empty()) else {
        errors.push("content", ValidationErrorKind::MissingRequiredField);
        return None;
    };
    if content.chars().count() > CONTENT_MAX_LEN {
        errors.push("content", ValidationErrorKind::too_long(CONTENT_MAX_LEN));
        return None;
    }
    Some(content.to_owned())
}

fn check_status(text: &str, errors: &mut ValidationErrors) -> Option<PostStatus> {
    match text.parse() {
        Ok(status) => Some(status),
        Err(kind) => {
            errors.push("status", kind);
            None
        }
    }
}

/// Trim and lowercase each tag. Duplicates are kept; order is preserved.
fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter().map(|t| t.trim().to_lowercase()).collect()
}
