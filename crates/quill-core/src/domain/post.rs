use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationErrorKind;

/// Characters of content shown in the summary.
const SUMMARY_LEN: usize = 150;

/// Average reading speed used for the reading-time estimate.
const WORDS_PER_MINUTE: usize = 200;

/// Lifecycle status of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
    Archived,
}

impl PostStatus {
    pub const ALL: [PostStatus; 3] = [Self::Draft, Self::Published, Self::Archived];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

impl Default for PostStatus {
    fn default() -> Self {
        Self::Draft
    }
}

impl FromStr for PostStatus {
    type Err = ValidationErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "archived" => Ok(Self::Archived),
            _ => Err(ValidationErrorKind::invalid_status()),
        }
    }
}

/// Post entity - a blog post or article with lifecycle status.
///
/// Instances are only produced by the validator in [`crate::validate`], so a
/// `Post` in hand already satisfies the field constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author: Uuid,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub status: PostStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub views: u64,
    pub likes: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// First 150 characters of the content, with an ellipsis marker.
    pub fn summary(&self) -> String {
        let head: String = self.content.chars().take(SUMMARY_LEN).collect();
        format!("{head}...")
    }

    /// Estimated reading time in minutes, rounded up.
    pub fn reading_time(&self) -> u32 {
        let words = self.content.split_whitespace().count();
        words.div_ceil(WORDS_PER_MINUTE) as u32
    }

    /// Stamp `published_at` on the first transition to `published`.
    ///
    /// Applied at the write boundary by the validator. The stamp fires at
    /// most once: a post that is already published keeps its original
    /// timestamp across later edits.
    pub fn stamp_published(&mut self, now: DateTime<Utc>) {
        if self.status == PostStatus::Published && self.published_at.is_none() {
            tracing::debug!(post_id = %self.id, %now, "stamping published_at");
            self.published_at = Some(now);
        }
    }
}
