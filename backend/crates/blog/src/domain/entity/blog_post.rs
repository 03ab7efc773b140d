//! Blog Post Entity

use chrono::{DateTime, Utc};
use kernel::id::PostId;

use crate::error::{BlogError, BlogResult};

/// Stored blog post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    /// Assigned by the store on creation
    pub post_id: PostId,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// Apply validated changes, bumping `updated_at`
    pub fn apply(&mut self, changes: PostChanges, now: DateTime<Utc>) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        self.updated_at = now;
    }
}

/// Validated post awaiting persistence
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub description: String,
}

impl NewPost {
    /// Both fields are required and must be non-blank
    pub fn new(title: &str, description: &str) -> BlogResult<Self> {
        Ok(Self {
            title: required(title)?,
            description: required(description)?,
        })
    }

    /// Materialize into a stored post with a fresh identifier
    pub fn into_post(self, now: DateTime<Utc>) -> BlogPost {
        BlogPost {
            post_id: PostId::new(),
            title: self.title,
            description: self.description,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update; `None` leaves a field unchanged
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl PostChanges {
    /// Fields that are present must be non-blank
    pub fn new(title: Option<&str>, description: Option<&str>) -> BlogResult<Self> {
        Ok(Self {
            title: title.map(required).transpose()?,
            description: description.map(required).transpose()?,
        })
    }
}

fn required(value: &str) -> BlogResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(BlogError::MissingField);
    }
    Ok(value.to_string())
}
