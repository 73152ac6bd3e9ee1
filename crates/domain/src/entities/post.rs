use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::require_text;
use crate::DomainError;

/// Free-form post owned by a user. Only reachable through the data layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub user_id: i32,
}

impl NewPost {
    pub fn new(title: String, content: String, user_id: i32) -> Self {
        Self {
            title,
            content,
            user_id,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require_text(&self.title, "title")?;
        require_text(&self.content, "content")
    }
}
