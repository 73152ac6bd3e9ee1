use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::require_text;
use crate::DomainError;

/// A user's review of a movie. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i32,
    pub user_id: i32,
    pub movie_id: i32,
    pub comment: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

/// Review submission. `created_at` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    pub user_id: i32,
    pub movie_id: i32,
    pub comment: String,
    pub rating: i32,
}

impl NewReview {
    pub fn new(user_id: i32, movie_id: i32, comment: String, rating: i32) -> Self {
        Self {
            user_id,
            movie_id,
            comment,
            rating,
        }
    }

    /// Zero is treated as "not supplied" for every numeric field, rating
    /// included. The 1-5 range is not enforced.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.user_id == 0 {
            return Err(DomainError::required("user_id"));
        }
        if self.movie_id == 0 {
            return Err(DomainError::required("movie_id"));
        }
        require_text(&self.comment, "comment")?;
        if self.rating == 0 {
            return Err(DomainError::required("rating"));
        }
        Ok(())
    }
}
