use serde::{Deserialize, Serialize};

use super::require_text;
use crate::DomainError;

/// A locally catalogued movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub poster_url: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub poster_url: String,
    pub description: String,
}

impl NewMovie {
    pub fn new(title: String, poster_url: String, description: String) -> Self {
        Self {
            title,
            poster_url,
            description,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require_text(&self.title, "title")?;
        require_text(&self.poster_url, "poster_url")?;
        require_text(&self.description, "description")
    }
}
