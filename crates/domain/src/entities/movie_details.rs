use serde::{Deserialize, Serialize};

/// Author name shown for reviews whose user row no longer exists.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Movie facts as reported by the external metadata provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieMetadata {
    pub id: i32,
    pub title: Option<String>,
    pub poster_url: Option<String>,
    pub description: Option<String>,
    /// Release year, empty when the provider has no release date.
    pub year: String,
}

/// A local review with its author resolved to a display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieReview {
    pub id: i32,
    pub username: String,
    pub comment: String,
    pub rating: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub movie: MovieMetadata,
    pub reviews: Vec<MovieReview>,
}
