//! Request and response bodies, one type per wire shape.

use chrono::{DateTime, Utc};
use domain::{Movie, MovieDetails, MovieMetadata, MovieReview, Review, User};
use serde::{Deserialize, Serialize};

// Request fields are all optional so that a missing field and an empty one
// produce the same "<field> is required" answer.

#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateMovieRequest {
    pub title: Option<String>,
    pub poster_url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateReviewRequest {
    pub user_id: Option<i32>,
    pub movie_id: Option<i32>,
    pub comment: Option<String>,
    pub rating: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Account as returned by the API. The password is echoed back as stored.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            password: user.password,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserInfo,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MovieInfo {
    pub id: i32,
    pub title: String,
    pub poster_url: String,
    pub description: String,
}

impl From<Movie> for MovieInfo {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            poster_url: movie.poster_url,
            description: movie.description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewInfo {
    pub id: i32,
    pub user_id: i32,
    pub movie_id: i32,
    pub comment: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewInfo {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            user_id: review.user_id,
            movie_id: review.movie_id,
            comment: review.comment,
            rating: review.rating,
            created_at: review.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MovieMetadataInfo {
    pub id: i32,
    pub title: Option<String>,
    pub poster_url: Option<String>,
    pub description: Option<String>,
    pub year: String,
}

impl From<MovieMetadata> for MovieMetadataInfo {
    fn from(movie: MovieMetadata) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            poster_url: movie.poster_url,
            description: movie.description,
            year: movie.year,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MovieReviewInfo {
    pub id: i32,
    pub username: String,
    pub comment: String,
    pub rating: i32,
}

impl From<MovieReview> for MovieReviewInfo {
    fn from(review: MovieReview) -> Self {
        Self {
            id: review.id,
            username: review.username,
            comment: review.comment,
            rating: review.rating,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MovieDetailsResponse {
    pub movie: MovieMetadataInfo,
    pub reviews: Vec<MovieReviewInfo>,
}

impl From<MovieDetails> for MovieDetailsResponse {
    fn from(details: MovieDetails) -> Self {
        Self {
            movie: details.movie.into(),
            reviews: details.reviews.into_iter().map(Into::into).collect(),
        }
    }
}
