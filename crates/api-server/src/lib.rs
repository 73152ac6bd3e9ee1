use application::ReviewApp;
use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod dto;
pub mod error;
mod handlers;

pub use error::{ApiError, ApiResult};

#[derive(Clone)]
pub struct AppState {
    app: Arc<ReviewApp>,
}

/// Builds the HTTP surface over an already wired application.
pub fn router(app: Arc<ReviewApp>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/status", get(handlers::status))
        // Users
        .route("/users", get(handlers::list_users).post(handlers::create_user))
        .route("/users/:id", get(handlers::get_user).put(handlers::update_user))
        .route("/users/:id/reviews", get(handlers::list_user_reviews))
        .route("/login", post(handlers::login))
        // Movies
        .route("/movies", get(handlers::list_movies).post(handlers::create_movie))
        .route("/movies/:id", delete(handlers::delete_movie))
        .route("/api/movies/:id", get(handlers::get_movie_details))
        // Reviews
        .route("/reviews", post(handlers::create_review))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { app })
}
