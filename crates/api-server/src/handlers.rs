use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use domain::{NewMovie, NewReview, NewUser, UserUpdate};
use tracing::info;

use crate::dto::*;
use crate::error::ApiResult;
use crate::AppState;

pub async fn index() -> &'static str {
    "Welcome to the Movie Review API!"
}

pub async fn status() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Server is up".to_string(),
    })
}

// User handlers
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserInfo>)> {
    let Json(payload) = payload?;
    let user = NewUser::new(
        payload.username.unwrap_or_default(),
        payload.email.unwrap_or_default(),
        payload.password.unwrap_or_default(),
    );

    let created = state.app.user_service.create_user(user).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserInfo>>> {
    let users = state.app.user_service.get_all_users().await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<UserInfo>> {
    let Path(id) = id?;
    let user = state.app.user_service.get_user_by_id(id).await?;
    Ok(Json(user.into()))
}

pub async fn update_user(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> ApiResult<Json<UserInfo>> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let update = UserUpdate {
        username: payload.username,
        email: payload.email,
        password: payload.password,
    };

    let user = state.app.user_service.update_user(id, update).await?;
    Ok(Json(user.into()))
}

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(payload) = payload?;
    let email = payload.email.unwrap_or_default();
    let password = payload.password.unwrap_or_default();

    let user = state.app.user_service.login(&email, &password).await?;
    Ok(Json(LoginResponse {
        message: format!("Welcome back, {}!", user.username),
        user: user.into(),
    }))
}

pub async fn list_user_reviews(
    State(state): State<AppState>,
    user_id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<Vec<ReviewInfo>>> {
    let Path(user_id) = user_id?;
    let reviews = state.app.review_service.get_reviews_for_user(user_id).await?;
    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}

// Movie handlers
pub async fn create_movie(
    State(state): State<AppState>,
    payload: Result<Json<CreateMovieRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MovieInfo>)> {
    let Json(payload) = payload?;
    let movie = NewMovie::new(
        payload.title.unwrap_or_default(),
        payload.poster_url.unwrap_or_default(),
        payload.description.unwrap_or_default(),
    );

    let created = state.app.movie_service.create_movie(movie).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn list_movies(State(state): State<AppState>) -> ApiResult<Json<Vec<MovieInfo>>> {
    let movies = state.app.movie_service.get_all_movies().await?;
    Ok(Json(movies.into_iter().map(Into::into).collect()))
}

pub async fn delete_movie(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<MovieInfo>> {
    let Path(id) = id?;
    let movie = state.app.movie_service.delete_movie(id).await?;
    Ok(Json(movie.into()))
}

/// Provider metadata for `id` plus every local review of it.
pub async fn get_movie_details(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<MovieDetailsResponse>> {
    let Path(id) = id?;
    let details = state
        .app
        .movie_details_service
        .get_movie_details(id)
        .await?;
    info!(
        "🎬 Served details for movie {} with {} reviews",
        id,
        details.reviews.len()
    );
    Ok(Json(details.into()))
}

// Review handlers
pub async fn create_review(
    State(state): State<AppState>,
    payload: Result<Json<CreateReviewRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ReviewInfo>)> {
    let Json(payload) = payload?;
    let review = NewReview::new(
        payload.user_id.unwrap_or_default(),
        payload.movie_id.unwrap_or_default(),
        payload.comment.unwrap_or_default(),
        payload.rating.unwrap_or_default(),
    );

    let created = state.app.review_service.create_review(review).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}
