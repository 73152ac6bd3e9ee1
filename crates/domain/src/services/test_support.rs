//! In-memory port implementations for service tests.

use crate::entities::*;
use crate::errors::DomainError;
use crate::providers::MovieMetadataProvider;
use crate::repositories::{MovieRepository, ReviewRepository, UserRepository};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    movies: Vec<Movie>,
    reviews: Vec<Review>,
    next_id: i32,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

/// Backs the user, movie and review ports with plain vectors.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    review_lookups: AtomicUsize,
}

impl InMemoryStore {
    pub fn user_count(&self) -> usize {
        self.tables.lock().unwrap().users.len()
    }

    /// Number of review queries issued against this store.
    pub fn review_lookups(&self) -> usize {
        self.review_lookups.load(Ordering::SeqCst)
    }

    pub async fn insert_review(&self, review: NewReview) -> Review {
        ReviewRepository::save(self, &review).await.unwrap()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .cloned())
    }

    async fn save(&self, user: &NewUser) -> Result<User, DomainError> {
        let mut tables = self.tables.lock().unwrap();
        let user = User {
            id: tables.next_id(),
            username: user.username.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let mut tables = self.tables.lock().unwrap();
        let slot = tables
            .users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(DomainError::UserNotFound(user.id))?;
        *slot = user.clone();
        Ok(user.clone())
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.tables.lock().unwrap().users.clone())
    }
}

#[async_trait]
impl MovieRepository for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.movies.iter().find(|m| m.id == id).cloned())
    }

    async fn save(&self, movie: &NewMovie) -> Result<Movie, DomainError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.movies.iter().any(|m| m.title == movie.title) {
            return Err(DomainError::Conflict(
                "UNIQUE constraint failed: movies.title".into(),
            ));
        }
        let movie = Movie {
            id: tables.next_id(),
            title: movie.title.clone(),
            poster_url: movie.poster_url.clone(),
            description: movie.description.clone(),
        };
        tables.movies.push(movie.clone());
        Ok(movie)
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        self.tables.lock().unwrap().movies.retain(|m| m.id != id);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Movie>, DomainError> {
        Ok(self.tables.lock().unwrap().movies.clone())
    }
}

#[async_trait]
impl ReviewRepository for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Review>, DomainError> {
        self.review_lookups.fetch_add(1, Ordering::SeqCst);
        let tables = self.tables.lock().unwrap();
        Ok(tables.reviews.iter().find(|r| r.id == id).cloned())
    }

    async fn save(&self, review: &NewReview) -> Result<Review, DomainError> {
        let mut tables = self.tables.lock().unwrap();
        let review = Review {
            id: tables.next_id(),
            user_id: review.user_id,
            movie_id: review.movie_id,
            comment: review.comment.clone(),
            rating: review.rating,
            created_at: Utc::now(),
        };
        tables.reviews.push(review.clone());
        Ok(review)
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Review>, DomainError> {
        self.review_lookups.fetch_add(1, Ordering::SeqCst);
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .reviews
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_movie_with_authors(
        &self,
        movie_id: i32,
    ) -> Result<Vec<(Review, Option<String>)>, DomainError> {
        self.review_lookups.fetch_add(1, Ordering::SeqCst);
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .reviews
            .iter()
            .filter(|r| r.movie_id == movie_id)
            .map(|r| {
                let author = tables
                    .users
                    .iter()
                    .find(|u| u.id == r.user_id)
                    .map(|u| u.username.clone());
                (r.clone(), author)
            })
            .collect())
    }
}

/// Metadata provider answering from a fixed map, or failing every call.
#[derive(Default)]
pub struct FakeMetadataProvider {
    movies: HashMap<i32, MovieMetadata>,
    failure: Option<String>,
    calls: AtomicUsize,
}

impl FakeMetadataProvider {
    pub fn with_movie(movie: MovieMetadata) -> Self {
        let mut movies = HashMap::new();
        movies.insert(movie.id, movie);
        Self {
            movies,
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MovieMetadataProvider for FakeMetadataProvider {
    async fn fetch_movie(&self, movie_id: i32) -> Result<Option<MovieMetadata>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.failure {
            return Err(DomainError::MetadataError(message.clone()));
        }
        Ok(self.movies.get(&movie_id).cloned())
    }
}
