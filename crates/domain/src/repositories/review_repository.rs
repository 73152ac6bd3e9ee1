use crate::entities::{NewReview, Review};
use crate::errors::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Review>, DomainError>;
    async fn save(&self, review: &NewReview) -> Result<Review, DomainError>;
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Review>, DomainError>;
    /// Reviews for a movie paired with the author's username, `None` when the
    /// referenced user row is gone.
    async fn find_by_movie_with_authors(
        &self,
        movie_id: i32,
    ) -> Result<Vec<(Review, Option<String>)>, DomainError>;
}
