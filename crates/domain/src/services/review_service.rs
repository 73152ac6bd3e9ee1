use crate::entities::{NewReview, Review};
use crate::errors::DomainError;
use crate::repositories::ReviewRepository;
use std::sync::Arc;
use tracing::info;

/// Reviews are write-once: there is no update or delete path.
pub struct ReviewService {
    review_repository: Arc<dyn ReviewRepository>,
}

impl ReviewService {
    pub fn new(review_repository: Arc<dyn ReviewRepository>) -> Self {
        Self { review_repository }
    }

    /// The referenced user and movie are not looked up before insert.
    pub async fn create_review(&self, review: NewReview) -> Result<Review, DomainError> {
        review.validate()?;
        let created = self.review_repository.save(&review).await?;
        info!(
            "User {} reviewed movie {} (review {})",
            created.user_id, created.movie_id, created.id
        );
        Ok(created)
    }

    pub async fn get_reviews_for_user(&self, user_id: i32) -> Result<Vec<Review>, DomainError> {
        self.review_repository.find_by_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::InMemoryStore;

    #[tokio::test]
    async fn created_review_gets_timestamp_and_is_listed_for_user() {
        let service = ReviewService::new(Arc::new(InMemoryStore::default()));

        let review = service
            .create_review(NewReview::new(1, 550, "Great".into(), 5))
            .await
            .unwrap();

        assert_eq!(review.comment, "Great");
        assert_eq!(service.get_reviews_for_user(1).await.unwrap(), vec![review]);
        assert!(service.get_reviews_for_user(2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rating_of_zero_is_treated_as_missing() {
        let store = Arc::new(InMemoryStore::default());
        let service = ReviewService::new(store.clone());

        let err = service
            .create_review(NewReview::new(1, 550, "Meh".into(), 0))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "rating is required");
        assert!(service.get_reviews_for_user(1).await.unwrap().is_empty());
    }
}
