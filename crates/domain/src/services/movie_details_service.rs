use crate::entities::{MovieDetails, MovieReview, UNKNOWN_AUTHOR};
use crate::errors::DomainError;
use crate::providers::MovieMetadataProvider;
use crate::repositories::ReviewRepository;
use std::sync::Arc;
use tracing::debug;

/// Joins provider metadata with locally stored reviews.
///
/// The provider is consulted first and is a hard dependency: if it fails or
/// does not know the movie, no review lookup happens. A review whose author
/// row is missing is still returned, attributed to [`UNKNOWN_AUTHOR`].
pub struct MovieDetailsService {
    metadata_provider: Arc<dyn MovieMetadataProvider>,
    review_repository: Arc<dyn ReviewRepository>,
}

impl MovieDetailsService {
    pub fn new(
        metadata_provider: Arc<dyn MovieMetadataProvider>,
        review_repository: Arc<dyn ReviewRepository>,
    ) -> Self {
        Self {
            metadata_provider,
            review_repository,
        }
    }

    pub async fn get_movie_details(&self, movie_id: i32) -> Result<MovieDetails, DomainError> {
        let movie = self
            .metadata_provider
            .fetch_movie(movie_id)
            .await?
            .ok_or(DomainError::MetadataNotFound(movie_id))?;

        let reviews = self
            .review_repository
            .find_by_movie_with_authors(movie_id)
            .await?
            .into_iter()
            .map(|(review, username)| MovieReview {
                id: review.id,
                username: username.unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
                comment: review.comment,
                rating: review.rating,
            })
            .collect::<Vec<_>>();

        debug!("Movie {} has {} local reviews", movie_id, reviews.len());
        Ok(MovieDetails { movie, reviews })
    }
}
