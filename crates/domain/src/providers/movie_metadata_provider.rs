use crate::entities::MovieMetadata;
use crate::errors::DomainError;
use async_trait::async_trait;

/// External source of movie facts, keyed by the provider's own movie id.
#[async_trait]
pub trait MovieMetadataProvider: Send + Sync {
    /// `Ok(None)` means the provider does not know the movie. Transport and
    /// decoding failures are errors.
    async fn fetch_movie(&self, movie_id: i32) -> Result<Option<MovieMetadata>, DomainError>;
}
