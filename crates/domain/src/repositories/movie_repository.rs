use crate::entities::{Movie, NewMovie};
use crate::errors::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, DomainError>;
    async fn save(&self, movie: &NewMovie) -> Result<Movie, DomainError>;
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
    async fn find_all(&self) -> Result<Vec<Movie>, DomainError>;
}
