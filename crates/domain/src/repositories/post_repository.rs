use crate::entities::{NewPost, Post};
use crate::errors::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, DomainError>;
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Post>, DomainError>;
    async fn save(&self, post: &NewPost) -> Result<Post, DomainError>;
    /// Replaces title and content and refreshes `updated_at`.
    async fn update(&self, post: &Post) -> Result<Post, DomainError>;
}
