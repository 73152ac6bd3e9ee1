use crate::entities::{Movie, NewMovie};
use crate::errors::DomainError;
use crate::repositories::MovieRepository;
use std::sync::Arc;
use tracing::info;

pub struct MovieService {
    movie_repository: Arc<dyn MovieRepository>,
}

impl MovieService {
    pub fn new(movie_repository: Arc<dyn MovieRepository>) -> Self {
        Self { movie_repository }
    }

    /// Title uniqueness is left to the store, which reports a conflict.
    pub async fn create_movie(&self, movie: NewMovie) -> Result<Movie, DomainError> {
        movie.validate()?;
        let created = self.movie_repository.save(&movie).await?;
        info!("Created movie {} ({})", created.id, created.title);
        Ok(created)
    }

    pub async fn get_all_movies(&self) -> Result<Vec<Movie>, DomainError> {
        self.movie_repository.find_all().await
    }

    /// Removes the movie and returns the row as it was before deletion.
    pub async fn delete_movie(&self, id: i32) -> Result<Movie, DomainError> {
        let movie = self
            .movie_repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::MovieNotFound(id))?;

        self.movie_repository.delete(id).await?;
        info!("Deleted movie {} ({})", movie.id, movie.title);
        Ok(movie)
    }
}
