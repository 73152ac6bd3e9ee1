use domain::*;
use infrastructure::*;
use std::sync::Arc;
use tracing::info;

pub use infrastructure::{Database, TmdbClient, TmdbSettings};

/// Opens the pool and creates any missing tables.
pub fn init_database(database_path: &str, pool_size: u32) -> Result<Database, DomainError> {
    let database = Database::connect(database_path, pool_size)?;
    database.run_migrations()?;
    info!("💾 Database ready at {}", database_path);
    Ok(database)
}

/// Review Application - wires adapters into the domain services
pub struct ReviewApp {
    pub user_service: UserService,
    pub movie_service: MovieService,
    pub review_service: ReviewService,
    pub movie_details_service: MovieDetailsService,
}

impl ReviewApp {
    pub fn new(
        database_path: &str,
        pool_size: u32,
        metadata_provider: Arc<dyn MovieMetadataProvider>,
    ) -> Result<Self, DomainError> {
        let database = init_database(database_path, pool_size)?;
        Ok(Self::with_database(&database, metadata_provider))
    }

    pub fn with_database(
        database: &Database,
        metadata_provider: Arc<dyn MovieMetadataProvider>,
    ) -> Self {
        let pool = database.get_pool().clone();

        // Create repository implementations
        let user_repository: Arc<dyn UserRepository> =
            Arc::new(SqliteUserRepository::new(pool.clone()));
        let movie_repository: Arc<dyn MovieRepository> =
            Arc::new(SqliteMovieRepository::new(pool.clone()));
        let review_repository: Arc<dyn ReviewRepository> =
            Arc::new(SqliteReviewRepository::new(pool));

        // Domain services
        let user_service = UserService::new(user_repository);
        let movie_service = MovieService::new(movie_repository);
        let review_service = ReviewService::new(review_repository.clone());
        let movie_details_service = MovieDetailsService::new(metadata_provider, review_repository);

        Self {
            user_service,
            movie_service,
            review_service,
            movie_details_service,
        }
    }
}
