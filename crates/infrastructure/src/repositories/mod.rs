pub mod sqlite_movie_repository;
pub mod sqlite_post_repository;
pub mod sqlite_review_repository;
pub mod sqlite_user_repository;

pub use sqlite_movie_repository::SqliteMovieRepository;
pub use sqlite_post_repository::SqlitePostRepository;
pub use sqlite_review_repository::SqliteReviewRepository;
pub use sqlite_user_repository::SqliteUserRepository;
