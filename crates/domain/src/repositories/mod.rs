pub mod movie_repository;
pub mod post_repository;
pub mod review_repository;
pub mod user_repository;

pub use movie_repository::MovieRepository;
pub use post_repository::PostRepository;
pub use review_repository::ReviewRepository;
pub use user_repository::UserRepository;
