pub mod movie_details_service;
pub mod movie_service;
pub mod review_service;
pub mod user_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use movie_details_service::MovieDetailsService;
pub use movie_service::MovieService;
pub use review_service::ReviewService;
pub use user_service::UserService;
