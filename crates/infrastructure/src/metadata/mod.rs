pub mod tmdb_client;

pub use tmdb_client::{TmdbClient, TmdbSettings};
