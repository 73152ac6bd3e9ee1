pub mod database;
pub mod metadata;
pub mod repositories;

pub use database::{Database, SqlitePool};
pub use metadata::{TmdbClient, TmdbSettings};
pub use repositories::*;
