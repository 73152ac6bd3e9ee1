pub mod movie_metadata_provider;

pub use movie_metadata_provider::MovieMetadataProvider;
