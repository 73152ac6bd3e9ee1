use async_trait::async_trait;
use domain::{DomainError, MovieMetadata, MovieMetadataProvider};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

/// Connection settings for The Movie Database API.
#[derive(Debug, Clone)]
pub struct TmdbSettings {
    pub api_url: String,
    pub api_key: Option<String>,
    pub image_base_url: String,
    pub language: String,
    pub timeout: Duration,
}

/// Subset of TMDB's `/movie/{id}` payload that the service exposes.
#[derive(Debug, Deserialize)]
struct TmdbMovie {
    title: Option<String>,
    poster_path: Option<String>,
    overview: Option<String>,
    release_date: Option<String>,
}

impl TmdbMovie {
    fn into_metadata(self, movie_id: i32, image_base_url: &str) -> MovieMetadata {
        MovieMetadata {
            id: movie_id,
            title: self.title,
            poster_url: self
                .poster_path
                .map(|path| format!("{}{}", image_base_url, path)),
            description: self.overview,
            year: self
                .release_date
                .map(|date| date.chars().take(4).collect())
                .unwrap_or_default(),
        }
    }
}

/// HTTP adapter for the metadata provider port.
pub struct TmdbClient {
    client: reqwest::Client,
    settings: TmdbSettings,
}

impl TmdbClient {
    pub fn new(settings: TmdbSettings) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| DomainError::MetadataError(e.to_string()))?;

        info!("🎭 TMDB client targeting {}", settings.api_url);
        Ok(Self { client, settings })
    }

    fn movie_url(&self, movie_id: i32) -> String {
        format!(
            "{}/movie/{}",
            self.settings.api_url.trim_end_matches('/'),
            movie_id
        )
    }
}

#[async_trait]
impl MovieMetadataProvider for TmdbClient {
    async fn fetch_movie(&self, movie_id: i32) -> Result<Option<MovieMetadata>, DomainError> {
        let mut request = self
            .client
            .get(self.movie_url(movie_id))
            .query(&[("language", self.settings.language.as_str())]);
        if let Some(api_key) = &self.settings.api_key {
            request = request.query(&[("api_key", api_key.as_str())]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::MetadataError(e.to_string()))?;

        // Any non-success answer, including auth failures, reads as "no such movie".
        if !response.status().is_success() {
            debug!("TMDB returned {} for movie {}", response.status(), movie_id);
            return Ok(None);
        }

        let movie: TmdbMovie = response
            .json()
            .await
            .map_err(|e| DomainError::MetadataError(e.to_string()))?;

        Ok(Some(
            movie.into_metadata(movie_id, &self.settings.image_base_url),
        ))
    }
}
