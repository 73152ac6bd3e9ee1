use thiserror::Error;

/// Errors raised by services and their ports.
///
/// The `Display` text of each variant is the message handed back to API
/// callers, so keep it short and user facing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{0}")]
    ValidationError(String),

    #[error("username already exists")]
    UsernameAlreadyExists(String),

    #[error("email already exists")]
    EmailAlreadyExists(String),

    /// A uniqueness constraint rejected a write that slipped past (or never
    /// had) a pre-check. Carries the raw store message.
    #[error("{0}")]
    Conflict(String),

    #[error("User not found")]
    UserNotFound(i32),

    #[error("Movie not found")]
    MovieNotFound(i32),

    #[error("Post not found")]
    PostNotFound(i32),

    #[error("Movie not found on TMDb")]
    MetadataNotFound(i32),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Metadata provider error: {0}")]
    MetadataError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl DomainError {
    pub fn required(field: &str) -> Self {
        DomainError::ValidationError(format!("{} is required", field))
    }
}
