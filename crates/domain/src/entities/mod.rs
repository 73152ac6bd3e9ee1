pub mod movie;
pub mod movie_details;
pub mod post;
pub mod review;
pub mod user;

pub use movie::*;
pub use movie_details::*;
pub use post::*;
pub use review::*;
pub use user::*;

use crate::DomainError;

/// Rejects empty values with "<field> is required". Whitespace counts as a value.
pub(crate) fn require_text(value: &str, field: &str) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::required(field));
    }
    Ok(())
}
