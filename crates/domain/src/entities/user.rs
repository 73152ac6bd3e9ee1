use serde::{Deserialize, Serialize};

use super::require_text;
use crate::DomainError;

/// Core User entity - a persisted account.
///
/// The password is kept exactly as submitted. Callers that need hashing must
/// change the repository contract and the login lookup together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Signup payload before persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn new(username: String, email: String, password: String) -> Self {
        Self {
            username,
            email,
            password,
        }
    }

    /// Checks fields in signup order so the first missing one is reported.
    pub fn validate(&self) -> Result<(), DomainError> {
        require_text(&self.username, "username")?;
        require_text(&self.email, "email")?;
        require_text(&self.password, "password")
    }
}

/// Partial profile update. Only fields that are `Some` are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserUpdate {
    pub fn apply_to(self, user: &mut User) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(password) = self.password {
            user.password = password;
        }
    }
}
