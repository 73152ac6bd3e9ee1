use crate::entities::{NewUser, User, UserUpdate};
use crate::errors::DomainError;
use crate::repositories::UserRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// User Service - signup, profile and login rules
pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Create a new user with business validation
    pub async fn create_user(&self, user: NewUser) -> Result<User, DomainError> {
        user.validate()?;

        if self
            .user_repository
            .find_by_username(&user.username)
            .await?
            .is_some()
        {
            debug!("Rejected signup, username taken: {}", user.username);
            return Err(DomainError::UsernameAlreadyExists(user.username));
        }

        if self.user_repository.find_by_email(&user.email).await?.is_some() {
            debug!("Rejected signup, email taken: {}", user.email);
            return Err(DomainError::EmailAlreadyExists(user.email));
        }

        let created = self.user_repository.save(&user).await?;
        info!("Created user {} ({})", created.id, created.username);
        Ok(created)
    }

    pub async fn get_user_by_id(&self, id: i32) -> Result<User, DomainError> {
        match self.user_repository.find_by_id(id).await? {
            Some(user) => Ok(user),
            None => Err(DomainError::UserNotFound(id)),
        }
    }

    /// Apply a partial update. Present fields are written as given, empty
    /// strings included. Changed usernames and emails are checked against
    /// other accounts before writing.
    pub async fn update_user(&self, id: i32, update: UserUpdate) -> Result<User, DomainError> {
        let mut user = self.get_user_by_id(id).await?;
        update.apply_to(&mut user);

        if let Some(existing) = self.user_repository.find_by_username(&user.username).await? {
            if existing.id != id {
                return Err(DomainError::UsernameAlreadyExists(user.username));
            }
        }

        if let Some(existing) = self.user_repository.find_by_email(&user.email).await? {
            if existing.id != id {
                return Err(DomainError::EmailAlreadyExists(user.email));
            }
        }

        let updated = self.user_repository.update(&user).await?;
        info!("Updated user {}", updated.id);
        Ok(updated)
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>, DomainError> {
        self.user_repository.find_all().await
    }

    /// Plain-text credential match.
    // TODO: switch to a password hash once signup and login can migrate existing rows together.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, DomainError> {
        if email.is_empty() || password.is_empty() {
            return Err(DomainError::ValidationError(
                "Email and password are required".to_string(),
            ));
        }

        match self
            .user_repository
            .find_by_credentials(email, password)
            .await?
        {
            Some(user) => {
                info!("User {} logged in", user.id);
                Ok(user)
            }
            None => {
                debug!("Failed login for {}", email);
                Err(DomainError::InvalidCredentials)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::InMemoryStore;

    fn service() -> (UserService, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::default());
        (UserService::new(store.clone()), store)
    }

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser::new(username.to_string(), email.to_string(), "secret".to_string())
    }

    #[tokio::test]
    async fn created_user_echoes_input() {
        let (service, _) = service();

        let user = service.create_user(new_user("ana", "a@x.com")).await.unwrap();

        assert_eq!(user.username, "ana");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.password, "secret");
        assert_eq!(service.get_user_by_id(user.id).await.unwrap(), user);
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected_without_insert() {
        let (service, store) = service();
        service.create_user(new_user("ana", "a@x.com")).await.unwrap();

        let err = service
            .create_user(new_user("ana", "other@x.com"))
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::UsernameAlreadyExists("ana".to_string()));
        assert_eq!(err.to_string(), "username already exists");
        assert_eq!(store.user_count(), 1);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let (service, _) = service();
        service.create_user(new_user("ana", "a@x.com")).await.unwrap();

        let err = service.create_user(new_user("bo", "a@x.com")).await.unwrap_err();

        assert_eq!(err.to_string(), "email already exists");
    }

    #[tokio::test]
    async fn empty_password_fails_validation() {
        let (service, store) = service();

        let err = service
            .create_user(NewUser::new("ana".into(), "a@x.com".into(), "".into()))
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::ValidationError("password is required".into()));
        assert_eq!(store.user_count(), 0);
    }

    #[tokio::test]
    async fn update_applies_partial_fields() {
        let (service, _) = service();
        let user = service.create_user(new_user("ana", "a@x.com")).await.unwrap();

        let updated = service
            .update_user(
                user.id,
                UserUpdate {
                    username: Some("ana2".into()),
                    ..UserUpdate::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.username, "ana2");
        assert_eq!(updated.email, "a@x.com");
    }

    #[tokio::test]
    async fn update_writes_empty_fields_through() {
        let (service, _) = service();
        let user = service.create_user(new_user("ana", "a@x.com")).await.unwrap();

        let updated = service
            .update_user(
                user.id,
                UserUpdate {
                    username: Some(String::new()),
                    ..UserUpdate::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.username, "");
        assert_eq!(updated.email, "a@x.com");
        assert_eq!(service.get_user_by_id(user.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_rejects_username_of_another_user() {
        let (service, _) = service();
        service.create_user(new_user("ana", "a@x.com")).await.unwrap();
        let bo = service.create_user(new_user("bo", "b@x.com")).await.unwrap();

        let err = service
            .update_user(
                bo.id,
                UserUpdate {
                    username: Some("ana".into()),
                    ..UserUpdate::default()
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::UsernameAlreadyExists("ana".into()));
    }

    #[tokio::test]
    async fn update_of_missing_user_is_not_found() {
        let (service, _) = service();

        let err = service
            .update_user(42, UserUpdate::default())
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::UserNotFound(42));
    }

    #[tokio::test]
    async fn login_matches_email_and_password_exactly() {
        let (service, _) = service();
        let user = service.create_user(new_user("ana", "a@x.com")).await.unwrap();

        assert_eq!(service.login("a@x.com", "secret").await.unwrap(), user);
        assert_eq!(
            service.login("a@x.com", "Secret").await.unwrap_err(),
            DomainError::InvalidCredentials
        );
        assert_eq!(
            service.login("", "secret").await.unwrap_err(),
            DomainError::ValidationError("Email and password are required".into())
        );
        assert_eq!(
            service.login(" ", "secret").await.unwrap_err(),
            DomainError::InvalidCredentials
        );
    }
}
