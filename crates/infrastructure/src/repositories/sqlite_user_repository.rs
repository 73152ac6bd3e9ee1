use crate::database::{users, with_connection, SqlitePool};
use async_trait::async_trait;
use diesel::prelude::*;
use domain::{DomainError, NewUser, User, UserRepository};

// Database model - separate from domain entity
#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct UserModel {
    id: i32,
    username: String,
    email: String,
    password: String,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
struct NewUserModel {
    username: String,
    email: String,
    password: String,
}

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            username: model.username,
            email: model.email,
            password: model.password,
        }
    }
}

impl From<&NewUser> for NewUserModel {
    fn from(user: &NewUser) -> Self {
        NewUserModel {
            username: user.username.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
        }
    }
}

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError> {
        let result = with_connection(&self.pool, move |conn| {
            users::table
                .filter(users::id.eq(id))
                .select(UserModel::as_select())
                .first::<UserModel>(conn)
                .optional()
        })
        .await?;

        Ok(result.map(Into::into))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let username = username.to_string();
        let result = with_connection(&self.pool, move |conn| {
            users::table
                .filter(users::username.eq(username))
                .select(UserModel::as_select())
                .first::<UserModel>(conn)
                .optional()
        })
        .await?;

        Ok(result.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let email = email.to_string();
        let result = with_connection(&self.pool, move |conn| {
            users::table
                .filter(users::email.eq(email))
                .select(UserModel::as_select())
                .first::<UserModel>(conn)
                .optional()
        })
        .await?;

        Ok(result.map(Into::into))
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        let email = email.to_string();
        let password = password.to_string();
        let result = with_connection(&self.pool, move |conn| {
            users::table
                .filter(users::email.eq(email))
                .filter(users::password.eq(password))
                .select(UserModel::as_select())
                .first::<UserModel>(conn)
                .optional()
        })
        .await?;

        Ok(result.map(Into::into))
    }

    async fn save(&self, user: &NewUser) -> Result<User, DomainError> {
        let new_user = NewUserModel::from(user);

        let result = with_connection(&self.pool, move |conn| {
            conn.transaction::<_, diesel::result::Error, _>(|conn| {
                diesel::insert_into(users::table)
                    .values(&new_user)
                    .execute(conn)?;

                // Get the last inserted row
                users::table
                    .order(users::id.desc())
                    .select(UserModel::as_select())
                    .first::<UserModel>(conn)
            })
        })
        .await?;

        Ok(result.into())
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let user_id = user.id;
        let username = user.username.clone();
        let email = user.email.clone();
        let password = user.password.clone();

        let result = with_connection(&self.pool, move |conn| {
            conn.transaction::<_, diesel::result::Error, _>(|conn| {
                diesel::update(users::table.filter(users::id.eq(user_id)))
                    .set((
                        users::username.eq(username),
                        users::email.eq(email),
                        users::password.eq(password),
                    ))
                    .execute(conn)?;

                // Fetch the updated user
                users::table
                    .filter(users::id.eq(user_id))
                    .select(UserModel::as_select())
                    .first::<UserModel>(conn)
                    .optional()
            })
        })
        .await?;

        result.map(Into::into).ok_or(DomainError::UserNotFound(user_id))
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let result = with_connection(&self.pool, |conn| {
            users::table
                .order(users::id.asc())
                .select(UserModel::as_select())
                .load::<UserModel>(conn)
        })
        .await?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
