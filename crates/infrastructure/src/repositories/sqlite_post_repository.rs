use crate::database::{posts, with_connection, SqlitePool};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use domain::{DomainError, NewPost, Post, PostRepository};

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = posts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct PostModel {
    id: i32,
    title: String,
    content: String,
    user_id: i32,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = posts)]
struct NewPostModel {
    title: String,
    content: String,
    user_id: i32,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: model.id,
            title: model.title,
            content: model.content,
            user_id: model.user_id,
            created_at: model.created_at.and_utc(),
            updated_at: model.updated_at.and_utc(),
        }
    }
}

impl From<&NewPost> for NewPostModel {
    fn from(post: &NewPost) -> Self {
        let now = chrono::Utc::now().naive_utc();

        NewPostModel {
            title: post.title.clone(),
            content: post.content.clone(),
            user_id: post.user_id,
            created_at: now,
            updated_at: now,
        }
    }
}

pub struct SqlitePostRepository {
    pool: SqlitePool,
}

impl SqlitePostRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, DomainError> {
        let result = with_connection(&self.pool, move |conn| {
            posts::table
                .filter(posts::id.eq(id))
                .select(PostModel::as_select())
                .first::<PostModel>(conn)
                .optional()
        })
        .await?;

        Ok(result.map(Into::into))
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Post>, DomainError> {
        let result = with_connection(&self.pool, move |conn| {
            posts::table
                .filter(posts::user_id.eq(user_id))
                .order(posts::id.asc())
                .select(PostModel::as_select())
                .load::<PostModel>(conn)
        })
        .await?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn save(&self, post: &NewPost) -> Result<Post, DomainError> {
        post.validate()?;
        let new_post = NewPostModel::from(post);

        let result = with_connection(&self.pool, move |conn| {
            conn.transaction::<_, diesel::result::Error, _>(|conn| {
                diesel::insert_into(posts::table)
                    .values(&new_post)
                    .execute(conn)?;

                posts::table
                    .order(posts::id.desc())
                    .select(PostModel::as_select())
                    .first::<PostModel>(conn)
            })
        })
        .await?;

        Ok(result.into())
    }

    async fn update(&self, post: &Post) -> Result<Post, DomainError> {
        let post_id = post.id;
        let title = post.title.clone();
        let content = post.content.clone();
        let now = chrono::Utc::now().naive_utc();

        let result = with_connection(&self.pool, move |conn| {
            conn.transaction::<_, diesel::result::Error, _>(|conn| {
                diesel::update(posts::table.filter(posts::id.eq(post_id)))
                    .set((
                        posts::title.eq(title),
                        posts::content.eq(content),
                        posts::updated_at.eq(now),
                    ))
                    .execute(conn)?;

                posts::table
                    .filter(posts::id.eq(post_id))
                    .select(PostModel::as_select())
                    .first::<PostModel>(conn)
                    .optional()
            })
        })
        .await?;

        result
            .map(Into::into)
            .ok_or(DomainError::PostNotFound(post_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_support::{test_database, TestDatabase};
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn save_update_and_list(test_database: TestDatabase) {
        let repo = SqlitePostRepository::new(test_database.database.get_pool().clone());

        let post = repo
            .save(&NewPost::new("Watchlist".into(), "Heat, Ronin".into(), 1))
            .await
            .unwrap();
        assert_eq!(post.created_at, post.updated_at);

        let mut edited = post.clone();
        edited.content = "Heat, Ronin, Thief".into();
        let updated = repo.update(&edited).await.unwrap();

        assert_eq!(updated.content, "Heat, Ronin, Thief");
        assert_eq!(updated.created_at, post.created_at);
        assert!(updated.updated_at >= post.updated_at);
        assert_eq!(repo.find_by_user(1).await.unwrap(), vec![updated.clone()]);
        assert_eq!(repo.find_by_id(updated.id).await.unwrap(), Some(updated));
    }

    #[rstest]
    #[tokio::test]
    async fn empty_title_is_rejected(test_database: TestDatabase) {
        let repo = SqlitePostRepository::new(test_database.database.get_pool().clone());

        let err = repo
            .save(&NewPost::new("".into(), "body".into(), 1))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "title is required");
    }

    #[rstest]
    #[tokio::test]
    async fn updating_missing_post_is_not_found(test_database: TestDatabase) {
        let repo = SqlitePostRepository::new(test_database.database.get_pool().clone());
        let post = repo
            .save(&NewPost::new("Watchlist".into(), "Heat".into(), 1))
            .await
            .unwrap();

        let mut ghost = post.clone();
        ghost.id = post.id + 100;
        let err = repo.update(&ghost).await.unwrap_err();

        assert_eq!(err, DomainError::PostNotFound(post.id + 100));
        assert_eq!(repo.find_by_id(post.id).await.unwrap(), Some(post));
    }
}
