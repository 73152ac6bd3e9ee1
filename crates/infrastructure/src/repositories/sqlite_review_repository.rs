use crate::database::{reviews, users, with_connection, SqlitePool};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use domain::{DomainError, NewReview, Review, ReviewRepository};

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = reviews)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct ReviewModel {
    id: i32,
    user_id: i32,
    movie_id: i32,
    comment: String,
    rating: i32,
    created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = reviews)]
struct NewReviewModel {
    user_id: i32,
    movie_id: i32,
    comment: String,
    rating: i32,
    created_at: NaiveDateTime,
}

impl From<ReviewModel> for Review {
    fn from(model: ReviewModel) -> Self {
        Review {
            id: model.id,
            user_id: model.user_id,
            movie_id: model.movie_id,
            comment: model.comment,
            rating: model.rating,
            created_at: model.created_at.and_utc(),
        }
    }
}

impl From<&NewReview> for NewReviewModel {
    fn from(review: &NewReview) -> Self {
        NewReviewModel {
            user_id: review.user_id,
            movie_id: review.movie_id,
            comment: review.comment.clone(),
            rating: review.rating,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

pub struct SqliteReviewRepository {
    pool: SqlitePool,
}

impl SqliteReviewRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for SqliteReviewRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Review>, DomainError> {
        let result = with_connection(&self.pool, move |conn| {
            reviews::table
                .filter(reviews::id.eq(id))
                .select(ReviewModel::as_select())
                .first::<ReviewModel>(conn)
                .optional()
        })
        .await?;

        Ok(result.map(Into::into))
    }

    async fn save(&self, review: &NewReview) -> Result<Review, DomainError> {
        let new_review = NewReviewModel::from(review);

        let result = with_connection(&self.pool, move |conn| {
            conn.transaction::<_, diesel::result::Error, _>(|conn| {
                diesel::insert_into(reviews::table)
                    .values(&new_review)
                    .execute(conn)?;

                reviews::table
                    .order(reviews::id.desc())
                    .select(ReviewModel::as_select())
                    .first::<ReviewModel>(conn)
            })
        })
        .await?;

        Ok(result.into())
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Review>, DomainError> {
        let result = with_connection(&self.pool, move |conn| {
            reviews::table
                .filter(reviews::user_id.eq(user_id))
                .order(reviews::id.asc())
                .select(ReviewModel::as_select())
                .load::<ReviewModel>(conn)
        })
        .await?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_movie_with_authors(
        &self,
        movie_id: i32,
    ) -> Result<Vec<(Review, Option<String>)>, DomainError> {
        let result = with_connection(&self.pool, move |conn| {
            reviews::table
                .left_join(users::table)
                .filter(reviews::movie_id.eq(movie_id))
                .order(reviews::id.asc())
                .select((ReviewModel::as_select(), users::username.nullable()))
                .load::<(ReviewModel, Option<String>)>(conn)
        })
        .await?;

        Ok(result
            .into_iter()
            .map(|(model, username)| (model.into(), username))
            .collect())
    }
}
