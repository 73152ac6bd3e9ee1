use crate::database::{movies, with_connection, SqlitePool};
use async_trait::async_trait;
use diesel::prelude::*;
use domain::{DomainError, Movie, MovieRepository, NewMovie};

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = movies)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct MovieModel {
    id: i32,
    title: String,
    poster_url: String,
    description: String,
}

#[derive(Insertable)]
#[diesel(table_name = movies)]
struct NewMovieModel {
    title: String,
    poster_url: String,
    description: String,
}

impl From<MovieModel> for Movie {
    fn from(model: MovieModel) -> Self {
        Movie {
            id: model.id,
            title: model.title,
            poster_url: model.poster_url,
            description: model.description,
        }
    }
}

impl From<&NewMovie> for NewMovieModel {
    fn from(movie: &NewMovie) -> Self {
        NewMovieModel {
            title: movie.title.clone(),
            poster_url: movie.poster_url.clone(),
            description: movie.description.clone(),
        }
    }
}

pub struct SqliteMovieRepository {
    pool: SqlitePool,
}

impl SqliteMovieRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieRepository for SqliteMovieRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, DomainError> {
        let result = with_connection(&self.pool, move |conn| {
            movies::table
                .filter(movies::id.eq(id))
                .select(MovieModel::as_select())
                .first::<MovieModel>(conn)
                .optional()
        })
        .await?;

        Ok(result.map(Into::into))
    }

    async fn save(&self, movie: &NewMovie) -> Result<Movie, DomainError> {
        let new_movie = NewMovieModel::from(movie);

        let result = with_connection(&self.pool, move |conn| {
            conn.transaction::<_, diesel::result::Error, _>(|conn| {
                diesel::insert_into(movies::table)
                    .values(&new_movie)
                    .execute(conn)?;

                movies::table
                    .order(movies::id.desc())
                    .select(MovieModel::as_select())
                    .first::<MovieModel>(conn)
            })
        })
        .await?;

        Ok(result.into())
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let deleted = with_connection(&self.pool, move |conn| {
            diesel::delete(movies::table.filter(movies::id.eq(id))).execute(conn)
        })
        .await?;

        if deleted == 0 {
            return Err(DomainError::MovieNotFound(id));
        }
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Movie>, DomainError> {
        let result = with_connection(&self.pool, |conn| {
            movies::table
                .order(movies::id.asc())
                .select(MovieModel::as_select())
                .load::<MovieModel>(conn)
        })
        .await?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
