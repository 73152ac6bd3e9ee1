use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use domain::DomainError;
use tracing::info;

pub mod schema;
pub use schema::*;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub type SqlitePool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

const BUSY_TIMEOUT_MS: u32 = 5_000;

/// Per-connection pragmas.
///
/// Foreign keys are declared in the schema but not enforced, so a review may
/// outlive (or predate) the user it points at. Bundled SQLite builds turn
/// enforcement on by default, hence the explicit setting.
#[derive(Debug)]
struct ConnectionOptions {
    busy_timeout_ms: u32,
    enforce_foreign_keys: bool,
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        let foreign_keys = if self.enforce_foreign_keys { "ON" } else { "OFF" };
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {}; PRAGMA foreign_keys = {};",
            self.busy_timeout_ms, foreign_keys
        ))
        .map_err(r2d2::Error::QueryError)
    }
}

/// Owns the connection pool. Dropping the last clone closes every connection.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub fn connect(database_path: &str, pool_size: u32) -> Result<Self, DomainError> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_path);
        let pool = r2d2::Pool::builder()
            .max_size(pool_size)
            .connection_customizer(Box::new(ConnectionOptions {
                busy_timeout_ms: BUSY_TIMEOUT_MS,
                enforce_foreign_keys: false,
            }))
            .build(manager)
            .map_err(|e| {
                DomainError::RepositoryError(format!(
                    "Failed to create SQLite connection pool: {}",
                    e
                ))
            })?;
        Ok(Database { pool })
    }

    /// Creates any missing tables. Existing tables and rows are left alone.
    pub fn run_migrations(&self) -> Result<(), DomainError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| DomainError::RepositoryError(e.to_string()))?;

        let applied = (&mut *conn)
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DomainError::RepositoryError(e.to_string()))?;

        for version in applied {
            info!("Applied migration {}", version);
        }
        Ok(())
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Runs `operation` on a pooled connection off the async runtime.
///
/// The connection goes back to the pool when the closure returns, whether it
/// succeeded or not.
pub(crate) async fn with_connection<T, F>(pool: &SqlitePool, operation: F) -> Result<T, DomainError>
where
    F: FnOnce(&mut SqliteConnection) -> QueryResult<T> + Send + 'static,
    T: Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut conn = pool
            .get()
            .map_err(|e| DomainError::RepositoryError(e.to_string()))?;
        operation(&mut *conn).map_err(map_diesel_error)
    })
    .await
    .map_err(|e| DomainError::RepositoryError(e.to_string()))?
}

pub(crate) fn map_diesel_error(error: DieselError) -> DomainError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            DomainError::Conflict(info.message().to_string())
        }
        other => DomainError::RepositoryError(other.to_string()),
    }
}
