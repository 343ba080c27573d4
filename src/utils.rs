use std::{error::Error, fmt::Debug, time::Duration};

use diesel::{r2d2::{ConnectionManager, CustomizeConnection}, PgConnection, RunQueryDsl};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use r2d2::{Pool, PooledConnection};
use thiserror::Error;
use uuid::Uuid;

use crate::{configuration::DatabaseSettings, telemetry::spawn_blocking_with_tracing};

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<PgConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

pub fn error_fmt_chain(f: &mut std::fmt::Formatter<'_>, source: &Option<impl Error>) -> std::fmt::Result{
    if let Some(error) = source{
        write!(f, "\n\tCaused By:\n\t")?;
        write!(f, "{:?}", &error)?;
        error_fmt_chain(f, &error.source())
    } else {
        Ok(())
    }
}

// Binary representation error tolerated before flooring, so 1.15 stays 1.15
const FLOOR_EPSILON: f64 = 1e-9;

// Floors (never rounds) `num` to `precision` decimal places: 9.995 -> 9.99
pub fn to_fixed(num: f64, precision: i32) -> f64 {
    let factor = 10_f64.powi(precision);
    ((num * factor) + FLOOR_EPSILON).floor() / factor
}

// Public identifier derived from the internal storage id
pub fn public_id(id: &Uuid) -> String {
    id.simple().to_string()
}

#[derive(Error)]
pub enum DbError{
    #[error("Failed due to threadpool error")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("Failed to get connection from pool")]
    DbPoolError(#[from] r2d2::Error),
    #[error("Database operation timed out after {0:?}")]
    Timeout(Duration),
    #[error("Failed to run query")]
    QueryError(#[from] diesel::result::Error),
}

impl Debug for DbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

pub fn statement_timeout_sql(timeout: Duration) -> String {
    format!("SET statement_timeout = {}", timeout.as_millis())
}

// Makes Postgres abort any statement running past the request deadline, so
// work abandoned by `Database::run` does not go on to commit
#[derive(Debug, Clone, Copy)]
pub struct StatementTimeout(pub Duration);

impl CustomizeConnection<PgConnection, diesel::r2d2::Error> for StatementTimeout {
    fn on_acquire(&self, conn: &mut PgConnection) -> Result<(), diesel::r2d2::Error> {
        diesel::sql_query(statement_timeout_sql(self.0))
            .execute(conn)
            .map(|_| ())
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

// Long-lived handle shared by every request; each call is bounded by `timeout`
#[derive(Clone)]
pub struct Database{
    pool: DbPool,
    timeout: Duration
}

impl Database {
    pub fn new(pool: DbPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    pub fn connect(settings: &DatabaseSettings) -> Result<Self, r2d2::Error> {
        let pool = Pool::builder()
            .max_size(settings.max_connections)
            .connection_timeout(settings.timeout())
            .connection_customizer(Box::new(StatementTimeout(settings.timeout())))
            .build(ConnectionManager::<PgConnection>::new(&settings.url))?;

        Ok(Self::new(pool, settings.timeout()))
    }

    // Builds the pool without opening a connection up front
    pub fn connect_lazy(settings: &DatabaseSettings) -> Self {
        let pool = Pool::builder()
            .max_size(settings.max_connections)
            .connection_timeout(settings.timeout())
            .connection_customizer(Box::new(StatementTimeout(settings.timeout())))
            .build_unchecked(ConnectionManager::<PgConnection>::new(&settings.url));

        Self::new(pool, settings.timeout())
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    #[tracing::instrument(
        "Running pending migrations",
        skip_all
    )]
    pub async fn run_migrations(&self) -> Result<(), anyhow::Error> {
        let pool = self.pool.clone();

        spawn_blocking_with_tracing(move || {
            let mut conn = pool.get()?;
            conn.run_pending_migrations(MIGRATIONS)
                .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;
            Ok::<_, anyhow::Error>(())
        })
        .await??;

        Ok(())
    }

    pub async fn run<F, T, E>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut DbConnection) -> Result<T, E> + Send + 'static,
        T: Send + 'static,
        E: From<DbError> + Send + 'static
    {
        let pool = self.pool.clone();

        let task = spawn_blocking_with_tracing(move || {
            let mut conn = pool.get().map_err(DbError::from)?;
            f(&mut conn)
        });

        match tokio::time::timeout(self.timeout, task).await {
            Ok(joined) => joined.map_err(DbError::from)?,
            Err(_) => {
                tracing::error!("Database operation exceeded {:?}", self.timeout);
                Err(DbError::Timeout(self.timeout).into())
            }
        }
    }
}
