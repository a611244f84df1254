use shared::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode},
    SqlitePool,
};
use std::{str::FromStr, time::Duration};

pub mod model;

fn make_sqlite_connect_options(cfg: &DatabaseConfig) -> Result<SqliteConnectOptions, sqlx::Error> {
    Ok(SqliteConnectOptions::from_str(&cfg.url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5)))
}

#[derive(Clone)]
pub struct ConnectionPool(SqlitePool);

impl ConnectionPool {
    pub fn new(pool: SqlitePool) -> Self {
        Self(pool)
    }

    pub fn inner_ref(&self) -> &SqlitePool {
        &self.0
    }

    pub async fn begin(&self) -> AppResult<sqlx::Transaction<'_, sqlx::Sqlite>> {
        self.0.begin().await.map_err(AppError::TransactionError)
    }

    // スキーマ作成と 12 ケースの初期投入
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::migrate!()
            .run(self.inner_ref())
            .await
            .map_err(|e| AppError::SpecificOperationError(e.into()))
    }
}

// 最初のクエリまで接続しない
pub fn connect_database_with(cfg: &DatabaseConfig) -> Result<ConnectionPool, sqlx::Error> {
    Ok(ConnectionPool(SqlitePool::connect_lazy_with(
        make_sqlite_connect_options(cfg)?,
    )))
}
