use std::{path::Path, str::FromStr};

use sqlx::{
    Error, Pool, Sqlite, SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode},
};
use utils::assets::database_path;

pub mod codec;
pub mod models;
pub mod record;
pub mod schema;
pub mod storage;
pub mod store;

#[derive(Clone)]
pub struct DBService {
    pub pool: Pool<Sqlite>,
}

impl DBService {
    /// Opens the database inside the asset directory.
    pub async fn new() -> Result<DBService, Error> {
        Self::new_at(&database_path()).await
    }

    pub async fn new_at(path: &Path) -> Result<DBService, Error> {
        let database_url = format!("sqlite://{}", path.to_string_lossy());
        let options = SqliteConnectOptions::from_str(&database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Delete);
        let pool = SqlitePool::connect_with(options).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::debug!(path = %path.display(), "Database ready");
        Ok(DBService { pool })
    }
}
