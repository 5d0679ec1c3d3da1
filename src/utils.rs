//! Helper functions could be used in api/, front/, webhook/, ...

use crate::config;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use std::str::FromStr;

pub async fn setup_sqlite_db_pool() -> anyhow::Result<SqlitePool> {
    let app_config = &*config::APP_CONFIG;

    Ok(SqlitePool::connect_with(
        SqliteConnectOptions::from_str(&app_config.db_host)?
            .create_if_missing(true)
            .pragma("foreign_keys", "ON"),
    )
    .await?)
}
