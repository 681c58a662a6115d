use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};

use crate::config::Config;

pub async fn connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    let connect_options = match &config.database_url {
        Some(url) => url.parse::<PgConnectOptions>()?,
        None => PgConnectOptions::new(),
    };
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(connect_options)
        .await
}

/// Creates the `course` table if it is missing.
pub async fn setup(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(include_str!("sql/table_course.sql"))
        .execute(pool)
        .await?;
    Ok(())
}
