//! Runtime configuration read from the process environment.
//!
//! A `.env` file in the working directory is loaded first by the binary, so
//! every variable below may also come from there.
//!
//! | Variable                     | Default     |
//! |------------------------------|-------------|
//! | `COURSES_HTTP_HOST`          | `127.0.0.1` |
//! | `COURSES_HTTP_PORT`          | `8080`      |
//! | `COURSES_DB_MAX_CONNECTIONS` | `5`         |
//! | `DATABASE_URL`               | unset       |
//!
//! Without `DATABASE_URL` the connection falls back to the standard libpq
//! variables (`PGHOST`, `PGUSER`, `PGDATABASE`, ...).
use std::str::FromStr;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub http_host: String,
    pub http_port: u16,
    pub max_connections: u32,
    pub database_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_host: "127.0.0.1".to_string(),
            http_port: 8080,
            max_connections: 5,
            database_url: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let default = Self::default();
        Ok(Self {
            http_host: lookup("COURSES_HTTP_HOST").unwrap_or(default.http_host),
            http_port: parse_var(&lookup, "COURSES_HTTP_PORT")?.unwrap_or(default.http_port),
            max_connections: parse_var(&lookup, "COURSES_DB_MAX_CONNECTIONS")?
                .unwrap_or(default.max_connections),
            database_url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, Error> {
    lookup(name)
        .map(|value| {
            value
                .parse()
                .map_err(|_| Error::InvalidValue { name, value })
        })
        .transpose()
}
