use anyhow::{bail, Context};
use std::env;

const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;
const DEFAULT_PORT: u16 = 8080;

/// Process configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key-value source, `from_env` uses the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let database_url = match get("DATABASE_URL") {
            Some(url) => url,
            None => {
                let host = get("DB_HOST").context("DATABASE_URL or DB_HOST must be set")?;
                let port = parse_or(get("DB_PORT"), "DB_PORT", DEFAULT_DB_PORT)?;
                let user = get("DB_USER").context("DB_USER is not set")?;
                let password = get("DB_PASSWORD").unwrap_or_default();
                let name = get("DB_NAME").context("DB_NAME is not set")?;

                format!("postgres://{user}:{password}@{host}:{port}/{name}")
            }
        };

        let jwt_secret = get("JWT_SECRET").context("JWT_SECRET is not set")?;

        let jwt_expiration_hours = parse_or(
            get("JWT_EXPIRATION_HOURS"),
            "JWT_EXPIRATION_HOURS",
            DEFAULT_JWT_EXPIRATION_HOURS,
        )?;
        if jwt_expiration_hours <= 0 {
            bail!("JWT_EXPIRATION_HOURS must be positive, got {jwt_expiration_hours}");
        }

        let port = parse_or(get("PORT"), "PORT", DEFAULT_PORT)?;

        Ok(Self {
            database_url,
            jwt_secret,
            jwt_expiration_hours,
            port,
        })
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(value) => value
            .parse()
            .with_context(|| format!("{key} is invalid: {value:?}")),
        None => Ok(default),
    }
}
