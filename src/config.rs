use std::env;
use validator::Validate;
use crate::errors::AppError;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct Config {
    #[validate(length(min = 1))]
    pub host: String,
    #[validate(range(min = 1))]
    pub port: u16,
    pub database_url: Option<String>,
    #[validate(range(min = 1, max = 100))]
    pub database_max_connections: u32,
    #[validate(range(min = 1, max = 64))]
    pub workers: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_url: None,
            database_max_connections: DEFAULT_MAX_CONNECTIONS,
            workers: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Config::default();

        let config = Config {
            host: get("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT", get("PORT"))?.unwrap_or(defaults.port),
            database_url: get("DATABASE_URL"),
            database_max_connections: parse_var("DATABASE_MAX_CONNECTIONS", get("DATABASE_MAX_CONNECTIONS"))?
                .unwrap_or(defaults.database_max_connections),
            workers: parse_var("WORKERS", get("WORKERS"))?,
        };

        config
            .validate()
            .map_err(|err| AppError::Config(format!("Invalid configuration: {}", err)))?;

        Ok(config)
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: Option<String>) -> Result<Option<T>, AppError> {
    value
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|_| AppError::Config(format!("{} must be a number, got '{}'", key, raw)))
        })
        .transpose()
}
