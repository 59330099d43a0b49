use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug)]
pub enum ConfigError {
    Invalid { var: &'static str, value: String },
    DatabaseUrl(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { var, value } => write!(f, "Invalid value for {}: {:?}", var, value),
            ConfigError::DatabaseUrl(msg) => write!(f, "Invalid DATABASE_URL: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub encrypt: bool,
    pub trust_server_certificate: bool,
    pub pool_max: u32,
    pub pool_min: u32,
    pub idle_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database: DatabaseConfig,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup so tests do not
    /// have to touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database = DatabaseConfig {
            url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
            host: text("DB_HOST", "localhost"),
            port: parse(&lookup, "DB_PORT", 5432)?,
            user: text("DB_USER", "postgres"),
            password: text("DB_PASSWORD", ""),
            database: text("DB_NAME", "employee_management"),
            encrypt: parse_flag(&lookup, "DB_ENCRYPT", true)?,
            trust_server_certificate: parse_flag(&lookup, "DB_TRUST_SERVER_CERTIFICATE", true)?,
            pool_max: parse(&lookup, "DB_POOL_MAX", 10)?,
            pool_min: parse(&lookup, "DB_POOL_MIN", 0)?,
            idle_timeout: Duration::from_millis(parse(&lookup, "DB_POOL_IDLE_TIMEOUT_MS", 30_000)?),
        };

        Ok(Config {
            database,
            host: text("HOST", "0.0.0.0"),
            port: parse(&lookup, "PORT", 3000)?,
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

impl DatabaseConfig {
    pub fn ssl_mode(&self) -> PgSslMode {
        match (self.encrypt, self.trust_server_certificate) {
            (false, _) => PgSslMode::Disable,
            (true, true) => PgSslMode::Require,
            (true, false) => PgSslMode::VerifyFull,
        }
    }

    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url).map_err(|err| ConfigError::DatabaseUrl(err.to_string()));
        }

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
            .ssl_mode(self.ssl_mode()))
    }
}

fn parse<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

fn parse_flag<F>(lookup: &F, var: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid { var, value }),
        },
    }
}
