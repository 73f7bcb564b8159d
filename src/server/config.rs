use crate::server::error::config::ConfigError;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_SESSION_EXPIRY_DAYS: i64 = 7;

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub bind_address: String,
    /// Days of inactivity before a session expires
    pub session_expiry_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            valkey_url: required_var("VALKEY_URL")?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            session_expiry_days: parse_expiry_days(std::env::var("SESSION_EXPIRY_DAYS").ok())?,
        })
    }
}

fn required_var(var: &'static str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var))
}

fn parse_expiry_days(value: Option<String>) -> Result<i64, ConfigError> {
    let Some(value) = value else {
        return Ok(DEFAULT_SESSION_EXPIRY_DAYS);
    };

    match value.trim().parse::<i64>() {
        Ok(days) if days > 0 => Ok(days),
        _ => Err(ConfigError::InvalidEnvValue {
            var: "SESSION_EXPIRY_DAYS",
            value,
            reason: "expected a positive number of days",
        }),
    }
}
