use thiserror::Error;

/// Startup configuration errors, reported by `main` before the server binds
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable {0} must be set")]
    MissingEnvVar(&'static str),
    #[error("Environment variable {var} has invalid value {value:?}: {reason}")]
    InvalidEnvValue {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}
