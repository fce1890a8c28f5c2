use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined,
    /// either in the process environment or in a `.env` file.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
