use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// `APP_CONFIG` names an environment profile that does not exist.
    ///
    /// Valid profiles are `dev`, `test`, and `prod`.
    #[error("Unknown application environment '{0}', expected one of dev, test, prod")]
    UnknownEnvironment(String),

    /// An environment variable is set but cannot be parsed.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidVar {
        /// Name of the offending variable
        name: String,
        /// The value that failed to parse
        value: String,
    },
}
