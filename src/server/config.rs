use std::{net::SocketAddr, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";

/// Deployment profile selected through `APP_CONFIG`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Testing,
    Production,
}

impl Environment {
    fn database_name(self) -> &'static str {
        match self {
            Self::Development | Self::Testing => "test_bot_api",
            Self::Production => "bot_api",
        }
    }

    fn debug(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "dev" => Ok(Self::Development),
            "test" => Ok(Self::Testing),
            "prod" => Ok(Self::Production),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

pub struct Config {
    pub environment: Environment,
    pub debug: bool,
    pub database_url: String,
    pub bind_address: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok()).map_err(AppError::from)
    }

    /// Builds the configuration from an arbitrary variable source
    ///
    /// `APP_CONFIG` defaults to `test`. `DATABASE_URL` defaults to a SQLite file named after
    /// the profile's database. `BIND_ADDRESS` defaults to `127.0.0.1:5000`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let environment = match lookup("APP_CONFIG") {
            Some(value) => value.parse()?,
            None => Environment::Testing,
        };

        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| {
            format!("sqlite://{}.db?mode=rwc", environment.database_name())
        });

        let bind_address = lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidVar {
                name: "BIND_ADDRESS".to_string(),
                value: bind_address.clone(),
            })?;

        Ok(Self {
            environment,
            debug: environment.debug(),
            database_url,
            bind_address,
        })
    }
}
