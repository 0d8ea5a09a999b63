use std::env;

#[derive(Debug, Clone)]
pub enum Deployment {
    Local,
    Dev,
    Stage,
    Prod,
}

impl Deployment {
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Self::Dev,
            "stage" | "staging" => Self::Stage,
            "prod" | "production" => Self::Prod,
            _ => Self::Local,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Database (optional: without it the service serves mock data)
    pub database_url: Option<String>,

    // API settings
    pub api_host: String,
    pub api_port: u16,

    // CORS: dashboard origin allowed to call the API
    pub frontend_origin: Option<String>,

    // Application metadata
    pub deployment: Deployment,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if a numeric variable is set but
    /// cannot be parsed. Missing variables fall back to defaults;
    /// `DATABASE_URL` in particular is optional and its absence switches
    /// the service into mock mode.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_port = match env::var("API_PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => 3001,
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL").ok(),

            api_host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            api_port,

            frontend_origin: env::var("FRONTEND_ORIGIN").ok(),

            deployment: Deployment::from_str(
                &env::var("DEPLOYMENT").unwrap_or_else(|_| "local".to_string()),
            ),
        })
    }

    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

/// Parse an `API_PORT` value. A set-but-unparseable port is a hard error,
/// not a silent fallback to the default.
pub fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.parse().map_err(|_| ConfigError::Invalid("API_PORT"))
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
