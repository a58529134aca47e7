pub mod database;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Postgres connection string. Orders are kept in memory when unset.
    #[serde(default)]
    pub database_url: Option<String>,
    pub port: u16,
    /// Comma-separated list of allowed origins, or `*`.
    pub cors_origins: String,
    pub db_max_connections: u32,
    pub db_acquire_timeout_secs: u64,
}

impl Config {
    pub const DEFAULT_PORT: u16 = 8001;

    /// Reads settings from the process environment, falling back to defaults
    /// for everything except the database URL.
    pub fn from_env() -> anyhow::Result<Self> {
        let settings = ::config::Config::builder()
            .set_default("port", i64::from(Self::DEFAULT_PORT))?
            .set_default("cors_origins", "*")?
            .set_default("db_max_connections", 10_i64)?
            .set_default("db_acquire_timeout_secs", 5_i64)?
            .add_source(::config::Environment::default().try_parsing(true))
            .build()?;

        let mut config: Config = settings
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("invalid configuration: {}", e))?;
        config.database_url = config.database_url.filter(|url| !url.trim().is_empty());

        Ok(config)
    }

    /// `None` means any origin is allowed.
    pub fn allowed_origins(&self) -> Option<Vec<String>> {
        let origins: Vec<String> = self
            .cors_origins
            .split(',')
            .map(|origin| origin.trim())
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
            None
        } else {
            Some(origins)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            port: Self::DEFAULT_PORT,
            cors_origins: "*".to_string(),
            db_max_connections: 10,
            db_acquire_timeout_secs: 5,
        }
    }
}
