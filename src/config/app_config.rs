use serde::Deserialize;

use crate::infrastructure::storage::{PostgresConfig, StorageConfig, StorageType};

/// Environment variable holding the document store connection string
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Document store settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// `memory` or `postgres`
    pub backend: String,
    /// Connection string; falls back to `DATABASE_URL`
    pub url: Option<String>,
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection
    pub connect_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: "memory".to_string(),
            url: None,
            max_connections: 10,
            connect_timeout_secs: 30,
        }
    }
}

impl StorageSettings {
    /// Resolve the backend and its connection string.
    ///
    /// `env_url` is the value of `DATABASE_URL`, used when no `url` is
    /// configured.
    pub fn resolve(&self, env_url: Option<String>) -> anyhow::Result<StorageConfig> {
        match self.backend.parse::<StorageType>()? {
            StorageType::InMemory => Ok(StorageConfig::in_memory()),
            StorageType::Postgres => {
                let url = self.url.clone().or(env_url).ok_or_else(|| {
                    anyhow::anyhow!(
                        "postgres storage requires storage.url or {}",
                        DATABASE_URL_ENV
                    )
                })?;

                Ok(StorageConfig::postgres(
                    PostgresConfig::new(url)
                        .with_max_connections(self.max_connections)
                        .with_connect_timeout(self.connect_timeout_secs),
                ))
            }
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Storage configuration, reading `DATABASE_URL` from the environment
    pub fn storage_config(&self) -> anyhow::Result<StorageConfig> {
        self.storage.resolve(std::env::var(DATABASE_URL_ENV).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.storage.backend, "memory");
    }

    #[test]
    fn test_resolve_memory_ignores_url() {
        let settings = StorageSettings::default();

        let resolved = settings.resolve(Some("postgres://db/x".to_string())).unwrap();
        assert_eq!(resolved.storage_type(), StorageType::InMemory);
    }

    #[test]
    fn test_resolve_postgres_prefers_configured_url() {
        let settings = StorageSettings {
            backend: "postgres".to_string(),
            url: Some("postgres://configured/db".to_string()),
            max_connections: 3,
            connect_timeout_secs: 5,
        };

        match settings.resolve(Some("postgres://env/db".to_string())).unwrap() {
            StorageConfig::Postgres(pg) => {
                assert_eq!(pg.url, "postgres://configured/db");
                assert_eq!(pg.max_connections, 3);
                assert_eq!(pg.connect_timeout_secs, 5);
            }
            other => panic!("expected postgres config, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_postgres_falls_back_to_env() {
        let settings = StorageSettings {
            backend: "pg".to_string(),
            ..Default::default()
        };

        match settings.resolve(Some("postgres://env/db".to_string())).unwrap() {
            StorageConfig::Postgres(pg) => {
                assert_eq!(pg.url, "postgres://env/db");
                assert_eq!(pg.connect_timeout_secs, 30);
            }
            other => panic!("expected postgres config, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_postgres_without_url_fails() {
        let settings = StorageSettings {
            backend: "postgres".to_string(),
            ..Default::default()
        };

        assert!(settings.resolve(None).is_err());
    }

    #[test]
    fn test_resolve_unknown_backend_fails() {
        let settings = StorageSettings {
            backend: "mongo".to_string(),
            ..Default::default()
        };

        assert!(settings.resolve(None).is_err());
    }

    #[test]
    fn test_log_format_deserialize() {
        let format: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert!(matches!(format, LogFormat::Json));
    }
}
