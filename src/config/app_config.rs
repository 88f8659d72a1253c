use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
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

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Locations of the account files. Both are read on every request.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub users_file: PathBuf,
    pub groups_file: PathBuf,
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

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            users_file: PathBuf::from("/etc/passwd"),
            groups_file: PathBuf::from("/etc/group"),
        }
    }
}

impl AppConfig {
    /// Load from `config/default`, `config/local` and `APP__*` environment variables
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

    /// Build from explicit sources only, for tests and embedding
    pub fn from_sources<I>(sources: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = (&'static str, String)>,
    {
        let mut builder = config::Config::builder();

        for (key, value) in sources {
            builder = builder.set_override(key, value)?;
        }

        builder.build()?.try_deserialize()
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
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.sources.users_file, PathBuf::from("/etc/passwd"));
        assert_eq!(config.sources.groups_file, PathBuf::from("/etc/group"));
    }

    #[test]
    fn test_empty_sources_fall_back_to_defaults() {
        let config = AppConfig::from_sources(Vec::new()).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.sources.groups_file, PathBuf::from("/etc/group"));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_sources(vec![
            ("sources.users_file", "/srv/passwd".to_string()),
            ("sources.groups_file", "/srv/group".to_string()),
            ("logging.level", "debug".to_string()),
            ("logging.format", "json".to_string()),
        ])
        .unwrap();

        assert_eq!(config.sources.users_file, PathBuf::from("/srv/passwd"));
        assert_eq!(config.sources.groups_file, PathBuf::from("/srv/group"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config =
            AppConfig::from_sources(vec![("sources.users_file", "/srv/passwd".to_string())])
                .unwrap();

        assert_eq!(config.sources.users_file, PathBuf::from("/srv/passwd"));
        assert_eq!(config.sources.groups_file, PathBuf::from("/etc/group"));
    }
}
