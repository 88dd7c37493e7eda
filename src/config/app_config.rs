use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub cache: CacheConfig,
    pub search: SearchConfig,
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

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Cache backend selection and per-entity expirations
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Backend name, parsed by the cache factory ("in_memory" or "redis")
    pub backend: String,
    pub redis_url: String,
    pub key_prefix: String,
    /// Capacity bound for the in-memory backend
    pub max_capacity: u64,
    pub film_ttl_secs: u64,
    pub genre_ttl_secs: u64,
    pub person_ttl_secs: u64,
}

/// Search backend endpoint and index names
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub url: String,
    pub timeout_secs: u64,
    pub films_index: String,
    pub genres_index: String,
    pub people_index: String,
    /// Upper bound on unpaginated listings (genres, per-person film scans)
    pub scan_size: u32,
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

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: "redis".to_string(),
            redis_url: "redis://127.0.0.1:6379".to_string(),
            key_prefix: "movies".to_string(),
            max_capacity: 10_000,
            film_ttl_secs: 300,
            genre_ttl_secs: 300,
            person_ttl_secs: 300,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:9200".to_string(),
            timeout_secs: 10,
            films_index: "films".to_string(),
            genres_index: "genres".to_string(),
            people_index: "people".to_string(),
            scan_size: 1000,
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
}
