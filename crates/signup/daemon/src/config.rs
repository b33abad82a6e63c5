//! Configuration for signup-daemon

use serde::{Deserialize, Serialize};
use signup_types::SeedCatalog;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main daemon configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Activity catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Static front-end configuration
    #[serde(default)]
    pub static_files: StaticFilesConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            enable_cors: true,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Activity catalog configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Seed catalog file (toml, json or yaml). The built-in Mergington
    /// catalog is used when unset.
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Resolve the seed catalog the registry starts with
    pub fn load_seed(&self) -> Result<SeedCatalog, config::ConfigError> {
        match &self.seed_path {
            Some(path) => load_seed_file(path),
            None => Ok(SeedCatalog::mergington()),
        }
    }
}

/// Read a seed catalog file. The format follows the file extension.
pub fn load_seed_file(path: &Path) -> Result<SeedCatalog, config::ConfigError> {
    config::Config::builder()
        .add_source(config::File::from(path).required(true))
        .build()?
        .try_deserialize()
}

/// Static front-end configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticFilesConfig {
    /// Directory served under `/static`
    #[serde(default = "default_static_dir")]
    pub dir: PathBuf,

    /// Entry point `/` redirects to
    #[serde(default = "default_index")]
    pub index: String,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            dir: default_static_dir(),
            index: default_index(),
        }
    }
}

impl StaticFilesConfig {
    /// URL path of the front-end entry point
    pub fn index_url(&self) -> String {
        format!("/static/{}", self.index.trim_start_matches('/'))
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// Default value helpers
fn default_true() -> bool {
    true
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8000))
}

fn default_request_timeout() -> u64 {
    30
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_index() -> String {
    "index.html".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl DaemonConfig {
    /// Load configuration: defaults, then the optional file, then `SIGNUP_*`
    /// environment variables (`SIGNUP_SERVER__LISTEN_ADDR=0.0.0.0:8000`).
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        // Add default configuration
        builder = builder.add_source(config::Config::try_from(&DaemonConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(Path::new(path)).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("SIGNUP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    // Serializes tests that read SIGNUP_* variables through `DaemonConfig::load`
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = DaemonConfig::default();
        assert_eq!(config.server.listen_addr.port(), 8000);
        assert!(config.catalog.seed_path.is_none());
        assert_eq!(config.static_files.dir, PathBuf::from("static"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_server_defaults() {
        let config = ServerConfig::default();
        assert!(config.enable_cors);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_index_url() {
        let mut config = StaticFilesConfig::default();
        assert_eq!(config.index_url(), "/static/index.html");

        config.index = "/app.html".into();
        assert_eq!(config.index_url(), "/static/app.html");
    }

    #[test]
    fn test_load_from_file() {
        let file = write_temp(
            ".toml",
            r#"
[server]
listen_addr = "0.0.0.0:9100"
enable_cors = false

[static_files]
dir = "/srv/www"
"#,
        );

        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let config = DaemonConfig::load(file.path().to_str()).unwrap();
        assert_eq!(config.server.listen_addr.port(), 9100);
        assert!(!config.server.enable_cors);
        assert_eq!(config.server.request_timeout_secs, 30);
        assert_eq!(config.static_files.dir, PathBuf::from("/srv/www"));
        assert_eq!(config.static_files.index, "index.html");
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = write_temp(
            ".toml",
            r#"
[server]
listen_addr = "0.0.0.0:9100"
request_timeout_secs = 12
"#,
        );

        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("SIGNUP_SERVER__LISTEN_ADDR", "0.0.0.0:9999");
        std::env::set_var("SIGNUP_STATIC_FILES__INDEX", "app.html");
        let loaded = DaemonConfig::load(file.path().to_str());
        std::env::remove_var("SIGNUP_SERVER__LISTEN_ADDR");
        std::env::remove_var("SIGNUP_STATIC_FILES__INDEX");

        let config = loaded.unwrap();
        assert_eq!(config.server.listen_addr.port(), 9999);
        assert_eq!(config.server.request_timeout(), Duration::from_secs(12));
        assert_eq!(config.static_files.index, "app.html");
        assert_eq!(config.static_files.dir, PathBuf::from("static"));
    }

    #[test]
    fn test_builtin_seed_when_unset() {
        let seed = CatalogConfig::default().load_seed().unwrap();
        assert_eq!(seed, SeedCatalog::mergington());
    }

    #[test]
    fn test_load_seed_file() {
        let file = write_temp(
            ".toml",
            r#"
[[activities]]
name = "Robotics"
description = "Build and program robots"
schedule = "Mondays, 4:00 PM - 5:30 PM"
max_participants = 8
participants = ["ada@mergington.edu"]

[[activities]]
name = "Choir"
description = "Sing in the school choir"
schedule = "Thursdays, 3:30 PM - 4:30 PM"
max_participants = 40
"#,
        );

        let config = CatalogConfig {
            seed_path: Some(file.path().to_path_buf()),
        };
        let seed = config.load_seed().unwrap();
        assert_eq!(seed.activities.len(), 2);
        assert_eq!(seed.activities[0].name, "Robotics");
        assert_eq!(seed.activities[0].participants, vec!["ada@mergington.edu"]);
        assert!(seed.activities[1].participants.is_empty());
    }

    #[test]
    fn test_missing_seed_file_is_an_error() {
        let config = CatalogConfig {
            seed_path: Some(PathBuf::from("/nonexistent/catalog.toml")),
        };
        assert!(config.load_seed().is_err());
    }
}
