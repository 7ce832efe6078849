use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Env var naming the TOML config file
pub const CONFIG_PATH_ENV: &str = "WEBCAST_RELAY_CONFIG";

/// Complete relay configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RelayConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub queue: QueueConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub capture: CaptureConfig,
}

/// Subscriber-facing listener
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    18081
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Queue depths. 0 means unbounded; a cap drops the oldest item when full.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueueConfig {
    #[serde(default)]
    pub raw_capacity: usize,
    #[serde(default)]
    pub decoded_capacity: usize,
}

/// Shape of the JSON sent to subscribers
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Add a top-level "type" member naming the message type
    #[serde(default)]
    pub tag_events: bool,
}

/// Capture adapters feeding the raw queue
#[derive(Debug, Clone, Deserialize)]
pub struct CaptureConfig {
    /// Accept frames on POST /api/frames
    #[serde(default = "default_ingest_enabled")]
    pub ingest_enabled: bool,
    #[serde(default = "default_max_frame_bytes")]
    pub max_frame_bytes: usize,
    /// Length-prefixed frame dump to replay at startup
    #[serde(default)]
    pub replay_file: Option<PathBuf>,
    /// Delay between replayed frames (milliseconds)
    #[serde(default)]
    pub replay_interval_ms: u64,
}

fn default_ingest_enabled() -> bool {
    true
}

fn default_max_frame_bytes() -> usize {
    4 * 1024 * 1024 // 4 MB
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            ingest_enabled: default_ingest_enabled(),
            max_frame_bytes: default_max_frame_bytes(),
            replay_file: None,
            replay_interval_ms: 0,
        }
    }
}

/// Configuration errors; all are fatal at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value '{value}' for {var}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Load configuration from TOML file
pub fn load_config(path: &Path) -> Result<RelayConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load from `$WEBCAST_RELAY_CONFIG` (or defaults), then apply env overrides
pub fn load_from_env() -> Result<RelayConfig, ConfigError> {
    let mut config = match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) => load_config(Path::new(&path))?,
        None => RelayConfig::default(),
    };
    config.apply_env_overrides(|var| std::env::var(var).ok())?;
    Ok(config)
}

impl RelayConfig {
    /// Override listener and replay settings from the environment.
    ///
    /// `lookup` is injected so tests don't have to touch process env.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("WEBCAST_RELAY_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("WEBCAST_RELAY_PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                var: "WEBCAST_RELAY_PORT",
                value: port.clone(),
            })?;
        }
        if let Some(path) = lookup("WEBCAST_RELAY_REPLAY_FILE") {
            self.capture.replay_file = Some(PathBuf::from(path));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = RelayConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 18081);
        assert_eq!(config.server.bind_address(), "0.0.0.0:18081");
        assert_eq!(config.queue.raw_capacity, 0);
        assert_eq!(config.queue.decoded_capacity, 0);
        assert!(!config.output.tag_events);
        assert!(config.capture.ingest_enabled);
        assert_eq!(config.capture.max_frame_bytes, 4 * 1024 * 1024);
        assert!(config.capture.replay_file.is_none());
    }

    #[test]
    fn test_config_deserialization() {
        let toml = r#"
            [server]
            host = "127.0.0.1"
            port = 9000

            [queue]
            raw_capacity = 1000
            decoded_capacity = 5000

            [output]
            tag_events = true

            [capture]
            ingest_enabled = false
            max_frame_bytes = 1024
            replay_file = "/tmp/frames.bin"
            replay_interval_ms = 50
        "#;

        let config: RelayConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.server.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.queue.raw_capacity, 1000);
        assert_eq!(config.queue.decoded_capacity, 5000);
        assert!(config.output.tag_events);
        assert!(!config.capture.ingest_enabled);
        assert_eq!(config.capture.max_frame_bytes, 1024);
        assert_eq!(
            config.capture.replay_file,
            Some(PathBuf::from("/tmp/frames.bin"))
        );
        assert_eq!(config.capture.replay_interval_ms, 50);
    }

    #[test]
    fn test_partial_config() {
        // Test that missing sections use defaults
        let toml = r#"
            [server]
            port = 18082
        "#;

        let config: RelayConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 18082);
        assert_eq!(config.server.host, "0.0.0.0"); // Default
        assert_eq!(config.queue.decoded_capacity, 0); // Default
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("WEBCAST_RELAY_HOST", "127.0.0.1"),
            ("WEBCAST_RELAY_PORT", "19000"),
            ("WEBCAST_RELAY_REPLAY_FILE", "capture.bin"),
        ]
        .into_iter()
        .collect();

        let mut config = RelayConfig::default();
        config
            .apply_env_overrides(|var| env.get(var).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.server.bind_address(), "127.0.0.1:19000");
        assert_eq!(config.capture.replay_file, Some(PathBuf::from("capture.bin")));
    }

    #[test]
    fn test_invalid_port_override() {
        let mut config = RelayConfig::default();
        let err = config
            .apply_env_overrides(|var| {
                (var == "WEBCAST_RELAY_PORT").then(|| "not-a-port".to_string())
            })
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnv {
                var: "WEBCAST_RELAY_PORT",
                ..
            }
        ));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\ntag_events = true").unwrap();
        let config = load_config(file.path()).unwrap();
        assert!(config.output.tag_events);
    }

    #[test]
    fn test_load_config_errors() {
        let missing = load_config(Path::new("/nonexistent/relay.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Read { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = \"eighty\"").unwrap();
        let invalid = load_config(file.path()).unwrap_err();
        assert!(matches!(invalid, ConfigError::Parse { .. }));
    }
}
