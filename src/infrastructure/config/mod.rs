//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use crate::application::errors::ConfigError;

/// Relay configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub server: ServerConfig,
    pub delivery: DeliveryConfig,
}

/// Where the relay listens and the two path segments it is mounted under
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ServerConfig {
    pub bind: String,
    pub root: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DeliveryConfig {
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                bind: "0.0.0.0:8080".to_string(),
                root: "webhook".to_string(),
                name: "xanathar".to_string(),
            },
            delivery: DeliveryConfig {
                timeout_secs: 15,
            },
        }
    }
}

impl ServerConfig {
    /// Route the relay is mounted on, e.g. `/webhook/xanathar`
    pub fn mount_path(&self) -> String {
        format!("/{}/{}", self.root, self.name)
    }
}

impl DeliveryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Read(format!("{}: {}", path.display(), e)))?;

        Self::from_yaml(&content)
    }

    /// Parse only; callers run `validate` before using the values
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load `path` if it exists, otherwise start from defaults, then apply
    /// `RELAY_*` overrides.
    ///
    /// A file that can't be read or parsed is logged and replaced by the
    /// defaults. A file that parses but holds invalid values is returned as
    /// is so that `validate` rejects it.
    pub fn resolve<F>(path: impl AsRef<Path>, var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();
        let mut config = if path.exists() {
            Config::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config: {}, using defaults", e);
                Config::default()
            })
        } else {
            Config::default()
        };

        config.apply_env(var);
        config
    }

    /// Apply `RELAY_*` overrides; values that don't parse are ignored
    pub fn apply_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = var("RELAY_BIND") {
            self.server.bind = bind;
        }

        if let Some(root) = var("RELAY_ROOT") {
            self.server.root = root;
        }

        if let Some(name) = var("RELAY_NAME") {
            self.server.name = name;
        }

        if let Some(timeout) = var("RELAY_DELIVERY_TIMEOUT") {
            match timeout.parse() {
                Ok(secs) => self.delivery.timeout_secs = secs,
                Err(_) => tracing::warn!("Ignoring RELAY_DELIVERY_TIMEOUT={:?}", timeout),
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.delivery.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "delivery.timeout-secs must be > 0".to_string(),
            ));
        }

        let segments = [
            ("server.root", &self.server.root),
            ("server.name", &self.server.name),
        ];
        for (key, segment) in segments {
            // `:`, `*` and braces are capture/wildcard syntax in route paths
            if segment.is_empty() || segment.contains(['/', ':', '*', '{', '}']) {
                return Err(ConfigError::InvalidValue(format!(
                    "{} must be a single non-empty path segment, got {:?}",
                    key, segment
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const ZERO_TIMEOUT_YAML: &str =
        "server:\n  bind: 127.0.0.1:9000\n  root: hooks\n  name: dice\ndelivery:\n  timeout-secs: 0\n";

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.mount_path(), "/webhook/xanathar");
        assert_eq!(config.delivery.timeout(), Duration::from_secs(15));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_roundtrip_uses_kebab_case() {
        let yaml = Config::default().to_yaml().unwrap();
        assert!(yaml.contains("timeout-secs: 15"));
        assert_eq!(Config::from_yaml(&yaml).unwrap(), Config::default());
    }

    #[test]
    fn test_zero_timeout_parses_but_fails_validation() {
        let config = Config::from_yaml(ZERO_TIMEOUT_YAML).unwrap();
        assert_eq!(config.delivery.timeout_secs, 0);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_resolve_keeps_invalid_file_values() {
        let path = std::env::temp_dir()
            .join(format!("xanathar-invalid-{}.yaml", std::process::id()));
        std::fs::write(&path, ZERO_TIMEOUT_YAML).unwrap();

        let config = Config::resolve(&path, |_| None);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.server.bind, "127.0.0.1:9000");
        assert_eq!(config.server.mount_path(), "/hooks/dice");
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_resolve_falls_back_on_unparseable_file() {
        let path = std::env::temp_dir()
            .join(format!("xanathar-garbage-{}.yaml", std::process::id()));
        std::fs::write(&path, "server: [not, a, map").unwrap();

        let config = Config::resolve(&path, |key| {
            (key == "RELAY_NAME").then(|| "dice".to_string())
        });
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.server.mount_path(), "/webhook/dice");
        assert_eq!(config.delivery.timeout_secs, 15);
    }

    #[test]
    fn test_resolve_missing_file_uses_defaults() {
        let config = Config::resolve("/nonexistent/xanathar.yaml", |_| None);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_validate_rejects_route_syntax_in_segments() {
        for segment in ["*", "*rest", ":x", "{x}", "a}"] {
            let mut config = Config::default();
            config.server.name = segment.to_string();
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidValue(_))),
                "{:?} should be rejected",
                segment
            );
        }
    }

    #[test]
    fn test_validate_rejects_nested_segment() {
        let mut config = Config::default();
        config.server.root = "a/b".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_apply_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("RELAY_BIND", "127.0.0.1:3000"),
            ("RELAY_NAME", "dice"),
            ("RELAY_DELIVERY_TIMEOUT", "60"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.bind, "127.0.0.1:3000");
        assert_eq!(config.server.mount_path(), "/webhook/dice");
        assert_eq!(config.delivery.timeout_secs, 60);
    }

    #[test]
    fn test_apply_env_ignores_bad_timeout() {
        let mut config = Config::default();
        config.apply_env(|key| (key == "RELAY_DELIVERY_TIMEOUT").then(|| "soon".to_string()));
        assert_eq!(config.delivery.timeout_secs, 15);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Config::load("/nonexistent/xanathar.yaml"),
            Err(ConfigError::Read(_))
        ));
    }
}
