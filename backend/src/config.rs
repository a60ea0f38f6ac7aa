//! Host settings, read from the process environment.
//!
//! | Variable               | Default       |
//! |------------------------|---------------|
//! | `CATALOG_HOST`         | `127.0.0.1`   |
//! | `CATALOG_PORT`         | `8080`        |
//! | `CATALOG_DB`           | `db.json`     |
//! | `CATALOG_OPEN_BROWSER` | `true`        |

use std::path::PathBuf;

use log::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    /// Product seed served at `/db.json`.
    pub db_path: PathBuf,
    pub open_browser: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            db_path: PathBuf::from("db.json"),
            open_browser: true,
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Malformed values keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(host) = lookup("CATALOG_HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(raw) = lookup("CATALOG_PORT") {
            match raw.trim().parse() {
                Ok(port) => config.port = port,
                Err(e) => warn!("ignoring CATALOG_PORT={:?}: {}", raw, e),
            }
        }
        if let Some(path) = lookup("CATALOG_DB").filter(|p| !p.trim().is_empty()) {
            config.db_path = PathBuf::from(path.trim());
        }
        if let Some(raw) = lookup("CATALOG_OPEN_BROWSER") {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => config.open_browser = true,
                "0" | "false" | "no" => config.open_browser = false,
                _ => warn!("ignoring CATALOG_OPEN_BROWSER={:?}", raw),
            }
        }
        config
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = HostConfig::from_lookup(lookup(&[]));
        assert_eq!(config, HostConfig::default());
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn overrides_are_applied() {
        let config = HostConfig::from_lookup(lookup(&[
            ("CATALOG_HOST", "0.0.0.0"),
            ("CATALOG_PORT", "9000"),
            ("CATALOG_DB", "/srv/products.json"),
            ("CATALOG_OPEN_BROWSER", "no"),
        ]));
        assert_eq!(config.url(), "http://0.0.0.0:9000");
        assert_eq!(config.db_path, PathBuf::from("/srv/products.json"));
        assert!(!config.open_browser);
    }

    #[test]
    fn malformed_values_keep_defaults() {
        let config = HostConfig::from_lookup(lookup(&[
            ("CATALOG_PORT", "eighty"),
            ("CATALOG_OPEN_BROWSER", "maybe"),
        ]));
        assert_eq!(config.port, 8080);
        assert!(config.open_browser);
    }
}
