use serde::{Deserialize, Serialize};
use std::fs;
use anyhow::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_service_url")]
    pub service_url: String,
    /// Source language used when a request omits `src_lang`
    #[serde(default = "default_src_lang")]
    pub default_src_lang: String,
    /// Target language used when a request omits `dest_lang`
    #[serde(default = "default_dest_lang")]
    pub default_dest_lang: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_provider() -> String {
    "google".to_string()
}

fn default_service_url() -> String {
    "https://translate.googleapis.com".to_string()
}

fn default_src_lang() -> String {
    "auto".to_string()
}

fn default_dest_lang() -> String {
    "en".to_string()
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(path, &content)
    }

    /// Parse config content, picking the format from the file extension
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".jsonld") || path_lower.ends_with(".json") {
            let config: Config = serde_json::from_str(content)?;
            Ok(config)
        } else {
            let config: Config = serde_yaml::from_str(content)?;
            Ok(config)
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            service_url: default_service_url(),
            default_src_lang: default_src_lang(),
            default_dest_lang: default_dest_lang(),
            timeout_secs: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_fills_missing_keys_with_defaults() {
        let config = Config::parse("conf.yaml", "server:\n  port: 8080\n").unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.translation.provider, "google");
        assert_eq!(config.translation.default_src_lang, "auto");
        assert_eq!(config.translation.default_dest_lang, "en");
        assert!(config.translation.timeout_secs.is_none());
    }

    #[test]
    fn json_is_picked_by_extension() {
        let content = r#"{"translation": {"default_dest_lang": "fr", "timeout_secs": 10}}"#;
        let config = Config::parse("conf.json", content).unwrap();

        assert_eq!(config.translation.default_dest_lang, "fr");
        assert_eq!(config.translation.timeout_secs, Some(10));
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn malformed_content_is_an_error() {
        assert!(Config::parse("conf.json", "not json").is_err());
    }
}
