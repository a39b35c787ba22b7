use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Visitor scope whose browsing history this process serves
    #[serde(default = "default_visitor_id")]
    pub visitor_id: String,

    /// Redis connection URL. When set, history is stored in Redis instead of on disk
    #[serde(default)]
    pub redis_url: Option<String>,

    /// Directory holding file-backed history slots
    #[serde(default = "default_history_dir")]
    pub history_dir: String,

    /// Whether browsing history survives restarts
    #[serde(default = "default_persist_history")]
    pub persist_history: bool,

    /// Remote catalog base URL. The built-in catalog is used when unset
    #[serde(default)]
    pub catalog_url: Option<String>,

    /// Simulated latency for the built-in catalog, in milliseconds
    #[serde(default)]
    pub catalog_latency_ms: u64,

    /// Request timeout for the remote catalog, in seconds
    #[serde(default = "default_catalog_timeout_secs")]
    pub catalog_timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_visitor_id() -> String {
    "default".to_string()
}

fn default_history_dir() -> String {
    ".shelf".to_string()
}

fn default_persist_history() -> bool {
    true
}

fn default_catalog_timeout_secs() -> u64 {
    10
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_environment() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert_eq!(config.visitor_id, "default");
        assert_eq!(config.redis_url, None);
        assert!(config.persist_history);
        assert_eq!(config.catalog_latency_ms, 0);
        assert_eq!(config.catalog_timeout_secs, 10);
    }

    #[test]
    fn test_overrides() {
        let vars = vec![
            ("PORT".to_string(), "8080".to_string()),
            ("VISITOR_ID".to_string(), "alice".to_string()),
            ("PERSIST_HISTORY".to_string(), "false".to_string()),
            ("CATALOG_URL".to_string(), "http://catalog.local".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.visitor_id, "alice");
        assert!(!config.persist_history);
        assert_eq!(config.catalog_url.as_deref(), Some("http://catalog.local"));
    }
}
