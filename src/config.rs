use std::collections::HashMap;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_path: String,
    pub solana_rpc_url: String,
    pub balance_fetch_timeout_ms: u64,
    pub persist_timeout_ms: u64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("3000")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let database_path = env_map
            .get("DATABASE_PATH")
            .cloned()
            .ok_or_else(|| ConfigError::MissingEnv("DATABASE_PATH".to_string()))?;

        let solana_rpc_url = env_map
            .get("SOLANA_RPC_URL")
            .cloned()
            .unwrap_or_else(|| DEFAULT_RPC_URL.to_string());

        let balance_fetch_timeout_ms = parse_ms(&env_map, "BALANCE_FETCH_TIMEOUT_MS", 5000)?;
        let persist_timeout_ms = parse_ms(&env_map, "PERSIST_TIMEOUT_MS", 2000)?;

        Ok(Config {
            port,
            database_path,
            solana_rpc_url,
            balance_fetch_timeout_ms,
            persist_timeout_ms,
        })
    }

    pub fn balance_fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.balance_fetch_timeout_ms)
    }

    pub fn persist_timeout(&self) -> Duration {
        Duration::from_millis(self.persist_timeout_ms)
    }
}

fn parse_ms(
    env_map: &HashMap<String, String>,
    key: &str,
    default: u64,
) -> Result<u64, ConfigError> {
    match env_map.get(key) {
        None => Ok(default),
        Some(raw) => raw.parse::<u64>().map_err(|_| {
            ConfigError::InvalidValue(key.to_string(), "must be a valid u64".to_string())
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_required_env() -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("DATABASE_PATH".to_string(), "/tmp/soltrack.db".to_string());
        map
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_env_map(setup_required_env()).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.solana_rpc_url, DEFAULT_RPC_URL);
        assert_eq!(config.balance_fetch_timeout(), Duration::from_secs(5));
        assert_eq!(config.persist_timeout(), Duration::from_secs(2));
    }

    #[test]
    fn test_missing_database_path() {
        let mut env_map = setup_required_env();
        env_map.remove("DATABASE_PATH");
        match Config::from_env_map(env_map) {
            Err(ConfigError::MissingEnv(s)) => assert_eq!(s, "DATABASE_PATH"),
            _ => panic!("Expected MissingEnv error"),
        }
    }

    #[test]
    fn test_invalid_port() {
        let mut env_map = setup_required_env();
        env_map.insert("PORT".to_string(), "not_a_number".to_string());
        match Config::from_env_map(env_map) {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "PORT"),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_invalid_timeout() {
        let mut env_map = setup_required_env();
        env_map.insert("PERSIST_TIMEOUT_MS".to_string(), "-5".to_string());
        match Config::from_env_map(env_map) {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "PERSIST_TIMEOUT_MS"),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_custom_rpc_url() {
        let mut env_map = setup_required_env();
        env_map.insert(
            "SOLANA_RPC_URL".to_string(),
            "http://localhost:8899".to_string(),
        );
        let config = Config::from_env_map(env_map).unwrap();
        assert_eq!(config.solana_rpc_url, "http://localhost:8899");
    }
}
