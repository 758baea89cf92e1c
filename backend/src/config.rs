use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::{env, net::SocketAddr};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Page size used when a list request omits `pageSize`.
    pub default_page_size: u64,
    /// `*` allows any origin.
    pub cors_allow_origin: String,
    /// Start with the seed users, todos and audit entries.
    pub seed_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            default_page_size: 20,
            cors_allow_origin: "*".to_string(),
            seed_data: true,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Config::default();

        let bind_addr = match env::var("BIND_ADDR") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| anyhow!("Invalid BIND_ADDR value: {}", raw))?,
            Err(_) => defaults.bind_addr,
        };

        let default_page_size = env::var("DEFAULT_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|v: &u64| *v > 0)
            .unwrap_or(defaults.default_page_size);

        let cors_allow_origin =
            env::var("CORS_ALLOW_ORIGIN").unwrap_or(defaults.cors_allow_origin);

        let seed_data = env::var("SEED_DATA")
            .map(|v| parse_bool(&v))
            .unwrap_or(defaults.seed_data);

        Ok(Config {
            bind_addr,
            default_page_size,
            cors_allow_origin,
            seed_data,
        })
    }
}

fn parse_bool(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_treats_common_negatives_as_false() {
        assert!(!parse_bool("false"));
        assert!(!parse_bool(" OFF "));
        assert!(!parse_bool("0"));
        assert!(parse_bool("true"));
        assert!(parse_bool("yes"));
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.default_page_size, 20);
        assert!(config.seed_data);
    }
}
