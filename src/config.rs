use std::{env, path::PathBuf, time::Duration};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub seed_path: Option<PathBuf>,
    pub webhook: Option<WebhookConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid configuration: {0}")]
pub struct ConfigError(String);

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match get("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError(format!("PORT must be a port number, got {value:?}")))?,
            None => DEFAULT_PORT,
        };

        let seed_path = get("TICKETS_SEED_PATH").map(PathBuf::from);

        let username = get("TICKETS_WEBHOOK_USER");
        let password = get("TICKETS_WEBHOOK_PASSWORD");
        let webhook = match get("TICKETS_WEBHOOK_URL") {
            Some(url) => {
                if password.is_some() && username.is_none() {
                    return Err(ConfigError(
                        "TICKETS_WEBHOOK_PASSWORD is set without TICKETS_WEBHOOK_USER".into(),
                    ));
                }
                let timeout = match get("TICKETS_WEBHOOK_TIMEOUT_SECS") {
                    Some(value) => match value.trim().parse::<u64>() {
                        Ok(secs) if secs > 0 => Duration::from_secs(secs),
                        _ => {
                            return Err(ConfigError(format!(
                                "TICKETS_WEBHOOK_TIMEOUT_SECS must be a positive integer, got {value:?}"
                            )));
                        }
                    },
                    None => DEFAULT_WEBHOOK_TIMEOUT,
                };
                Some(WebhookConfig {
                    url: url.trim().to_string(),
                    username,
                    password,
                    timeout,
                })
            }
            None => None,
        };

        Ok(Self {
            port,
            seed_path,
            webhook,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_any_variables() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.seed_path, None);
        assert_eq!(config.webhook, None);
    }

    #[test]
    fn webhook_settings_are_collected() {
        let config = load(&[
            ("PORT", "9001"),
            ("TICKETS_SEED_PATH", "data/seed.json"),
            ("TICKETS_WEBHOOK_URL", "https://hooks.internal/tickets"),
            ("TICKETS_WEBHOOK_USER", "desk"),
            ("TICKETS_WEBHOOK_PASSWORD", "s3cret"),
            ("TICKETS_WEBHOOK_TIMEOUT_SECS", "3"),
        ])
        .unwrap();

        assert_eq!(config.port, 9001);
        assert_eq!(config.seed_path, Some(PathBuf::from("data/seed.json")));
        let webhook = config.webhook.unwrap();
        assert_eq!(webhook.url, "https://hooks.internal/tickets");
        assert_eq!(webhook.username.as_deref(), Some("desk"));
        assert_eq!(webhook.timeout, Duration::from_secs(3));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(load(&[("PORT", "eighty")]).is_err());
        assert!(load(&[
            ("TICKETS_WEBHOOK_URL", "http://localhost/hook"),
            ("TICKETS_WEBHOOK_TIMEOUT_SECS", "0"),
        ])
        .is_err());
        assert!(load(&[
            ("TICKETS_WEBHOOK_URL", "http://localhost/hook"),
            ("TICKETS_WEBHOOK_PASSWORD", "orphan"),
        ])
        .is_err());
    }

    #[test]
    fn blank_variables_count_as_unset() {
        let config = load(&[("TICKETS_WEBHOOK_URL", "  "), ("PORT", "")]).unwrap();
        assert_eq!(config.webhook, None);
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
