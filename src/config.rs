use crate::reply::DEFAULT_REPLY_DELAY;
use crate::theme::ThemeMode;
use std::env;
use std::time::Duration;

pub const DEFAULT_PLACEHOLDER: &str = "Reply to Claude...";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid CHAT_REPLY_DELAY_MS '{0}': expected a whole number of milliseconds")]
    InvalidDelay(String),

    #[error("Unknown CHAT_THEME '{0}'. Valid options: 'dark', 'light'")]
    UnknownTheme(String),
}

/// Runtime settings for the chat panel, read from the environment.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatConfig {
    pub reply_delay: Duration,
    pub theme: ThemeMode,
    pub placeholder: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay: DEFAULT_REPLY_DELAY,
            theme: ThemeMode::Dark,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl ChatConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup; unset or blank keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(raw) = get("CHAT_REPLY_DELAY_MS") {
            let millis = raw
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidDelay(raw.clone()))?;
            config.reply_delay = Duration::from_millis(millis);
        }

        if let Some(raw) = get("CHAT_THEME") {
            config.theme = match raw.to_ascii_lowercase().as_str() {
                "dark" => ThemeMode::Dark,
                "light" => ThemeMode::Light,
                _ => return Err(ConfigError::UnknownTheme(raw)),
            };
        }

        if let Some(placeholder) = get("CHAT_PLACEHOLDER") {
            config.placeholder = placeholder;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ChatConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ChatConfig::default());
        assert_eq!(config.reply_delay, Duration::from_secs(1));
        assert_eq!(config.placeholder, "Reply to Claude...");
    }

    #[test]
    fn reads_overrides() {
        let config = ChatConfig::from_lookup(lookup(&[
            ("CHAT_REPLY_DELAY_MS", "250"),
            ("CHAT_THEME", "Light"),
            ("CHAT_PLACEHOLDER", "Ask anything"),
        ]))
        .unwrap();
        assert_eq!(config.reply_delay, Duration::from_millis(250));
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.placeholder, "Ask anything");
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = ChatConfig::from_lookup(lookup(&[("CHAT_THEME", "  ")])).unwrap();
        assert_eq!(config.theme, ThemeMode::Dark);
    }

    #[test]
    fn rejects_invalid_values() {
        assert_eq!(
            ChatConfig::from_lookup(lookup(&[("CHAT_REPLY_DELAY_MS", "soon")])),
            Err(ConfigError::InvalidDelay("soon".into()))
        );
        assert_eq!(
            ChatConfig::from_lookup(lookup(&[("CHAT_THEME", "octane")])),
            Err(ConfigError::UnknownTheme("octane".into()))
        );
    }
}
