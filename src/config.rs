// config.rs

use crate::error::ConfigError;

pub const PROMPT_VAR: &str = "LEDGER_CALC_PROMPT";
pub const EDITOR_HISTORY_VAR: &str = "LEDGER_CALC_EDITOR_HISTORY";

const DEFAULT_PROMPT: &str = "calc> ";
const DEFAULT_EDITOR_HISTORY: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub prompt: String,
    /// Line-editor recall size; unrelated to the calculator's own log.
    pub editor_history: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            editor_history: DEFAULT_EDITOR_HISTORY,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(prompt) = lookup(PROMPT_VAR) {
            config.prompt = prompt;
        }
        if let Some(raw) = lookup(EDITOR_HISTORY_VAR) {
            config.editor_history = match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: EDITOR_HISTORY_VAR,
                        value: raw,
                    })
                }
            };
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(Config::from_lookup(lookup(&[])), Ok(Config::default()));
    }

    #[test]
    fn reads_overrides() {
        let config =
            Config::from_lookup(lookup(&[(PROMPT_VAR, "> "), (EDITOR_HISTORY_VAR, " 20 ")])).unwrap();
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.editor_history, 20);
    }

    #[test]
    fn rejects_bad_history_size() {
        for bad in ["0", "-1", "lots"] {
            assert_eq!(
                Config::from_lookup(lookup(&[(EDITOR_HISTORY_VAR, bad)])),
                Err(ConfigError::InvalidValue {
                    key: EDITOR_HISTORY_VAR,
                    value: bad.to_string()
                })
            );
        }
    }
}
