//! Engine configuration.
//!
//! Values come from the process environment after `.env.local` and `.env` at
//! the repo root have been loaded. Command line flags override them in `main`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use realms_domain::rules::STARTING_CURRENCY;

pub const CODEX_PATH_VAR: &str = "REALMS_CODEX_PATH";
pub const STARTING_CURRENCY_VAR: &str = "REALMS_STARTING_CURRENCY";
pub const LOG_VAR: &str = "REALMS_LOG";

const DEFAULT_CODEX_PATH: &str = "codex.json";
const DEFAULT_LOG_FILTER: &str = "realms_engine=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub codex_path: PathBuf,
    pub starting_currency: i32,
    /// Fallback tracing filter, used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            codex_path: PathBuf::from(DEFAULT_CODEX_PATH),
            starting_currency: STARTING_CURRENCY,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        load_dotenv_from_repo_root();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values read as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let starting_currency = match get(STARTING_CURRENCY_VAR) {
            Some(raw) => raw.parse::<i32>().with_context(|| {
                format!("{STARTING_CURRENCY_VAR} must be an integer, got {raw:?}")
            })?,
            None => defaults.starting_currency,
        };
        if starting_currency < 0 {
            anyhow::bail!("{STARTING_CURRENCY_VAR} must not be negative, got {starting_currency}");
        }

        Ok(Self {
            codex_path: get(CODEX_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.codex_path),
            starting_currency,
            log_filter: get(LOG_VAR).unwrap_or(defaults.log_filter),
        })
    }

    pub fn with_codex_path(mut self, path: impl AsRef<Path>) -> Self {
        self.codex_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_starting_currency(mut self, starting_currency: i32) -> Self {
        self.starting_currency = starting_currency;
        self
    }
}

fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
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
    fn defaults_when_unset() {
        let config = EngineConfig::from_lookup(lookup(&[])).expect("config");
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.starting_currency, 200);
        assert_eq!(config.codex_path, PathBuf::from("codex.json"));
    }

    #[test]
    fn reads_all_variables() {
        let config = EngineConfig::from_lookup(lookup(&[
            (CODEX_PATH_VAR, "/data/codex.json"),
            (STARTING_CURRENCY_VAR, " 350 "),
            (LOG_VAR, "realms_engine=debug"),
        ]))
        .expect("config");
        assert_eq!(config.codex_path, PathBuf::from("/data/codex.json"));
        assert_eq!(config.starting_currency, 350);
        assert_eq!(config.log_filter, "realms_engine=debug");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = EngineConfig::from_lookup(lookup(&[
            (CODEX_PATH_VAR, "  "),
            (STARTING_CURRENCY_VAR, ""),
        ]))
        .expect("config");
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn invalid_currency_is_an_error() {
        let err = EngineConfig::from_lookup(lookup(&[(STARTING_CURRENCY_VAR, "lots")]))
            .expect_err("should fail");
        assert!(err.to_string().contains(STARTING_CURRENCY_VAR));

        assert!(EngineConfig::from_lookup(lookup(&[(STARTING_CURRENCY_VAR, "-5")])).is_err());
    }

    #[test]
    fn builders_override() {
        let config = EngineConfig::default()
            .with_codex_path("other.json")
            .with_starting_currency(10);
        assert_eq!(config.codex_path, PathBuf::from("other.json"));
        assert_eq!(config.starting_currency, 10);
    }
}
