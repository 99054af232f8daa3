use serde::Deserialize;

use crate::instrument::Strategy;

/// Startup configuration. Every field has a default, so the binary runs
/// with no config at all; set `REDIS_LENS_CONFIG` to a JSON file path to
/// override any of them.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Redis connection URL
    #[serde(default = "default_redis_url")]
    pub redis_url: String,

    /// Address the demo server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// How pipelined commands are counted (`"round-trip"` or `"per-command"`)
    #[serde(default)]
    pub strategy: Strategy,
}

fn default_redis_url() -> String {
    "redis://127.0.0.1:6379/".into()
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_url: default_redis_url(),
            bind_addr: default_bind_addr(),
            strategy: Strategy::default(),
        }
    }
}

impl Config {
    /// Reads `$REDIS_LENS_CONFIG` if set, otherwise falls back to defaults.
    /// A present-but-broken config file is a startup error, not something
    /// to silently paper over.
    pub fn load() -> Self {
        let Some(path) = std::env::var_os("REDIS_LENS_CONFIG") else {
            return Self::default();
        };

        let raw = std::fs::read_to_string(&path).unwrap_or_else(|e| {
            eprintln!("❌ Cannot read config file {:?}: {e}", path);
            std::process::exit(1);
        });

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            eprintln!("❌ Invalid config file {:?}: {e}", path);
            std::process::exit(1);
        })
    }
}

// ─── Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let config: Config = serde_json::from_str("{}").expect("parse");
        assert_eq!(config.redis_url, "redis://127.0.0.1:6379/");
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.strategy, Strategy::RoundTrip);
    }

    #[test]
    fn strategy_parses_from_kebab_case() {
        let config: Config =
            serde_json::from_str(r#"{"strategy":"per-command"}"#).expect("parse");
        assert_eq!(config.strategy, Strategy::PerCommand);
    }
}
