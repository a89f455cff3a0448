//! Server configuration from the environment
//!
//! - `AKADEMIX_DISPLAY_DIGITS`: significant digits shown (default 6, 1..=17)
//! - `AKADEMIX_PRECISION`: working precision in decimal digits (default 50)
//!
//! `RUST_LOG` is read by the log subscriber directly.

use std::env;

use akademix_core::DEFAULT_PRECISION;
use akademix_plugin::DEFAULT_DISPLAY_DIGITS;
use tracing::warn;

pub const DISPLAY_DIGITS_VAR: &str = "AKADEMIX_DISPLAY_DIGITS";
pub const PRECISION_VAR: &str = "AKADEMIX_PRECISION";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub display_digits: u32,
    pub precision: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            display_digits: DEFAULT_DISPLAY_DIGITS,
            precision: DEFAULT_PRECISION as u32,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Malformed values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();
        let display_digits = read_u32(&lookup, DISPLAY_DIGITS_VAR)
            .unwrap_or(defaults.display_digits)
            .clamp(1, 17);
        let precision = read_u32(&lookup, PRECISION_VAR)
            .filter(|p| *p > 0)
            .unwrap_or(defaults.precision);
        Config { display_digits, precision }
    }
}

fn read_u32(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<u32> {
    let raw = lookup(key)?;
    match raw.trim().parse::<u32>() {
        Ok(v) => Some(v),
        Err(e) => {
            warn!(key, value = %raw, error = %e, "ignoring malformed setting");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config(&[]), Config { display_digits: 6, precision: 50 });
    }

    #[test]
    fn test_overrides() {
        let cfg = config(&[(DISPLAY_DIGITS_VAR, "4"), (PRECISION_VAR, "80")]);
        assert_eq!(cfg.display_digits, 4);
        assert_eq!(cfg.precision, 80);
    }

    #[test]
    fn test_clamps_and_rejects() {
        assert_eq!(config(&[(DISPLAY_DIGITS_VAR, "40")]).display_digits, 17);
        assert_eq!(config(&[(DISPLAY_DIGITS_VAR, "0")]).display_digits, 1);
        assert_eq!(config(&[(DISPLAY_DIGITS_VAR, "six")]).display_digits, 6);
        assert_eq!(config(&[(PRECISION_VAR, "0")]).precision, 50);
    }
}
