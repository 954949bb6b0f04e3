//! Configuration for host-facing knobs.
//!
//! Maps a small `wiresim.toml`:
//!
//! ```toml
//! [cycle]
//! max_ticks = 1000000
//! ```
//!
//! Defaults are hardcoded in the `Default` impls; a file, when present,
//! overrides them.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SimConfig {
    pub cycle: CycleConfig,
}

/// Loop-search limits. The algorithm always terminates on the finite state
/// space; the budget only bounds how long a host is willing to wait.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CycleConfig {
    /// Tick budget for the loop search. 0 disables the budget.
    pub max_ticks: u64,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            max_ticks: 1_000_000,
        }
    }
}

impl CycleConfig {
    /// Budget in the form [`crate::cycle::find_loop`] takes.
    pub fn budget(&self) -> Option<u64> {
        (self.max_ticks > 0).then_some(self.max_ticks)
    }
}

impl SimConfig {
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads a config file, falling back to defaults when it is absent.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        if !std::path::Path::new(path).exists() {
            return Ok(Self::default());
        }
        Self::from_toml(&std::fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimConfig::default();
        assert_eq!(config.cycle.max_ticks, 1_000_000);
        assert_eq!(config.cycle.budget(), Some(1_000_000));
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let config = SimConfig::from_toml("[cycle]\nmax_ticks = 500\n").unwrap();
        assert_eq!(config.cycle.max_ticks, 500);
    }

    #[test]
    fn test_zero_budget_means_unbounded() {
        let config = SimConfig::from_toml("[cycle]\nmax_ticks = 0\n").unwrap();
        assert_eq!(config.cycle.budget(), None);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = SimConfig::load("does-not-exist.toml").unwrap();
        assert_eq!(config.cycle.max_ticks, 1_000_000);
    }
}
