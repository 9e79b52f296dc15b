//! Trial configuration from environment variables.

use std::path::PathBuf;

use anyhow::Context;

pub const DAYS_ENV: &str = "TRIAL_DAYS";
pub const OUTPUT_ENV: &str = "TRIAL_OUTPUT";

pub const DEFAULT_DAYS: u32 = 30;
pub const DEFAULT_OUTPUT: &str = "output.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialConfig {
    /// Number of simulated days.
    pub days: u32,
    /// File receiving the per-day snapshots.
    pub output: PathBuf,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl TrialConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let days = match lookup(DAYS_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("{DAYS_ENV} must be a non-negative integer, got {raw:?}"))?,
            None => {
                tracing::warn!("{DAYS_ENV} not set; defaulting to {DEFAULT_DAYS} days");
                DEFAULT_DAYS
            }
        };

        let output = lookup(OUTPUT_ENV)
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        Ok(Self { days, output })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_when_unset() {
        let config = TrialConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, TrialConfig::default());
    }

    #[test]
    fn reads_days_and_output() {
        let config =
            TrialConfig::from_lookup(lookup_from(&[(DAYS_ENV, " 7 "), (OUTPUT_ENV, "/tmp/log.json")]))
                .unwrap();
        assert_eq!(config.days, 7);
        assert_eq!(config.output, PathBuf::from("/tmp/log.json"));
    }

    #[test]
    fn rejects_unparsable_days() {
        let err = TrialConfig::from_lookup(lookup_from(&[(DAYS_ENV, "-3")])).unwrap_err();
        assert!(err.to_string().contains(DAYS_ENV));
    }

    #[test]
    fn blank_output_falls_back_to_default() {
        let config = TrialConfig::from_lookup(lookup_from(&[(OUTPUT_ENV, "  ")])).unwrap();
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
    }
}
