//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default flush interval for the fixed-interval strategy (ms).
pub const DEFAULT_INTERVAL_MS: u64 = 16;

/// Default frame cadence for the frame-driven strategies (ms, ~60 Hz).
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

/// Global application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Flush scheduling strategy for the dispatcher.
    pub timing: TimingConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Flush scheduling strategy.
///
/// Selected once at dispatcher construction. An unrecognized strategy name
/// falls back to [`TimingConfig::default`] instead of failing; see
/// [`TimingConfig::from_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum TimingConfig {
    /// Flush unconditionally every `interval_ms`, bulk sampling.
    FixedInterval { interval_ms: u64 },

    /// Flush exactly at the soonest upcoming movement boundary,
    /// single-step sampling.
    Minimal,

    /// Ignore wall-clock delay entirely: drain each point's queue
    /// synchronously, one movement per step.
    Instant,

    /// Flush on every frame tick, bulk sampling.
    PeriodicFrame { frame_interval_ms: u64 },

    /// Flush on every frame tick with the sampled time jumped to the
    /// soonest movement boundary, single-step sampling.
    FastPeriodicFrame { frame_interval_ms: u64 },
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::FixedInterval {
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

impl TimingConfig {
    /// Resolve a strategy by name, with an optional numeric parameter
    /// (interval for `fixed_interval`, frame cadence for the frame
    /// strategies).
    ///
    /// Unknown names fall back to the fixed-interval default rather than
    /// failing construction.
    pub fn from_name(name: &str, param_ms: Option<u64>) -> Self {
        match name {
            "fixed_interval" => Self::FixedInterval {
                interval_ms: param_ms.unwrap_or(DEFAULT_INTERVAL_MS),
            },
            "minimal" => Self::Minimal,
            "instant" => Self::Instant,
            "periodic_frame" => Self::PeriodicFrame {
                frame_interval_ms: param_ms.unwrap_or(DEFAULT_FRAME_INTERVAL_MS),
            },
            "fast_periodic_frame" => Self::FastPeriodicFrame {
                frame_interval_ms: param_ms.unwrap_or(DEFAULT_FRAME_INTERVAL_MS),
            },
            other => {
                tracing::warn!(
                    strategy = other,
                    "Unrecognized timing strategy, falling back to fixed_interval"
                );
                Self::default()
            }
        }
    }

    /// Canonical name used in config files and CLI flags.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FixedInterval { .. } => "fixed_interval",
            Self::Minimal => "minimal",
            Self::Instant => "instant",
            Self::PeriodicFrame { .. } => "periodic_frame",
            Self::FastPeriodicFrame { .. } => "fast_periodic_frame",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "ghosthand=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("ghosthand").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_strategy_falls_back_to_fixed_interval() {
        let timing = TimingConfig::from_name("warp_speed", Some(5));
        assert_eq!(timing, TimingConfig::default());
    }

    #[test]
    fn test_strategy_names_round_trip() {
        for name in [
            "fixed_interval",
            "minimal",
            "instant",
            "periodic_frame",
            "fast_periodic_frame",
        ] {
            let timing = TimingConfig::from_name(name, None);
            assert_eq!(timing.name(), name);
        }
    }

    #[test]
    fn test_timing_config_serde_tag() {
        let timing = TimingConfig::FixedInterval { interval_ms: 20 };
        let json = serde_json::to_string(&timing).unwrap();
        assert!(json.contains("\"strategy\":\"fixed_interval\""));
        assert!(json.contains("\"interval_ms\":20"));

        let parsed: TimingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, timing);
    }
}
