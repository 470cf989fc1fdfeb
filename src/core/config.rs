//! Landing page configuration
//!
//! The SSR host reads settings from environment variables (after
//! `dotenvy::dotenv()`), validates them and embeds the result as JSON in the
//! page head. The hydrated client reads the same JSON back, so both sides
//! classify scroll positions identically.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::reveal::RevealSequencer;
use super::scroll::{DEFAULT_STICKY_OFFSET, ScrollTracker};
use super::theme::{ScrollMetric, ThemeBreakpoints};
use super::viewport::ObserverOptions;

/// Element id of the embedded JSON config
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

pub const ENV_THEME_METRIC: &str = "LANDING_THEME_METRIC";
pub const ENV_THEME_BREAKPOINTS: &str = "LANDING_THEME_BREAKPOINTS";
pub const ENV_NAV_OFFSET: &str = "LANDING_NAV_OFFSET";
pub const ENV_REVEAL_STEP_MS: &str = "LANDING_REVEAL_STEP_MS";
pub const ENV_SUBTEXT_DELAY_MS: &str = "LANDING_SUBTEXT_DELAY_MS";
pub const ENV_OBSERVER_THRESHOLD: &str = "LANDING_OBSERVER_THRESHOLD";
pub const ENV_LOG_FILTER: &str = "RUST_LOG";

/// Tunables shared by the server render and the hydrated client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub breakpoints: ThemeBreakpoints,
    /// Scroll offset (px) after which the navbar floats
    pub sticky_offset: f64,
    pub reveal_step_ms: u64,
    pub subtext_delay_ms: u64,
    /// Visible ratio that fires section reveals
    pub observer_threshold: f64,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            breakpoints: ThemeBreakpoints::default(),
            sticky_offset: DEFAULT_STICKY_OFFSET,
            reveal_step_ms: 200,
            subtext_delay_ms: 500,
            observer_threshold: 0.1,
        }
    }
}

impl LandingConfig {
    /// Build from a variable lookup, starting from defaults for anything
    /// unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(metric) = lookup(ENV_THEME_METRIC) {
            config.breakpoints.metric = parse_metric(&metric)?;
            // Pixel mode without explicit breakpoints gets pixel defaults
            if config.breakpoints.metric == ScrollMetric::Pixels {
                config.breakpoints.lower = 800.0;
                config.breakpoints.upper = 1600.0;
            }
        }
        if let Some(pair) = lookup(ENV_THEME_BREAKPOINTS) {
            let (lower, upper) = parse_pair(ENV_THEME_BREAKPOINTS, &pair)?;
            config.breakpoints.lower = lower;
            config.breakpoints.upper = upper;
        }
        if let Some(value) = lookup(ENV_NAV_OFFSET) {
            config.sticky_offset = parse_number(ENV_NAV_OFFSET, &value)?;
        }
        if let Some(value) = lookup(ENV_REVEAL_STEP_MS) {
            config.reveal_step_ms = parse_number(ENV_REVEAL_STEP_MS, &value)?;
        }
        if let Some(value) = lookup(ENV_SUBTEXT_DELAY_MS) {
            config.subtext_delay_ms = parse_number(ENV_SUBTEXT_DELAY_MS, &value)?;
        }
        if let Some(value) = lookup(ENV_OBSERVER_THRESHOLD) {
            config.observer_threshold = parse_number(ENV_OBSERVER_THRESHOLD, &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ThemeBreakpoints { lower, upper, .. } = self.breakpoints;
        if !(lower >= 0.0 && lower < upper && upper.is_finite()) {
            return Err(ConfigError::InvertedBreakpoints { lower, upper });
        }
        if !(self.sticky_offset.is_finite() && self.sticky_offset >= 0.0) {
            return Err(ConfigError::InvalidOffset(self.sticky_offset));
        }
        if !(0.0..=1.0).contains(&self.observer_threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.observer_threshold));
        }
        Ok(())
    }

    pub fn to_json(&self) -> String {
        // Plain numbers and enums only; serialization cannot fail
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn scroll_tracker(&self) -> ScrollTracker {
        ScrollTracker::new(self.breakpoints, self.sticky_offset)
    }

    pub fn reveal_sequencer(&self, len: usize) -> RevealSequencer {
        RevealSequencer::new(
            len,
            Duration::from_millis(self.reveal_step_ms),
            Duration::from_millis(self.subtext_delay_ms),
        )
    }

    pub fn observer_options(&self) -> ObserverOptions {
        ObserverOptions::new(self.observer_threshold)
    }
}

fn parse_metric(value: &str) -> Result<ScrollMetric, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "percent" | "percentage" => Ok(ScrollMetric::Percent),
        "pixels" | "px" => Ok(ScrollMetric::Pixels),
        _ => Err(ConfigError::UnknownMetric(value.to_string())),
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            name,
            value: value.to_string(),
        })
}

fn parse_pair(name: &'static str, value: &str) -> Result<(f64, f64), ConfigError> {
    let malformed = || ConfigError::MalformedPair {
        name,
        value: value.to_string(),
    };
    let (lower, upper) = value.split_once(',').ok_or_else(malformed)?;
    if upper.contains(',') {
        return Err(malformed());
    }
    Ok((parse_number(name, lower)?, parse_number(name, upper)?))
}

/// Host process configuration loaded from environment variables.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct Config {
    /// `tracing_subscriber` filter directive
    pub log_filter: String,
    pub landing: LandingConfig,
    /// Set when the `LANDING_*` variables were rejected and `landing` holds
    /// the defaults instead
    pub landing_error: Option<ConfigError>,
}

#[cfg(feature = "ssr")]
impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    /// Runs before the subscriber exists, so nothing is logged here.
    pub fn from_env() -> Self {
        let (landing, landing_error) =
            match LandingConfig::from_lookup(|name| std::env::var(name).ok()) {
                Ok(landing) => (landing, None),
                Err(err) => (LandingConfig::default(), Some(err)),
            };

        Self {
            log_filter: std::env::var(ENV_LOG_FILTER).unwrap_or_else(|_| "info".to_string()),
            landing,
            landing_error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::ScrollSample;
    use std::collections::HashMap;

    // Lookups go through a map instead of the process environment so the
    // tests stay thread safe
    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_empty_lookup_gives_defaults() {
        let config = LandingConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, LandingConfig::default());
        assert_eq!(config.breakpoints, ThemeBreakpoints::percent(35.0, 65.0));
    }

    #[test]
    fn test_pixel_metric_with_breakpoints() {
        let config = LandingConfig::from_lookup(lookup(&[
            (ENV_THEME_METRIC, "pixels"),
            (ENV_THEME_BREAKPOINTS, "800, 1600"),
            (ENV_NAV_OFFSET, "64"),
        ]))
        .unwrap();
        assert_eq!(config.breakpoints, ThemeBreakpoints::pixels(800.0, 1600.0));
        assert_eq!(config.sticky_offset, 64.0);
    }

    #[test]
    fn test_pixel_metric_alone_uses_pixel_defaults() {
        let config = LandingConfig::from_lookup(lookup(&[(ENV_THEME_METRIC, "px")])).unwrap();
        assert_eq!(config.breakpoints, ThemeBreakpoints::pixels(800.0, 1600.0));
    }

    #[test]
    fn test_invalid_values_are_reported() {
        let err = LandingConfig::from_lookup(lookup(&[(ENV_REVEAL_STEP_MS, "fast")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { name, .. } if name == ENV_REVEAL_STEP_MS));

        let err = LandingConfig::from_lookup(lookup(&[(ENV_THEME_METRIC, "vh")])).unwrap_err();
        assert_eq!(err, ConfigError::UnknownMetric("vh".to_string()));

        let err = LandingConfig::from_lookup(lookup(&[(ENV_THEME_BREAKPOINTS, "10")])).unwrap_err();
        assert!(matches!(err, ConfigError::MalformedPair { .. }));

        let err =
            LandingConfig::from_lookup(lookup(&[(ENV_THEME_BREAKPOINTS, "70,30")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvertedBreakpoints { .. }));

        let err =
            LandingConfig::from_lookup(lookup(&[(ENV_OBSERVER_THRESHOLD, "1.5")])).unwrap_err();
        assert_eq!(err, ConfigError::ThresholdOutOfRange(1.5));
    }

    #[test]
    fn test_non_finite_or_negative_numbers_are_rejected() {
        let err = LandingConfig::from_lookup(lookup(&[(ENV_NAV_OFFSET, "NaN")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOffset(offset) if offset.is_nan()));

        let err = LandingConfig::from_lookup(lookup(&[(ENV_NAV_OFFSET, "inf")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidOffset(f64::INFINITY));

        let err = LandingConfig::from_lookup(lookup(&[(ENV_NAV_OFFSET, "-10")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidOffset(-10.0));

        let err =
            LandingConfig::from_lookup(lookup(&[(ENV_THEME_BREAKPOINTS, "10,inf")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvertedBreakpoints { .. }));

        let err =
            LandingConfig::from_lookup(lookup(&[(ENV_THEME_BREAKPOINTS, "NaN,50")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvertedBreakpoints { .. }));

        // Embedded JSON goes through the same checks
        let json = r#"{"sticky_offset": -1.0}"#;
        assert_eq!(
            LandingConfig::from_json(json),
            Err(ConfigError::InvalidOffset(-1.0))
        );
    }

    #[test]
    fn test_accepted_offset_floats_the_navbar() {
        let config = LandingConfig::from_lookup(lookup(&[(ENV_NAV_OFFSET, "0")])).unwrap();
        let mut tracker = config.scroll_tracker();
        let state = tracker.sample(ScrollSample::new(5000.0, 10000.0, 800.0));
        assert_eq!(state.map(|s| s.is_scrolled), Some(true));
    }

    #[test]
    fn test_json_round_trip_and_partial_json() {
        let config = LandingConfig {
            sticky_offset: 80.0,
            ..LandingConfig::default()
        };
        assert_eq!(LandingConfig::from_json(&config.to_json()).unwrap(), config);

        // Missing fields fall back to defaults
        let partial = LandingConfig::from_json(r#"{"reveal_step_ms": 150}"#).unwrap();
        assert_eq!(partial.reveal_step_ms, 150);
        assert_eq!(partial.subtext_delay_ms, 500);

        assert!(matches!(
            LandingConfig::from_json("not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_builds_engines_from_settings() {
        let config = LandingConfig {
            reveal_step_ms: 100,
            observer_threshold: 0.25,
            ..LandingConfig::default()
        };
        let sequencer = config.reveal_sequencer(3);
        assert_eq!(sequencer.len(), 3);
        assert_eq!(sequencer.step_delay(), Duration::from_millis(100));
        assert_eq!(config.observer_options().threshold, 0.25);
        assert_eq!(config.scroll_tracker().breakpoints(), &config.breakpoints);
    }
}
