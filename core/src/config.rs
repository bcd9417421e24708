use serde::{Deserialize, Serialize};
use wattmap_types::VizColumn;

use crate::error::ConfigError;

/// Name passed to confy; decides the on-disk config location.
const APP_NAME: &str = "wattmap";

pub const DEFAULT_DATASET_URL: &str =
    "https://state-energy-information.jonathan-keys.com/energy-by-state-and-type.csv";
pub const DEFAULT_SUMMARY_URL: &str = "https://api.jonathan-keys.com/state";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub dataset_url: String,
    pub summary_url: String,
    /// Metric column driving the map color scale.
    #[serde(default)]
    pub viz_column: VizColumn,
    /// Per-request timeout for the summary endpoint, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_url: DEFAULT_DATASET_URL.to_string(),
            summary_url: DEFAULT_SUMMARY_URL.to_string(),
            viz_column: VizColumn::default(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// Load from the platform config directory, falling back to defaults.
    pub fn load() -> Self {
        confy::load(APP_NAME, None).unwrap_or_default()
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, None, self).map_err(ConfigError::Save)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_known_endpoints() {
        let config = AppConfig::default();
        assert!(config.dataset_url.ends_with(".csv"));
        assert_eq!(config.viz_column, VizColumn::PercentRenewableConsumption);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = AppConfig {
            viz_column: VizColumn::TotalProduction,
            ..AppConfig::default()
        };
        let text = toml::to_string(&config).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.viz_column, VizColumn::TotalProduction);
        assert_eq!(back.summary_url, config.summary_url);
    }
}
