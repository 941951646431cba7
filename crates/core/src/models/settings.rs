use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

use super::deal::DEFAULT_ITEM_NAME;

/// Storage slot holding the saved deals.
pub const DEFAULT_STORAGE_KEY: &str = "deal_analyzer_deals_v1";

/// Versioned name of the offline asset cache.
pub const DEFAULT_CACHE_NAME: &str = "deal-analyzer-v1";

/// Profit/ROI cut-offs for the verdict tiers.
///
/// Monetary thresholds are in the display currency; nothing is converted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerdictThresholds {
    pub good_net: f64,
    pub good_roi: f64,
    pub mid_net: f64,
    pub mid_roi: f64,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self {
            good_net: 40.0,
            good_roi: 15.0,
            mid_net: 10.0,
            mid_roi: 5.0,
        }
    }
}

/// User/app configuration. Every field has a default, so a partial JSON
/// file (or none at all) is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// ISO 4217 code used when formatting money (e.g., "EUR", "USD").
    pub currency: String,

    pub thresholds: VerdictThresholds,

    /// How many saved deals the UI shows.
    pub recent_limit: usize,

    /// Name given to deals saved with a blank item.
    pub placeholder_item: String,

    pub storage_key: String,

    pub cache_name: String,

    /// Same-origin paths fetched on install.
    pub precache: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "EUR".to_string(),
            thresholds: VerdictThresholds::default(),
            recent_limit: 8,
            placeholder_item: DEFAULT_ITEM_NAME.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            cache_name: DEFAULT_CACHE_NAME.to_string(),
            precache: vec!["/".to_string(), "/manifest.webmanifest".to_string()],
        }
    }
}

impl Settings {
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings)
    }

    /// Load settings from a JSON file (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
