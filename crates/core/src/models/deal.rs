use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::inputs::DealInputs;
use super::result::DealResult;

/// Display name used when a deal is saved without one.
pub const DEFAULT_ITEM_NAME: &str = "Untitled";

/// Stable identifier of a saved deal.
///
/// Kept as an opaque string so collections written by older builds
/// (`d_<millis>` ids) still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DealId(String);

impl DealId {
    /// Fresh random id, `d_` followed by 32 hex digits.
    pub fn generate() -> Self {
        Self(format!("d_{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DealId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DealId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DealId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A saved deal: inputs and results as they were at save time.
///
/// Results are a snapshot. Loading a record never recomputes them, so a
/// later change to the formulas leaves history untouched. Records are
/// immutable once created; there is no edit path.
///
/// Serialized flat with camelCase keys:
/// `id, createdAt, item, notes, buy, sell, feePct, shipBuy, shipSell, misc, fee, net, roi, breakeven`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealRecord {
    pub id: DealId,

    /// Milliseconds since the Unix epoch
    pub created_at: i64,

    /// Display name, never blank
    pub item: String,

    #[serde(default)]
    pub notes: String,

    #[serde(flatten)]
    pub inputs: DealInputs,

    #[serde(flatten)]
    pub result: DealResult,
}

impl DealRecord {
    pub fn new(item: &str, notes: &str, inputs: DealInputs, result: DealResult) -> Self {
        Self::with_placeholder(item, notes, inputs, result, DEFAULT_ITEM_NAME)
    }

    /// Like [`DealRecord::new`] but with a caller-chosen name for blank items.
    pub fn with_placeholder(
        item: &str,
        notes: &str,
        inputs: DealInputs,
        result: DealResult,
        placeholder: &str,
    ) -> Self {
        let item = item.trim();
        Self {
            id: DealId::generate(),
            created_at: Utc::now().timestamp_millis(),
            item: if item.is_empty() {
                placeholder.to_string()
            } else {
                item.to_string()
            },
            notes: notes.trim().to_string(),
            inputs,
            result,
        }
    }

    /// Creation time as a UTC timestamp, `None` if `created_at` is out of range.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.created_at).single()
    }
}
