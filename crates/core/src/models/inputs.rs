use serde::{Deserialize, Serialize};

/// The six numeric inputs of a deal, already normalized to finite numbers.
///
/// No sign constraint is enforced: a negative `buy` (e.g. a refund or store
/// credit) propagates arithmetically like any other value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealInputs {
    /// Purchase price
    pub buy: f64,

    /// Sale price
    pub sell: f64,

    /// Marketplace fee as a percentage of the sale price (12 = 12%)
    pub fee_pct: f64,

    /// Shipping paid when buying
    pub ship_buy: f64,

    /// Shipping paid when selling
    pub ship_sell: f64,

    /// Anything else (cleaning, authentication, packaging...)
    pub misc: f64,
}

impl DealInputs {
    pub fn new(
        buy: f64,
        sell: f64,
        fee_pct: f64,
        ship_buy: f64,
        ship_sell: f64,
        misc: f64,
    ) -> Self {
        Self {
            buy,
            sell,
            fee_pct,
            ship_buy,
            ship_sell,
            misc,
        }
    }
}

/// What the presentation layer hands to the engine: raw, user-typed text.
///
/// Numeric fields are kept as strings so that partially typed or
/// locale-formatted values ("12,5") survive until normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawDealForm {
    pub item: String,
    pub buy: String,
    pub sell: String,
    pub fee_pct: String,
    pub ship_buy: String,
    pub ship_sell: String,
    pub misc: String,
    pub notes: String,
}

impl Default for RawDealForm {
    fn default() -> Self {
        Self {
            item: "Nike / Streetwear item".to_string(),
            buy: "0".to_string(),
            sell: "0".to_string(),
            fee_pct: "12".to_string(),
            ship_buy: "0".to_string(),
            ship_sell: "0".to_string(),
            misc: "0".to_string(),
            notes: String::new(),
        }
    }
}
