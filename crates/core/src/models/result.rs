use serde::{Deserialize, Serialize};

/// Values derived from a [`DealInputs`](super::inputs::DealInputs).
///
/// Always finite: degenerate denominators produce `0.0`, never NaN or infinity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DealResult {
    /// Marketplace fee charged on the sale
    pub fee: f64,

    /// Net profit after every fee and cost
    pub net: f64,

    /// Net profit as a percentage of buy + buy-side shipping + misc
    pub roi: f64,

    /// Minimum sale price at which net profit is zero
    pub breakeven: f64,
}
