use crate::models::inputs::DealInputs;
use crate::models::result::DealResult;

/// Derive fee, net profit, ROI and breakeven price from a deal's inputs.
///
/// ```text
/// fee       = sell * fee_pct / 100
/// net       = sell - fee - ship_sell - buy - ship_buy - misc
/// cost      = buy + ship_buy + misc
/// roi       = cost > 0 ? net / cost * 100 : 0
/// denom     = 1 - fee_pct / 100
/// breakeven = denom > 0 ? (buy + ship_buy + misc + ship_sell) / denom : 0
/// ```
///
/// ROI is measured against acquisition cost only; the fee and sell-side
/// shipping scale with the sale and are left out of the denominator.
/// Breakeven solves `net = 0` for `sell`. Pure and total: the operation
/// order above is kept so results are bit-for-bit reproducible, and any
/// value that overflows to NaN or infinity is reported as `0.0`.
pub fn calculate(inputs: &DealInputs) -> DealResult {
    let DealInputs {
        buy,
        sell,
        fee_pct,
        ship_buy,
        ship_sell,
        misc,
    } = *inputs;

    let fee = sell * fee_pct / 100.0;
    let net = sell - fee - ship_sell - buy - ship_buy - misc;

    let cost = buy + ship_buy + misc;
    let roi = if cost > 0.0 { (net / cost) * 100.0 } else { 0.0 };

    let denom = 1.0 - fee_pct / 100.0;
    let breakeven = if denom > 0.0 {
        (buy + ship_buy + misc + ship_sell) / denom
    } else {
        0.0
    };

    DealResult {
        fee: finite_or_zero(fee),
        net: finite_or_zero(net),
        roi: finite_or_zero(roi),
        breakeven: finite_or_zero(breakeven),
    }
}

/// Finite inputs can still overflow (`1e308 + 1e308`); results never carry
/// NaN or infinity, which JSON would store as `null`.
fn finite_or_zero(x: f64) -> f64 {
    if x.is_finite() {
        x
    } else {
        0.0
    }
}
