use serde_json::Value;

use crate::models::inputs::{DealInputs, RawDealForm};

/// Turn user-typed text into a finite number.
///
/// - `None` counts as the empty string.
/// - Surrounding whitespace is ignored.
/// - The first `,` is read as a decimal separator ("12,5" → 12.5).
/// - Unsigned `0x`/`0b`/`0o` integer literals are read in their radix
///   ("0x1F" → 31).
/// - Anything that does not parse, or parses to NaN/±infinity, becomes `0.0`.
///
/// Never fails.
pub fn normalize(raw: Option<&str>) -> f64 {
    let text = raw.unwrap_or("").trim().replacen(',', ".", 1);
    let parsed = match radix_literal(&text) {
        Some((digits, radix)) => u128::from_str_radix(digits, radix).map(|n| n as f64).ok(),
        None => text.parse::<f64>().ok(),
    };
    match parsed {
        Some(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Split `0x1F` into `("1F", 16)`. Signs are not allowed before a prefix.
fn radix_literal(text: &str) -> Option<(&str, u32)> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0b" | "0B" => 2,
        "0o" | "0O" => 8,
        _ => return None,
    };
    // from_str_radix would accept "+1"
    let digits = &text[2..];
    if digits.starts_with('+') {
        return Some(("", radix));
    }
    Some((digits, radix))
}

/// [`normalize`] for untyped JSON values.
///
/// `null` is empty, strings are normalized, finite numbers pass through and
/// every other value (bool, array, object) yields `0.0`.
pub fn normalize_value(raw: &Value) -> f64 {
    match raw {
        Value::Null => 0.0,
        Value::String(s) => normalize(Some(s)),
        Value::Number(n) => n.as_f64().filter(|x| x.is_finite()).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Normalize every numeric field of a raw form.
pub fn normalize_form(form: &RawDealForm) -> DealInputs {
    DealInputs {
        buy: normalize(Some(&form.buy)),
        sell: normalize(Some(&form.sell)),
        fee_pct: normalize(Some(&form.fee_pct)),
        ship_buy: normalize(Some(&form.ship_buy)),
        ship_sell: normalize(Some(&form.ship_sell)),
        misc: normalize(Some(&form.misc)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_only_first_occurrence() {
        assert_eq!(normalize(Some("1,5")), 1.5);
        // "1.234.5" after replacement: not a number
        assert_eq!(normalize(Some("1,234.5")), 0.0);
    }

    #[test]
    fn radix_prefixes() {
        assert_eq!(normalize(Some("0x1F")), 31.0);
        assert_eq!(normalize(Some("0XfF")), 255.0);
        assert_eq!(normalize(Some("0b101")), 5.0);
        assert_eq!(normalize(Some("0o17")), 15.0);
        assert_eq!(normalize(Some(" 0x10 ")), 16.0);
    }

    #[test]
    fn malformed_radix_literals_are_zero() {
        assert_eq!(normalize(Some("0x")), 0.0);
        assert_eq!(normalize(Some("-0x10")), 0.0);
        assert_eq!(normalize(Some("0x+1")), 0.0);
        assert_eq!(normalize(Some("0b102")), 0.0);
        assert_eq!(normalize(Some("0x1.8")), 0.0);
    }

    #[test]
    fn infinity_spellings_are_zero() {
        assert_eq!(normalize(Some("inf")), 0.0);
        assert_eq!(normalize(Some("-Infinity")), 0.0);
        assert_eq!(normalize(Some("NaN")), 0.0);
        assert_eq!(normalize(Some("1e400")), 0.0);
    }
}
