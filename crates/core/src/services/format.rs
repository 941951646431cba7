//! Display helpers for the presentation layer: en-US style money with two
//! decimals and percentages with one decimal. Non-finite values render as zero.

/// Format an amount in the given ISO currency, e.g. `€1,234.50` or `-$3.00`.
///
/// Currencies without a known symbol are prefixed with their code and a space
/// (`CHF 12.00`).
pub fn format_money(amount: f64, currency: &str) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    // "-0.00" reads as zero
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };

    let code = currency.trim().to_uppercase();
    let prefix = match code.as_str() {
        "EUR" => "€".to_string(),
        "USD" => "$".to_string(),
        "GBP" => "£".to_string(),
        "JPY" => "¥".to_string(),
        _ => format!("{code} "),
    };

    format!("{sign}{prefix}{}.{frac_part}", group_thousands(int_part))
}

/// Format a percentage with one decimal, e.g. `82.9%`.
pub fn format_pct(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    format!("{value:.1}%")
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
