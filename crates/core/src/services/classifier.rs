use crate::models::settings::VerdictThresholds;
use crate::models::verdict::{Tone, Verdict};

/// Classify a deal with the default thresholds (net ≥ 40 and ROI ≥ 15% is
/// good, net ≥ 10 and ROI ≥ 5% is mid, anything else is bad).
pub fn classify(net: f64, roi: f64) -> Verdict {
    classify_with(&VerdictThresholds::default(), net, roi)
}

/// Classify a deal against custom thresholds. First matching tier wins;
/// both bounds are inclusive.
pub fn classify_with(thresholds: &VerdictThresholds, net: f64, roi: f64) -> Verdict {
    let tone = if net >= thresholds.good_net && roi >= thresholds.good_roi {
        Tone::Good
    } else if net >= thresholds.mid_net && roi >= thresholds.mid_roi {
        Tone::Mid
    } else {
        Tone::Bad
    };
    Verdict::new(tone)
}
