use serde::{Deserialize, Serialize};

use super::inputs::DealInputs;
use super::result::DealResult;
use super::verdict::Verdict;

/// Everything the result panel needs for one set of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub inputs: DealInputs,
    pub result: DealResult,
    pub verdict: Verdict,
}
