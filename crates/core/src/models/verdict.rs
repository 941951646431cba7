use serde::{Deserialize, Serialize};

/// Qualitative tier of a deal, best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Worth buying
    Good,
    /// Marginal
    Mid,
    /// Skip it
    Bad,
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tone::Good => write!(f, "good"),
            Tone::Mid => write!(f, "mid"),
            Tone::Bad => write!(f, "bad"),
        }
    }
}

/// Classification of a deal. Only the tone is domain data; `label()` is a
/// default English wording the presentation layer may replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub tone: Tone,
}

impl Verdict {
    pub fn new(tone: Tone) -> Self {
        Self { tone }
    }

    pub fn label(&self) -> &'static str {
        match self.tone {
            Tone::Good => "GOOD DEAL",
            Tone::Mid => "OK / MAYBE",
            Tone::Bad => "SKIP",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
