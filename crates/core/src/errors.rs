use thiserror::Error;

/// Error type for the fallible boundaries of deal-analyzer-core.
///
/// Domain operations (normalize, calculate, classify, store mutations) never
/// return it. It only surfaces from storage backends, explicit flushes and
/// the offline asset cache.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Storage / File ──────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("File I/O error: {0}")]
    FileIO(String),

    #[error("Deal '{0}' is already saved")]
    DuplicateDeal(String),

    #[error("Invalid storage key '{0}': only ASCII letters, digits, '_', '-' and '.' are allowed")]
    InvalidKey(String),

    // ── Network / Offline cache ─────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Not cached: {0}")]
    CacheMiss(String),

    #[error("Cache install failed for '{cache}': {message}")]
    Install { cache: String, message: String },
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<bincode::Error> for CoreError {
    fn from(e: bincode::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}

impl From<csv::Error> for CoreError {
    fn from(e: csv::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Asset URLs may carry cache-busting or auth query strings; keep them out of logs.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
