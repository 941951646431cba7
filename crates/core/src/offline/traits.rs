use async_trait::async_trait;
use reqwest::Url;

use crate::errors::CoreError;

use super::storage::CachedResponse;

/// Network side of the offline cache.
///
/// Implementations return `Ok` for any HTTP response, including 4xx/5xx,
/// and `Err` only when no response arrived at all (offline, DNS, timeout).
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AssetFetcher: Send + Sync {
    /// Human-readable name (for logs/errors).
    fn name(&self) -> &str;

    async fn fetch(&self, url: &Url) -> Result<CachedResponse, CoreError>;
}
