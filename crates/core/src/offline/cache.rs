use reqwest::Url;
use tracing::{debug, info, warn};

use crate::errors::CoreError;
use crate::models::settings::Settings;

use super::storage::{CacheStorage, CachedResponse};
use super::traits::AssetFetcher;

/// Where a served response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseSource {
    /// Found in a local cache
    Cache,
    /// Fetched from the network
    Network,
    /// Network failed; the cached root document was served instead
    Fallback,
}

/// Result of routing one request through the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Cross-origin: not ours, the host should fetch it directly.
    Passthrough,
    Served {
        response: CachedResponse,
        source: ResponseSource,
    },
    /// Network failed and no root document is cached.
    Unavailable,
}

/// Offline asset cache for the installable app shell.
///
/// Lifecycle:
/// 1. [`install`](Self::install) precaches the app shell into the cache
///    named after the current version (all or nothing).
/// 2. [`activate`](Self::activate) purges caches left by other versions.
/// 3. [`handle`](Self::handle) serves same-origin requests cache-first, falls
///    back to the network (keeping a copy of whatever it answered), and when
///    the network is gone serves the cached root document.
pub struct OfflineCache {
    name: String,
    base: Url,
    origin: String,
    precache: Vec<String>,
    storage: CacheStorage,
    fetcher: Box<dyn AssetFetcher>,
}

impl std::fmt::Debug for OfflineCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OfflineCache")
            .field("name", &self.name)
            .field("origin", &self.origin)
            .field("precache", &self.precache)
            .field("caches", &self.storage.keys())
            .field("fetcher", &self.fetcher.name())
            .finish()
    }
}

impl OfflineCache {
    /// `base` is the app's origin (e.g. `https://deals.example.com/`);
    /// precache paths are resolved against it.
    pub fn new(
        base: Url,
        name: impl Into<String>,
        precache: Vec<String>,
        fetcher: Box<dyn AssetFetcher>,
    ) -> Self {
        let origin = base.origin().ascii_serialization();
        Self {
            name: name.into(),
            base,
            origin,
            precache,
            storage: CacheStorage::new(),
            fetcher,
        }
    }

    /// Cache name and precache list taken from settings.
    pub fn from_settings(base: Url, settings: &Settings, fetcher: Box<dyn AssetFetcher>) -> Self {
        Self::new(base, settings.cache_name.clone(), settings.precache.clone(), fetcher)
    }

    /// Start from a previously saved snapshot instead of empty storage.
    pub fn with_storage(mut self, storage: CacheStorage) -> Self {
        self.storage = storage;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn storage(&self) -> &CacheStorage {
        &self.storage
    }

    pub fn into_storage(self) -> CacheStorage {
        self.storage
    }

    /// Fetch every precache asset and store them in the current cache.
    ///
    /// If any fetch fails or returns a non-2xx status nothing is stored.
    pub async fn install(&mut self) -> Result<(), CoreError> {
        let mut fetched = Vec::with_capacity(self.precache.len());

        for path in &self.precache {
            let url = self.base.join(path).map_err(|e| CoreError::Install {
                cache: self.name.clone(),
                message: format!("bad precache path '{path}': {e}"),
            })?;

            let response = self.fetcher.fetch(&url).await.map_err(|e| CoreError::Install {
                cache: self.name.clone(),
                message: format!("{url}: {e}"),
            })?;

            if !response.is_success() {
                return Err(CoreError::Install {
                    cache: self.name.clone(),
                    message: CoreError::Http {
                        status: response.status,
                        url: url.to_string(),
                    }
                    .to_string(),
                });
            }

            fetched.push((request_key(&url), response));
        }

        for (key, response) in fetched {
            self.storage.put(&self.name, &key, response);
        }
        info!(cache = %self.name, assets = self.precache.len(), "offline cache installed");
        Ok(())
    }

    /// Delete every cache whose name is not the current one.
    /// Returns the purged names.
    pub fn activate(&mut self) -> Vec<String> {
        let stale: Vec<String> = self
            .storage
            .keys()
            .into_iter()
            .filter(|k| k != &self.name)
            .collect();

        for name in &stale {
            self.storage.delete(name);
        }
        info!(cache = %self.name, purged = stale.len(), "offline cache activated");
        stale
    }

    /// Route one request.
    pub async fn handle(&mut self, url: &Url) -> FetchOutcome {
        if url.origin().ascii_serialization() != self.origin {
            return FetchOutcome::Passthrough;
        }

        let key = request_key(url);
        if let Some(cached) = self.storage.match_any(&key) {
            debug!(url = %key, "served from cache");
            return FetchOutcome::Served {
                response: cached.clone(),
                source: ResponseSource::Cache,
            };
        }

        match self.fetcher.fetch(url).await {
            Ok(response) => {
                // Any status is kept, error pages included.
                self.storage.put(&self.name, &key, response.clone());
                FetchOutcome::Served {
                    response,
                    source: ResponseSource::Network,
                }
            }
            Err(e) => {
                warn!(url = %key, error = %e, "network unavailable, falling back to cached root");
                let root = self.base.join("/").map(|u| request_key(&u));
                match root.ok().and_then(|k| self.storage.match_any(&k)) {
                    Some(doc) => FetchOutcome::Served {
                        response: doc.clone(),
                        source: ResponseSource::Fallback,
                    },
                    None => FetchOutcome::Unavailable,
                }
            }
        }
    }

    /// Look up a request without touching the network.
    pub fn lookup(&self, url: &Url) -> Result<&CachedResponse, CoreError> {
        let key = request_key(url);
        self.storage
            .match_any(&key)
            .ok_or(CoreError::CacheMiss(key))
    }
}

/// Cache key for a request: the URL without its fragment.
fn request_key(url: &Url) -> String {
    let mut url = url.clone();
    url.set_fragment(None);
    url.to_string()
}
