//! TTL caching for fetched market data
//!
//! Caching lives in the data layer, outside the indicator engine; the
//! engine always receives a freshly constructed series.

use cached::{Cached, TimedCache};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Cache key for market data requests
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    /// Stock symbol
    pub symbol: String,
    /// API endpoint or operation type
    pub endpoint: String,
    /// Additional parameters as JSON string
    pub params: String,
}

impl CacheKey {
    /// Create a new cache key
    pub fn new(
        symbol: impl Into<String>,
        endpoint: impl Into<String>,
        params: impl Serialize,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            endpoint: endpoint.into(),
            params: serde_json::to_string(&params).unwrap_or_default(),
        }
    }
}

/// Thread-safe TTL cache for JSON payloads
pub struct DataCache {
    cache: Arc<RwLock<TimedCache<CacheKey, serde_json::Value>>>,
}

impl DataCache {
    /// Create a new cache with the given TTL
    pub fn new(ttl: Duration) -> Self {
        Self {
            cache: Arc::new(RwLock::new(TimedCache::with_lifespan(ttl))),
        }
    }

    /// Get a value from the cache
    pub async fn get(&self, key: &CacheKey) -> Option<serde_json::Value> {
        let mut cache = self.cache.write().await;
        cache.cache_get(key).cloned()
    }

    /// Insert a value into the cache
    pub async fn insert(&self, key: CacheKey, value: serde_json::Value) {
        let mut cache = self.cache.write().await;
        let _ = cache.cache_set(key, value);
    }

    /// Get or fetch a value using the provided fetcher function
    pub async fn get_or_fetch<F, Fut, E>(
        &self,
        key: CacheKey,
        fetcher: F,
    ) -> std::result::Result<serde_json::Value, E>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = std::result::Result<serde_json::Value, E>>,
    {
        if let Some(value) = self.get(&key).await {
            tracing::debug!("Cache hit for key: {:?}", key);
            return Ok(value);
        }

        tracing::debug!("Cache miss for key: {:?}", key);

        let value = fetcher().await?;
        self.insert(key, value.clone()).await;

        Ok(value)
    }

    /// Invalidate a specific cache entry
    pub async fn invalidate(&self, key: &CacheKey) {
        let mut cache = self.cache.write().await;
        let _ = cache.cache_remove(key);
    }

    /// Clear all cached entries
    pub async fn clear(&self) {
        let mut cache = self.cache.write().await;
        cache.cache_clear();
    }

    /// Number of cached entries
    pub async fn len(&self) -> usize {
        let cache = self.cache.read().await;
        cache.cache_size()
    }

    /// Whether the cache is empty
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Clone for DataCache {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
        }
    }
}

/// Tiered caches for the two freshness classes this service deals in
pub struct CacheTiers {
    /// Quotes and candles, short TTL
    pub realtime: DataCache,
    /// News articles, medium TTL
    pub news: DataCache,
}

impl CacheTiers {
    /// Create tiers with explicit TTLs
    pub fn new(realtime_ttl: Duration, news_ttl: Duration) -> Self {
        Self {
            realtime: DataCache::new(realtime_ttl),
            news: DataCache::new(news_ttl),
        }
    }

    /// Default TTLs: one minute for quotes, five for news
    pub fn default_config() -> Self {
        Self::new(Duration::from_secs(60), Duration::from_secs(300))
    }

    /// Clear both tiers
    pub async fn clear_all(&self) {
        self.realtime.clear().await;
        self.news.clear().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cache_key_creation() {
        let key = CacheKey::new("AAPL", "quote", serde_json::json!({"foo": "bar"}));
        assert_eq!(key.symbol, "AAPL");
        assert_eq!(key.endpoint, "quote");
        assert!(key.params.contains("foo"));
    }

    #[tokio::test]
    async fn test_cache_insert_and_get() {
        let cache = DataCache::new(Duration::from_secs(60));
        let key = CacheKey::new("AAPL", "quote", serde_json::json!({}));
        let value = serde_json::json!({"price": 150.0});

        cache.insert(key.clone(), value.clone()).await;

        assert_eq!(cache.get(&key).await, Some(value));
    }

    #[tokio::test]
    async fn test_cache_get_or_fetch() {
        let cache = DataCache::new(Duration::from_secs(60));
        let key = CacheKey::new("AAPL", "quote", serde_json::json!({}));
        let value = serde_json::json!({"price": 150.0});

        let mut call_count = 0;
        let result = cache
            .get_or_fetch(key.clone(), || {
                call_count += 1;
                async { Ok::<_, String>(value.clone()) }
            })
            .await
            .expect("fetch succeeds");
        assert_eq!(result, value);
        assert_eq!(call_count, 1);

        // Second call is served from cache
        let result = cache
            .get_or_fetch(key.clone(), || async {
                call_count += 1;
                Ok::<_, String>(value.clone())
            })
            .await
            .expect("cached value");
        assert_eq!(result, value);
        assert_eq!(call_count, 1);
    }

    #[tokio::test]
    async fn test_cache_invalidation() {
        let cache = DataCache::new(Duration::from_secs(60));
        let key = CacheKey::new("AAPL", "quote", serde_json::json!({}));

        cache.insert(key.clone(), serde_json::json!({"price": 150.0})).await;
        assert!(cache.get(&key).await.is_some());

        cache.invalidate(&key).await;
        assert!(cache.get(&key).await.is_none());
    }

    #[tokio::test]
    async fn test_cache_tiers() {
        let tiers = CacheTiers::default_config();
        let key = CacheKey::new("AAPL", "quote", serde_json::json!({}));
        let value = serde_json::json!({"price": 150.0});

        tiers.realtime.insert(key.clone(), value.clone()).await;
        tiers.news.insert(key.clone(), value).await;

        assert_eq!(tiers.realtime.len().await, 1);
        assert_eq!(tiers.news.len().await, 1);

        tiers.clear_all().await;

        assert!(tiers.realtime.is_empty().await);
        assert!(tiers.news.is_empty().await);
    }
}
