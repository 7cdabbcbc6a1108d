use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;

pub struct MokaCacheWrapper {
    inner: Cache<String, String>,
}

impl MokaCacheWrapper {
    pub fn new(max_capacity: u64, ttl_secs: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(std::time::Duration::from_secs(ttl_secs))
            .build();

        debug!(
            "MokaCacheWrapper initialized with max capacity: {}",
            max_capacity
        );
        Self { inner }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.cache.max_capacity, config.cache.default_ttl)
    }
}

#[async_trait]
impl ObjectCache for MokaCacheWrapper {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        if let Some(value) = self.inner.get(key).await {
            debug!("Session cache hit: {}", key);
            CacheResult::Found(value)
        } else {
            CacheResult::NotFound
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        // TTL 在构建时全局设置，单条 ttl 被忽略
        self.inner.insert(key, value).await;
        if ttl != 0 {
            debug!("Moka cache ignores per-item TTL, using global TTL configuration");
        }
    }

    async fn remove(&self, key: &str) {
        self.inner.invalidate(key).await;
    }

    async fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_insert_then_get() {
        let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::new(16, 60));
        cache.insert("user:abc".to_string(), &42i64, 0).await;
        assert_eq!(cache.get::<i64>("user:abc").await, CacheResult::Found(42));
    }

    #[tokio::test]
    async fn test_remove() {
        let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::new(16, 60));
        cache.insert_raw("k".to_string(), "v".to_string(), 0).await;
        cache.remove("k").await;
        assert_eq!(cache.get_raw("k").await, CacheResult::NotFound);
    }

    #[tokio::test]
    async fn test_undecodable_value() {
        let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::new(16, 60));
        cache
            .insert_raw("k".to_string(), "not json".to_string(), 0)
            .await;
        assert_eq!(
            cache.get::<i64>("k").await,
            CacheResult::ExistsButNoValue
        );
    }
}
