use async_trait::async_trait;
use redis::{AsyncCommands, RedisResult, aio::MultiplexedConnection};
use tokio::sync::OnceCell;
use tracing::{debug, error};

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("redis", RedisObjectCache);

/// Redis 缓存后端
///
/// 所有键都加上配置的前缀，多路复用连接在首次使用时建立并在之后共享。
/// 后端故障只记录日志，调用方按未命中处理后回源数据库。
pub struct RedisObjectCache {
    client: redis::Client,
    connection: OnceCell<MultiplexedConnection>,
    key_prefix: String,
    default_ttl: u64,
}

impl RedisObjectCache {
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        let redis = &config.cache.redis;

        let client = redis::Client::open(redis.url.as_str())
            .map_err(|e| format!("Invalid Redis URL '{}': {e}", redis.url))?;

        // 启动阶段同步 PING，连不上就交给注册表回退到内存缓存
        let mut conn = client
            .get_connection()
            .map_err(|e| format!("Redis connection failed: {e}"))?;
        redis::cmd("PING")
            .query::<String>(&mut conn)
            .map_err(|e| format!("Redis ping failed: {e}"))?;

        debug!(
            "Redis cache ready at {} (prefix '{}', default TTL {}s)",
            redis.url, redis.key_prefix, config.cache.default_ttl
        );

        Ok(Self {
            client,
            connection: OnceCell::new(),
            key_prefix: redis.key_prefix.clone(),
            default_ttl: config.cache.default_ttl,
        })
    }

    async fn connection(&self) -> RedisResult<MultiplexedConnection> {
        self.connection
            .get_or_try_init(|| self.client.get_multiplexed_async_connection())
            .await
            .cloned()
    }

    fn prefixed(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl ObjectCache for RedisObjectCache {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        let result: RedisResult<Option<String>> = match self.connection().await {
            Ok(mut conn) => conn.get(self.prefixed(key)).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(Some(data)) => CacheResult::Found(data),
            Ok(None) => CacheResult::NotFound,
            Err(e) => {
                error!("Redis GET '{}' failed: {}", key, e);
                CacheResult::ExistsButNoValue
            }
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        let ttl = if ttl == 0 { self.default_ttl } else { ttl };
        let result: RedisResult<()> = match self.connection().await {
            Ok(mut conn) => conn.set_ex(self.prefixed(&key), value, ttl).await,
            Err(e) => Err(e),
        };

        if let Err(e) = result {
            error!("Redis SET '{}' failed: {}", key, e);
        }
    }

    async fn remove(&self, key: &str) {
        let result: RedisResult<i64> = match self.connection().await {
            Ok(mut conn) => conn.del(self.prefixed(key)).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(0) => debug!("Cache key '{}' was already absent", key),
            Ok(_) => debug!("Removed cache key '{}'", key),
            Err(e) => error!("Redis DEL '{}' failed: {}", key, e),
        }
    }
}
