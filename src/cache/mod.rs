//! 缓存层
//!
//! 后端以插件形式注册（moka 内存缓存、redis），启动时按 `cache.type` 选择。
//! 业务代码通过 `recover` / `register` / `invalidate` 以 JSON 形式读写对象。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

/// 业务缓存键
pub mod keys {
    pub const PROFILES: &str = "profiles";
    pub const USERS: &str = "users";
    pub const GRADES: &str = "grades";

    /// 某年级下审核中与待补充的合同
    pub fn under_analysis_and_pendent_contracts(grade_id: i64) -> String {
        format!("under-analysis-and-pendent-contracts:{grade_id}")
    }

    /// 某年级下生效中的合同
    pub fn active_contracts(grade_id: i64) -> String {
        format!("active-contracts:{grade_id}")
    }

    /// 已认证用户，按令牌缓存
    pub fn authenticated_user(token: &str) -> String {
        format!("user:{token}")
    }
}

/// 声明缓存插件，生成 `register_plugin()` 供启动时显式注册
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $ty:ty) => {
        pub const PLUGIN_NAME: &str = $name;

        pub fn register_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        <$ty>::new()
                            .map(|c| Box::new(c) as Box<dyn $crate::cache::ObjectCache>)
                            .map_err($crate::errors::SchoolError::cache_connection)
                    }) as $crate::cache::register::BoxedObjectCacheFuture
                }),
            );
        }
    };
}

impl dyn ObjectCache + '_ {
    /// 读取并反序列化缓存对象，缺失或损坏时返回 None
    pub async fn recover<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.get_raw(key).await {
            CacheResult::Found(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!("Corrupted cache entry '{}': {}", key, e);
                    self.remove(key).await;
                    None
                }
            },
            CacheResult::NotFound | CacheResult::ExistsButNoValue => None,
        }
    }

    /// 序列化并写入缓存，使用默认 TTL
    pub async fn register<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        self.register_with_ttl(key, value, 0).await;
    }

    pub async fn register_with_ttl<T: Serialize + ?Sized>(&self, key: &str, value: &T, ttl: u64) {
        match serde_json::to_string(value) {
            Ok(raw) => self.insert_raw(key.to_string(), raw, ttl).await,
            Err(e) => warn!("Failed to serialize cache entry '{}': {}", key, e),
        }
    }

    /// 使缓存失效
    pub async fn invalidate(&self, key: &str) {
        self.remove(key).await;
    }
}

#[cfg(test)]
mod tests {
    use super::object_cache::moka::MokaCacheWrapper;
    use super::*;

    #[test]
    fn test_keys() {
        assert_eq!(
            keys::under_analysis_and_pendent_contracts(7),
            "under-analysis-and-pendent-contracts:7"
        );
        assert_eq!(keys::active_contracts(3), "active-contracts:3");
        assert_eq!(keys::authenticated_user("abc"), "user:abc");
    }

    #[actix_web::test]
    async fn test_register_recover_invalidate() {
        let cache: Box<dyn ObjectCache> = Box::new(MokaCacheWrapper::with_settings(100, 60));

        assert!(cache.recover::<Vec<String>>(keys::GRADES).await.is_none());

        cache
            .register(keys::GRADES, &vec!["1º ano".to_string()])
            .await;
        let cached: Option<Vec<String>> = cache.recover(keys::GRADES).await;
        assert_eq!(cached, Some(vec!["1º ano".to_string()]));

        cache.invalidate(keys::GRADES).await;
        assert!(cache.recover::<Vec<String>>(keys::GRADES).await.is_none());
    }

    #[actix_web::test]
    async fn test_recover_drops_corrupted_entry() {
        let cache: Box<dyn ObjectCache> = Box::new(MokaCacheWrapper::with_settings(100, 60));
        cache
            .insert_raw(keys::USERS.to_string(), "not json".to_string(), 0)
            .await;

        assert!(cache.recover::<Vec<i64>>(keys::USERS).await.is_none());
        assert!(matches!(
            cache.get_raw(keys::USERS).await,
            CacheResult::NotFound
        ));
    }
}
