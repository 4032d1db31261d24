use crate::cache::{
    ObjectCache,
    register::{get_object_cache_plugin, register_builtin_plugins},
};
use crate::config::AppConfig;
use crate::errors::{Result, SchoolError};
use crate::models::profiles::{entities::Permissions, requests::ProfileRequest};
use crate::models::users::requests::CreateUserRequest;
use crate::providers::Providers;
use crate::storage::{Storage, sea_orm_storage::SeaOrmStorage};
use crate::utils::password::hash_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 初始管理员使用的权限配置名称
pub const ADMIN_PROFILE: &str = "Administrador";

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
    pub providers: Providers,
}

/// 按名称构造缓存后端
async fn build_cache(name: &str) -> Option<Arc<dyn ObjectCache>> {
    let constructor = get_object_cache_plugin(name)?;
    match constructor().await {
        Ok(cache) => {
            warn!("Successfully created {} cache backend", name);
            Some(Arc::from(cache))
        }
        Err(e) => {
            warn!("Failed to create {} cache: {}", name, e);
            None
        }
    }
}

/// 创建缓存实例，配置的后端不可用时回退到 moka
async fn create_cache() -> Result<Arc<dyn ObjectCache>> {
    let cache_type = &AppConfig::get().cache.cache_type;
    warn!("Attempting to create {} cache backend", cache_type);

    if let Some(cache) = build_cache(cache_type).await {
        return Ok(cache);
    }

    if cache_type != "moka" {
        warn!("Falling back to memory cache");
        if let Some(cache) = build_cache("moka").await {
            return Ok(cache);
        }
    }

    Err(SchoolError::cache_plugin_not_found(format!(
        "No cache backend available (tried: {cache_type})"
    )))
}

/// 生成随机密码
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// 初始化默认管理员账号
/// 数据库中没有任何用户时，创建拥有全部权限的 admin 账号
pub async fn seed_admin(storage: &Arc<dyn Storage>) -> Result<()> {
    let users = storage.list_users().await?;
    if !users.is_empty() {
        debug!(
            "Database already has {} user(s), skipping admin seed",
            users.len()
        );
        return Ok(());
    }
    info!("No users found in database, creating default admin account...");

    let profile = match storage.get_profile_by_name(ADMIN_PROFILE).await? {
        Some(profile) => profile,
        None => {
            storage
                .create_profile(ProfileRequest {
                    name: ADMIN_PROFILE.to_string(),
                    permissions: Permissions::all(),
                })
                .await?
        }
    };

    // 获取密码：优先从环境变量，否则生成随机密码
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated admin password: {}", pwd);
        warn!("  Please save this password or set ADMIN_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    let user = storage
        .create_user(CreateUserRequest {
            username: "admin".to_string(),
            password: hash_password(&password)?,
            profile_id: profile.id,
        })
        .await?;

    info!(
        "Default admin account created successfully (ID: {}, username: {})",
        user.id, user.username
    );
    Ok(())
}

/// 准备服务器启动的上下文
/// 包括存储、缓存与外部服务提供者
pub async fn prepare_server_startup() -> Result<StartupContext> {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    register_builtin_plugins();
    if cfg!(debug_assertions) {
        crate::cache::register::debug_object_cache_registry();
        debug!("Debug mode: Cache registry is enabled");
    }

    let storage: Arc<dyn Storage> = Arc::new(SeaOrmStorage::new_async().await?);
    warn!("Storage backend initialized and migrations completed");

    // 初始化默认管理员账号（如果需要）
    if let Err(e) = seed_admin(&storage).await {
        warn!("Failed to seed admin account: {}", e);
    }

    let cache = create_cache().await?;
    warn!("Cache backend initialized");

    let providers = Providers::from_config(AppConfig::get())?;
    warn!("Providers initialized");

    Ok(StartupContext {
        storage,
        cache,
        providers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::password::verify_password;

    #[actix_web::test]
    async fn test_seed_admin_only_on_empty_database() {
        let storage: Arc<dyn Storage> =
            Arc::new(SeaOrmStorage::connect("sqlite::memory:").await.unwrap());

        // SAFETY: 测试进程内只有这里读写该变量
        unsafe { std::env::set_var("ADMIN_PASSWORD", "admin-secret") };
        seed_admin(&storage).await.unwrap();

        let admin = storage.get_user_by_username("admin").await.unwrap().unwrap();
        assert!(verify_password("admin-secret", &admin.password_hash));
        let profile = storage
            .get_profile_by_id(admin.profile_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(profile.name, ADMIN_PROFILE);
        assert_eq!(profile.permissions, Permissions::all());

        seed_admin(&storage).await.unwrap();
        assert_eq!(storage.list_users().await.unwrap().len(), 1);
    }
}
