use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::cache::keys;
use crate::models::ApiResponse;
use crate::models::profiles::entities::Profile;
use crate::services::{get_cache, get_storage};

pub async fn list_profiles(request: &HttpRequest) -> ActixResult<HttpResponse> {
    let cache = get_cache(request)?;

    let profiles = match cache.recover::<Vec<Profile>>(keys::PROFILES).await {
        Some(profiles) => profiles,
        None => {
            let profiles = get_storage(request)?.list_profiles().await?;
            cache.register(keys::PROFILES, &profiles).await;
            profiles
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(profiles, "perfis listados")))
}
