use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::cache::keys;
use crate::models::ApiResponse;
use crate::models::users::entities::User;
use crate::services::{get_cache, get_storage};

pub async fn list_users(request: &HttpRequest) -> ActixResult<HttpResponse> {
    let cache = get_cache(request)?;

    let users = match cache.recover::<Vec<User>>(keys::USERS).await {
        Some(users) => users,
        None => {
            let users = get_storage(request)?.list_users().await?;
            cache.register(keys::USERS, &users).await;
            users
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(users, "usuários listados")))
}
