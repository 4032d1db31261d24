use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::cache::keys;
use crate::errors::SchoolError;
use crate::models::ApiResponse;
use crate::models::profiles::requests::ProfileRequest;
use crate::services::{check, get_cache, get_storage};
use crate::utils::validate::validate_not_blank;

pub async fn create_profile(
    data: ProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    check(validate_not_blank(&data.name, "o nome do perfil é obrigatório!"))?;

    let storage = get_storage(request)?;

    if storage.get_profile_by_name(&data.name).await?.is_some() {
        return Err(SchoolError::validation("já existe um perfil com este nome!").into());
    }

    let profile = storage.create_profile(data).await?;
    get_cache(request)?.invalidate(keys::PROFILES).await;

    info!("Profile {} created", profile.id);
    Ok(HttpResponse::Created().json(ApiResponse::success(profile, "perfil criado")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profiles::entities::{Permissions, Profile};
    use crate::services::test_support::{TestContext, body_json, error_parts};
    use actix_web::http::StatusCode;

    fn request_body(name: &str) -> ProfileRequest {
        ProfileRequest {
            name: name.to_string(),
            permissions: Permissions {
                pay_debits_permiss: true,
                ..Default::default()
            },
        }
    }

    #[actix_web::test]
    async fn test_create_profile_invalidates_cache() {
        let ctx = TestContext::new().await;
        ctx.cache
            .register::<Vec<Profile>>(keys::PROFILES, &Vec::new())
            .await;

        let response = create_profile(request_body("Tesouraria"), &ctx.request())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["data"]["name"], "Tesouraria");
        assert_eq!(body["data"]["pay_debits_permiss"], true);
        assert_eq!(body["data"]["crud_users_permiss"], false);
        assert!(ctx.cache.recover::<Vec<Profile>>(keys::PROFILES).await.is_none());
    }

    #[actix_web::test]
    async fn test_duplicated_name_is_rejected() {
        let ctx = TestContext::new().await;
        create_profile(request_body("Tesouraria"), &ctx.request())
            .await
            .unwrap();

        let err = create_profile(request_body("Tesouraria"), &ctx.request())
            .await
            .unwrap_err();
        assert_eq!(
            error_parts(err),
            (
                StatusCode::BAD_REQUEST,
                "já existe um perfil com este nome!".to_string()
            )
        );
    }
}
