use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::cache::keys;
use crate::errors::SchoolError;
use crate::models::ApiResponse;
use crate::models::profiles::requests::ProfileRequest;
use crate::services::{check, get_cache, get_storage};
use crate::utils::validate::validate_not_blank;

pub async fn update_profile(
    profile_id: i64,
    data: ProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    check(validate_not_blank(&data.name, "o nome do perfil é obrigatório!"))?;

    let storage = get_storage(request)?;

    if storage.get_profile_by_id(profile_id).await?.is_none() {
        return Err(SchoolError::validation("este perfil não existe!").into());
    }

    if let Some(existing) = storage.get_profile_by_name(&data.name).await?
        && existing.id != profile_id
    {
        return Err(SchoolError::validation("já existe um perfil com este nome!").into());
    }

    let profile = storage
        .update_profile(profile_id, data)
        .await?
        .ok_or_else(|| SchoolError::not_found("este perfil não existe!"))?;
    get_cache(request)?.invalidate(keys::PROFILES).await;

    info!("Profile {} updated", profile.id);
    Ok(HttpResponse::Ok().json(ApiResponse::success(profile, "perfil atualizado")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profiles::entities::Permissions;
    use crate::services::test_support::{TestContext, error_parts};
    use actix_web::http::StatusCode;

    fn named(name: &str, permissions: Permissions) -> ProfileRequest {
        ProfileRequest {
            name: name.to_string(),
            permissions,
        }
    }

    #[actix_web::test]
    async fn test_update_keeps_own_name() {
        let ctx = TestContext::new().await;
        let profile = ctx.profile("Secretaria", Permissions::default()).await;

        update_profile(profile.id, named("Secretaria", Permissions::all()), &ctx.request())
            .await
            .unwrap();

        let stored = ctx.storage.get_profile_by_id(profile.id).await.unwrap().unwrap();
        assert_eq!(stored.permissions, Permissions::all());
    }

    #[actix_web::test]
    async fn test_update_rejects_name_of_other_profile() {
        let ctx = TestContext::new().await;
        ctx.profile("Direção", Permissions::all()).await;
        let profile = ctx.profile("Secretaria", Permissions::default()).await;

        let err = update_profile(profile.id, named("Direção", Permissions::default()), &ctx.request())
            .await
            .unwrap_err();
        assert_eq!(error_parts(err).0, StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_update_missing_profile() {
        let ctx = TestContext::new().await;
        let err = update_profile(99, named("Fantasma", Permissions::default()), &ctx.request())
            .await
            .unwrap_err();
        assert_eq!(
            error_parts(err),
            (StatusCode::BAD_REQUEST, "este perfil não existe!".to_string())
        );
    }
}
