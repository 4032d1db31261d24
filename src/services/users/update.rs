use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::cache::keys;
use crate::errors::SchoolError;
use crate::models::ApiResponse;
use crate::models::users::requests::UpdateUserRequest;
use crate::services::{check, get_cache, get_storage};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_password, validate_username};

pub async fn update_user(
    user_id: i64,
    mut update_data: UpdateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    check(validate_username(&update_data.username))?;
    check(validate_password(&update_data.password))?;

    let storage = get_storage(request)?;

    if let Some(existing) = storage.get_user_by_username(&update_data.username).await?
        && existing.id != user_id
    {
        return Err(SchoolError::validation("este nome de usuário já está em uso!").into());
    }

    if storage
        .get_profile_by_id(update_data.profile_id)
        .await?
        .is_none()
    {
        return Err(SchoolError::validation(
            "não é possível atualizar um usuário com um perfil inexistente!",
        )
        .into());
    }

    if storage.get_user_by_id(user_id).await?.is_none() {
        return Err(SchoolError::validation("este usuário não existe!").into());
    }

    update_data.password = hash_password(&update_data.password)?;

    let user = storage
        .update_user(user_id, update_data)
        .await?
        .ok_or_else(|| SchoolError::not_found("este usuário não existe!"))?;
    get_cache(request)?.invalidate(keys::USERS).await;

    info!("User {} updated", user.id);
    Ok(HttpResponse::Ok().json(ApiResponse::success(user, "usuário atualizado")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profiles::entities::Permissions;
    use crate::models::users::requests::CreateUserRequest;
    use crate::services::test_support::{TestContext, error_parts};
    use crate::utils::password::verify_password;
    use actix_web::http::StatusCode;

    fn changes(username: &str, profile_id: i64) -> UpdateUserRequest {
        UpdateUserRequest {
            username: username.to_string(),
            password: "nova-senha".to_string(),
            profile_id,
        }
    }

    #[actix_web::test]
    async fn test_update_rehashes_password() {
        let ctx = TestContext::new().await;
        let operator = ctx.operator().await;

        update_user(operator.id, changes("secretaria.geral", operator.profile_id), &ctx.request())
            .await
            .unwrap();

        let stored = ctx.storage.get_user_by_id(operator.id).await.unwrap().unwrap();
        assert_eq!(stored.username, "secretaria.geral");
        assert!(verify_password("nova-senha", &stored.password_hash));
    }

    #[actix_web::test]
    async fn test_username_of_other_user_is_rejected() {
        let ctx = TestContext::new().await;
        let operator = ctx.operator().await;
        let profile = ctx.profile("Tesouraria", Permissions::default()).await;
        let other = ctx
            .storage
            .create_user(CreateUserRequest {
                username: "tesouraria".to_string(),
                password: hash_password("abc123").unwrap(),
                profile_id: profile.id,
            })
            .await
            .unwrap();

        let err = update_user(other.id, changes(&operator.username, profile.id), &ctx.request())
            .await
            .unwrap_err();
        assert_eq!(error_parts(err).0, StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_missing_user_is_rejected() {
        let ctx = TestContext::new().await;
        let profile = ctx.profile("Tesouraria", Permissions::default()).await;

        let err = update_user(77, changes("fantasma", profile.id), &ctx.request())
            .await
            .unwrap_err();
        assert_eq!(
            error_parts(err),
            (StatusCode::BAD_REQUEST, "este usuário não existe!".to_string())
        );
    }
}
