use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::cache::keys;
use crate::errors::SchoolError;
use crate::models::ApiResponse;
use crate::models::users::requests::CreateUserRequest;
use crate::services::{check, get_cache, get_storage};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_password, validate_username};

pub async fn create_user(
    mut user_data: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    check(validate_username(&user_data.username))?;
    check(validate_password(&user_data.password))?;

    let storage = get_storage(request)?;

    if storage.get_profile_by_id(user_data.profile_id).await?.is_none() {
        return Err(SchoolError::validation(
            "não é possível criar um usuário com um perfil inexistente!",
        )
        .into());
    }

    if storage
        .get_user_by_username(&user_data.username)
        .await?
        .is_some()
    {
        return Err(SchoolError::validation("este nome de usuário já está em uso!").into());
    }

    user_data.password = hash_password(&user_data.password)?;

    let user = storage.create_user(user_data).await?;
    get_cache(request)?.invalidate(keys::USERS).await;

    info!("User {} created", user.id);
    Ok(HttpResponse::Created().json(ApiResponse::success(user, "usuário criado")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profiles::entities::Permissions;
    use crate::services::test_support::{TestContext, error_parts};
    use crate::utils::password::verify_password;
    use actix_web::http::StatusCode;

    fn new_user(username: &str, profile_id: i64) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            password: "abc123".to_string(),
            profile_id,
        }
    }

    #[actix_web::test]
    async fn test_create_user_hashes_password() {
        let ctx = TestContext::new().await;
        let profile = ctx.profile("Secretaria", Permissions::default()).await;

        let response = create_user(new_user("ana.paula", profile.id), &ctx.request())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let stored = ctx
            .storage
            .get_user_by_username("ana.paula")
            .await
            .unwrap()
            .unwrap();
        assert_ne!(stored.password_hash, "abc123");
        assert!(verify_password("abc123", &stored.password_hash));
    }

    #[actix_web::test]
    async fn test_unknown_profile_is_rejected() {
        let ctx = TestContext::new().await;
        let err = create_user(new_user("ana.paula", 42), &ctx.request())
            .await
            .unwrap_err();
        assert_eq!(error_parts(err).0, StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_duplicated_username_is_rejected() {
        let ctx = TestContext::new().await;
        let operator = ctx.operator().await;

        let err = create_user(new_user(&operator.username, operator.profile_id), &ctx.request())
            .await
            .unwrap_err();
        assert_eq!(
            error_parts(err),
            (
                StatusCode::BAD_REQUEST,
                "este nome de usuário já está em uso!".to_string()
            )
        );
    }
}
