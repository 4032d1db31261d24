use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::errors::SchoolError;
use crate::models::ApiResponse;
use crate::models::auth::{SessionRequest, SessionResponse};
use crate::services::get_storage;
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

const INVALID_CREDENTIALS: &str = "Credenciais incorretas!";

pub async fn create_session(
    data: SessionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = get_storage(request)?;

    let user = storage
        .get_user_by_username(&data.username)
        .await?
        .ok_or_else(|| SchoolError::authentication(INVALID_CREDENTIALS))?;

    if !verify_password(&data.password, &user.password_hash) {
        info!("Wrong password for user {}", user.username);
        return Err(SchoolError::authentication(INVALID_CREDENTIALS).into());
    }

    let profile = storage
        .get_profile_by_id(user.profile_id)
        .await?
        .ok_or_else(|| SchoolError::internal(format!("Profile of user {} is missing", user.id)))?;

    let token = JwtUtils::generate_token(user.id, profile.id, profile.permissions)
        .map_err(|e| SchoolError::internal(format!("Token generation failed: {e}")))?;

    info!("User {} authenticated", user.id);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        SessionResponse {
            user,
            profile,
            token,
            expires_in: JwtUtils::expires_in(),
        },
        "sessão iniciada",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{TestContext, body_json, error_parts};
    use actix_web::http::StatusCode;

    fn credentials(username: &str, password: &str) -> SessionRequest {
        SessionRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_authenticate_returns_token_with_permissions() {
        let ctx = TestContext::new().await;
        let operator = ctx.operator().await;

        let response = create_session(credentials("secretaria", "secret123"), &ctx.request())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["data"]["user"]["id"], operator.id);
        assert!(body["data"]["user"].get("password_hash").is_none());

        let token = body["data"]["token"].as_str().unwrap();
        let claims = JwtUtils::verify_token(token).unwrap();
        assert_eq!(claims.user_id(), Some(operator.id));
        assert!(claims.permissions.pay_debits_permiss);
    }

    #[actix_web::test]
    async fn test_wrong_password_is_rejected() {
        let ctx = TestContext::new().await;
        ctx.operator().await;

        let err = create_session(credentials("secretaria", "wrong-one"), &ctx.request())
            .await
            .unwrap_err();
        assert_eq!(
            error_parts(err),
            (StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS.to_string())
        );
    }

    #[actix_web::test]
    async fn test_unknown_user_is_rejected() {
        let ctx = TestContext::new().await;

        let err = create_session(credentials("ninguem", "secret123"), &ctx.request())
            .await
            .unwrap_err();
        assert_eq!(error_parts(err).0, StatusCode::UNAUTHORIZED);
    }
}
