use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::validate_grade;
use crate::cache::keys;
use crate::errors::SchoolError;
use crate::models::ApiResponse;
use crate::models::grades::requests::GradeRequest;
use crate::services::{get_cache, get_storage};

pub async fn create_grade(data: GradeRequest, request: &HttpRequest) -> ActixResult<HttpResponse> {
    validate_grade(&data)?;

    let storage = get_storage(request)?;

    if storage
        .get_grade_by_name_and_year(&data.name, &data.year)
        .await?
        .is_some()
    {
        return Err(SchoolError::validation("já existe uma turma com este nome neste ano!").into());
    }

    let grade = storage.create_grade(data).await?;
    get_cache(request)?.invalidate(keys::GRADES).await;

    info!("Grade {} created", grade.id);
    Ok(HttpResponse::Created().json(ApiResponse::success(grade, "turma criada")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grades::entities::Grade;
    use crate::services::test_support::{TestContext, error_parts};
    use actix_web::http::StatusCode;

    fn grade(name: &str, year: &str) -> GradeRequest {
        GradeRequest {
            name: name.to_string(),
            year: year.to_string(),
            value: 950.0,
        }
    }

    #[actix_web::test]
    async fn test_same_name_in_other_year_is_allowed() {
        let ctx = TestContext::new().await;
        create_grade(grade("3º ano", "2024"), &ctx.request())
            .await
            .unwrap();
        let response = create_grade(grade("3º ano", "2025"), &ctx.request())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert!(ctx.cache.recover::<Vec<Grade>>(keys::GRADES).await.is_none());
    }

    #[actix_web::test]
    async fn test_duplicated_name_and_year_is_rejected() {
        let ctx = TestContext::new().await;
        create_grade(grade("3º ano", "2025"), &ctx.request())
            .await
            .unwrap();
        let err = create_grade(grade("3º ano", "2025"), &ctx.request())
            .await
            .unwrap_err();
        assert_eq!(error_parts(err).0, StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_negative_value_is_rejected() {
        let ctx = TestContext::new().await;
        let mut data = grade("3º ano", "2025");
        data.value = -1.0;
        assert!(create_grade(data, &ctx.request()).await.is_err());
    }
}
