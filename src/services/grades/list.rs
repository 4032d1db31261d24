use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::cache::keys;
use crate::models::ApiResponse;
use crate::models::grades::entities::Grade;
use crate::services::{get_cache, get_storage};

pub async fn list_grades(request: &HttpRequest) -> ActixResult<HttpResponse> {
    let cache = get_cache(request)?;

    let grades = match cache.recover::<Vec<Grade>>(keys::GRADES).await {
        Some(grades) => grades,
        None => {
            let grades = get_storage(request)?.list_grades().await?;
            cache.register(keys::GRADES, &grades).await;
            grades
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(grades, "turmas listadas")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{TestContext, body_json};

    #[actix_web::test]
    async fn test_list_served_from_cache() {
        let ctx = TestContext::new().await;
        ctx.grade("1º ano", 800.0).await;

        let body = body_json(list_grades(&ctx.request()).await.unwrap()).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);

        // 缓存命中时不再读取数据库
        ctx.grade("2º ano", 850.0).await;
        let body = body_json(list_grades(&ctx.request()).await.unwrap()).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }
}
