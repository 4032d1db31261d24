use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::persons::requests::PersonRequest;
use crate::models::profiles::entities::Permission;
use crate::services::PersonService;
use crate::utils::SafeIDI64;

// 懒加载的全局 PersonService 实例
static PERSON_SERVICE: Lazy<PersonService> = Lazy::new(PersonService::new_lazy);

pub async fn find_by_cpf(req: HttpRequest, cpf: web::Path<String>) -> ActixResult<HttpResponse> {
    PERSON_SERVICE.find_by_cpf(cpf.into_inner(), &req).await
}

pub async fn update_person(
    req: HttpRequest,
    person_id: SafeIDI64,
    data: web::Json<PersonRequest>,
) -> ActixResult<HttpResponse> {
    PERSON_SERVICE
        .update_person(person_id.0, data.into_inner(), &req)
        .await
}

pub async fn update_photos(
    req: HttpRequest,
    person_id: SafeIDI64,
    payload: actix_multipart::Multipart,
) -> ActixResult<HttpResponse> {
    PERSON_SERVICE
        .update_photos(person_id.0, payload, &req)
        .await
}

// 配置路由
pub fn configure_person_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/persons")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/photos/{id}").route(
                    web::patch()
                        .to(update_photos)
                        .wrap(middlewares::RateLimit::file_upload())
                        .wrap(middlewares::RequirePermission::any(&[
                            Permission::CreateNewEnrollments,
                            Permission::ValidateEnrollments,
                        ])),
                ),
            )
            .service(
                // GET 的路径参数为 CPF，PUT 的路径参数为 ID
                web::resource("/{id}")
                    .route(web::get().to(find_by_cpf))
                    .route(
                        web::put()
                            .to(update_person)
                            .wrap(middlewares::RequirePermission::any(&[
                                Permission::ValidateEnrollments,
                            ])),
                    ),
            ),
    );
}
