use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::contracts::requests::{ContractSearchQuery, UpdateContractGradeRequest};
use crate::models::profiles::entities::Permission;
use crate::services::ContractService;
use crate::utils::{SafeGradeIdI64, SafeIDI64};

// 懒加载的全局 ContractService 实例
static CONTRACT_SERVICE: Lazy<ContractService> = Lazy::new(ContractService::new_lazy);

// HTTP处理程序
pub async fn show_contract(req: HttpRequest, contract_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CONTRACT_SERVICE.show_contract(contract_id.0, &req).await
}

pub async fn update_grade(
    req: HttpRequest,
    contract_id: SafeIDI64,
    data: web::Json<UpdateContractGradeRequest>,
) -> ActixResult<HttpResponse> {
    CONTRACT_SERVICE
        .update_grade(contract_id.0, data.into_inner(), &req)
        .await
}

pub async fn list_debits(req: HttpRequest, contract_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CONTRACT_SERVICE.list_debits(contract_id.0, &req).await
}

pub async fn list_payments(req: HttpRequest, contract_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CONTRACT_SERVICE.list_payments(contract_id.0, &req).await
}

pub async fn list_under_analysis_and_pendent(
    req: HttpRequest,
    grade_id: SafeGradeIdI64,
) -> ActixResult<HttpResponse> {
    CONTRACT_SERVICE
        .list_under_analysis_and_pendent(grade_id.0, &req)
        .await
}

pub async fn list_accepted_and_active(
    req: HttpRequest,
    grade_id: SafeGradeIdI64,
) -> ActixResult<HttpResponse> {
    CONTRACT_SERVICE
        .list_accepted_and_active(grade_id.0, &req)
        .await
}

pub async fn list_active(req: HttpRequest, grade_id: SafeGradeIdI64) -> ActixResult<HttpResponse> {
    CONTRACT_SERVICE.list_active(grade_id.0, &req).await
}

pub async fn search_by_student_name(
    req: HttpRequest,
    grade_id: SafeGradeIdI64,
    query: web::Query<ContractSearchQuery>,
) -> ActixResult<HttpResponse> {
    CONTRACT_SERVICE
        .search_by_student_name(grade_id.0, query.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_contract_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/contracts")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("/grades/{grade_id}")
                    .route(
                        "/under-analysis-and-pendent",
                        web::get().to(list_under_analysis_and_pendent),
                    )
                    .route("/accepted-and-active", web::get().to(list_accepted_and_active))
                    .route("/active", web::get().to(list_active))
                    .route("/search", web::get().to(search_by_student_name)),
            )
            .route("/{id}", web::get().to(show_contract))
            .route("/{id}/debits", web::get().to(list_debits))
            .route("/{id}/payments", web::get().to(list_payments))
            .service(
                web::resource("/{id}/grade").route(
                    web::patch()
                        .to(update_grade)
                        .wrap(middlewares::RequirePermission::any(&[
                            Permission::ValidateEnrollments,
                        ])),
                ),
            ),
    );
}
