pub mod financial;
pub mod list;
pub mod search;
pub mod show;
pub mod update_grade;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::contracts::requests::{ContractSearchQuery, UpdateContractGradeRequest};

pub struct ContractService;

impl ContractService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 合同详情
    pub async fn show_contract(
        &self,
        contract_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        show::show_contract(contract_id, request).await
    }

    // 审核中与待补充的合同（缓存）
    pub async fn list_under_analysis_and_pendent(
        &self,
        grade_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_under_analysis_and_pendent(grade_id, request).await
    }

    pub async fn list_accepted_and_active(
        &self,
        grade_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_accepted_and_active(grade_id, request).await
    }

    // 生效中的合同（缓存）
    pub async fn list_active(
        &self,
        grade_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_active(grade_id, request).await
    }

    pub async fn search_by_student_name(
        &self,
        grade_id: i64,
        query: ContractSearchQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        search::search_by_student_name(grade_id, query, request).await
    }

    // 调整合同所属年级
    pub async fn update_grade(
        &self,
        contract_id: i64,
        data: UpdateContractGradeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update_grade::update_grade(contract_id, data, request).await
    }

    pub async fn list_debits(
        &self,
        contract_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        financial::list_debits(contract_id, request).await
    }

    pub async fn list_payments(
        &self,
        contract_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        financial::list_payments(contract_id, request).await
    }
}
