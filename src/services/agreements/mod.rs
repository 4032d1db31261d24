pub mod create;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::agreements::requests::CreateAgreementRequest;

pub struct AgreementService;

impl AgreementService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 为合同追加责任人
    pub async fn create_agreement(
        &self,
        data: CreateAgreementRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_agreement(data, request).await
    }
}
