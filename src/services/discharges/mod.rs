pub mod create;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::discharges::requests::CreateDischargeRequest;

pub struct DischargeService;

impl DischargeService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 结清付款
    pub async fn create_discharge(
        &self,
        data: CreateDischargeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_discharge(data, request).await
    }
}
