pub mod approve;
pub mod create;
pub mod pendent;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::warn;

use crate::models::enrollments::requests::{
    CreateEnrollmentRequest, ResponsibleContact, ReviewEnrollmentRequest,
};
use crate::providers::{MailMessage, Providers};
use crate::utils::format::capitalize;

pub struct EnrollmentService;

impl EnrollmentService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 新生入学申请
    pub async fn create_enrollment(
        &self,
        data: CreateEnrollmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_enrollment(data, request).await
    }

    // 审核通过，生成注册费账单
    pub async fn approve_enrollment(
        &self,
        contract_id: i64,
        data: ReviewEnrollmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        approve::approve_enrollment(contract_id, data, request).await
    }

    // 标记为待补充
    pub async fn mark_pendent(
        &self,
        contract_id: i64,
        data: ReviewEnrollmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        pendent::mark_pendent(contract_id, data, request).await
    }
}

/// 通知责任人审核结果，发送失败只记录日志
async fn notify_contact(
    providers: &Providers,
    contact: &ResponsibleContact,
    subject: &str,
    message: &str,
    comment: Option<&str>,
) {
    let mut body = format!("Olá {},\n\n{}", capitalize(&contact.name), message);
    if let Some(comment) = comment.filter(|c| !c.trim().is_empty()) {
        body.push_str(&format!("\n\nObservações da secretaria: {comment}"));
    }

    let mail = MailMessage {
        to_name: contact.name.clone(),
        to_email: contact.email.clone(),
        subject: subject.to_string(),
        body,
    };

    if let Err(e) = providers.mail.send_mail(mail).await {
        warn!("Failed to notify {}: {}", contact.email, e);
    }
}
