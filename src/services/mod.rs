pub mod agreements;
pub mod contracts;
pub mod debits;
pub mod discharges;
pub mod enrollments;
pub mod files;
pub mod grades;
pub mod payments;
pub mod persons;
pub mod profiles;
pub mod sessions;
pub mod students;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support;

pub use agreements::AgreementService;
pub use contracts::ContractService;
pub use debits::DebitService;
pub use discharges::DischargeService;
pub use enrollments::EnrollmentService;
pub use files::FileService;
pub use grades::GradeService;
pub use payments::PaymentService;
pub use persons::PersonService;
pub use profiles::ProfileService;
pub use sessions::SessionService;
pub use students::StudentService;
pub use users::UserService;

use actix_web::{HttpRequest, web};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::errors::{Result, SchoolError};
use crate::middlewares::{AuthenticatedUser, RequireJWT};
use crate::providers::Providers;
use crate::storage::Storage;

// 以下辅助函数从请求的 app_data 中取出共享依赖

pub(crate) fn get_storage(request: &HttpRequest) -> Result<Arc<dyn Storage>> {
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| SchoolError::internal("Storage not found in app data"))
}

pub(crate) fn get_cache(request: &HttpRequest) -> Result<Arc<dyn ObjectCache>> {
    request
        .app_data::<web::Data<Arc<dyn ObjectCache>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| SchoolError::internal("Cache not found in app data"))
}

pub(crate) fn get_providers(request: &HttpRequest) -> Result<Providers> {
    request
        .app_data::<web::Data<Providers>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| SchoolError::internal("Providers not found in app data"))
}

pub(crate) fn current_user(request: &HttpRequest) -> Result<AuthenticatedUser> {
    RequireJWT::extract_user(request)
        .ok_or_else(|| SchoolError::authentication("token não informado"))
}

/// 把 `validate_*` 的错误信息转为校验错误
pub(crate) fn check(result: std::result::Result<(), &'static str>) -> Result<()> {
    result.map_err(SchoolError::validation)
}
