pub mod create;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::SchoolError;
use crate::models::grades::requests::GradeRequest;
use crate::services::check;
use crate::utils::validate::{validate_money, validate_not_blank};

pub struct GradeService;

impl GradeService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 年级列表（缓存）
    pub async fn list_grades(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_grades(request).await
    }

    pub async fn create_grade(
        &self,
        data: GradeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_grade(data, request).await
    }

    pub async fn update_grade(
        &self,
        grade_id: i64,
        data: GradeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_grade(grade_id, data, request).await
    }
}

// 创建与更新共用的字段校验
fn validate_grade(data: &GradeRequest) -> Result<(), SchoolError> {
    check(validate_not_blank(&data.name, "o nome da turma é obrigatório!"))?;
    check(validate_not_blank(&data.year, "o ano da turma é obrigatório!"))?;
    check(validate_money(data.value))
}
