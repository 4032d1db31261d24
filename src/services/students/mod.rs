pub mod photos;
pub mod update;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::students::requests::StudentRequest;

pub struct StudentService;

impl StudentService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub async fn update_student(
        &self,
        student_id: i64,
        data: StudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_student(student_id, data, request).await
    }

    // 上传学生证件，替换旧文件
    pub async fn update_photos(
        &self,
        student_id: i64,
        payload: Multipart,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        photos::update_photos(student_id, payload, request).await
    }
}
