pub mod find;
pub mod photos;
pub mod update;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::persons::requests::PersonRequest;

pub struct PersonService;

impl PersonService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 按 CPF 查找责任人
    pub async fn find_by_cpf(&self, cpf: String, request: &HttpRequest) -> ActixResult<HttpResponse> {
        find::find_by_cpf(cpf, request).await
    }

    pub async fn update_person(
        &self,
        person_id: i64,
        data: PersonRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_person(person_id, data, request).await
    }

    // 上传证件照片，替换旧文件
    pub async fn update_photos(
        &self,
        person_id: i64,
        payload: Multipart,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        photos::update_photos(person_id, payload, request).await
    }
}
