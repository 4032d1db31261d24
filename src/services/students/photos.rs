use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::errors::{Result, SchoolError};
use crate::models::ApiResponse;
use crate::models::students::entities::{Student, StudentPhoto};
use crate::services::files::{UploadedPhoto, receive_photos};
use crate::services::{get_providers, get_storage};

const MISSING_STUDENT: &str = "não é possível atualizar as fotos de um aluno inexistente!";

pub async fn update_photos(
    student_id: i64,
    payload: Multipart,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if get_storage(request)?.get_student_by_id(student_id).await?.is_none() {
        return Err(SchoolError::validation(MISSING_STUDENT).into());
    }

    let fields = StudentPhoto::ALL.map(|photo| photo.field_name());
    let uploads = receive_photos(payload, &fields).await?;
    let student = replace_photos(student_id, uploads, request).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(student, "fotos atualizadas")))
}

pub(crate) async fn replace_photos(
    student_id: i64,
    uploads: Vec<UploadedPhoto>,
    request: &HttpRequest,
) -> Result<Student> {
    let storage = get_storage(request)?;
    let files = get_providers(request)?.files;

    let mut student = storage
        .get_student_by_id(student_id)
        .await?
        .ok_or_else(|| SchoolError::validation(MISSING_STUDENT))?;

    for upload in uploads {
        let Some(photo) = StudentPhoto::from_field_name(&upload.field) else {
            continue;
        };

        files.save_file(&upload.filename).await?;

        if let Some(previous) = student.photo(photo) {
            files.delete_file(previous).await?;
        }

        student = storage
            .update_student_photo(student_id, photo, &upload.filename)
            .await?
            .ok_or_else(|| SchoolError::validation(MISSING_STUDENT))?;
    }

    info!("Photos of student {} updated", student_id);
    Ok(student)
}
