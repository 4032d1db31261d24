use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::errors::{Result, SchoolError};
use crate::models::ApiResponse;
use crate::models::persons::entities::{Person, PersonPhoto};
use crate::services::files::{UploadedPhoto, receive_photos};
use crate::services::{get_providers, get_storage};

pub async fn update_photos(
    person_id: i64,
    payload: Multipart,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if get_storage(request)?.get_person_by_id(person_id).await?.is_none() {
        return Err(SchoolError::validation(
            "não é possível atualizar as fotos de um responsável inexistente!",
        )
        .into());
    }

    let fields = PersonPhoto::ALL.map(|photo| photo.field_name());
    let uploads = receive_photos(payload, &fields).await?;
    let person = replace_photos(person_id, uploads, request).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(person, "fotos atualizadas")))
}

/// 保存新照片并删除被替换的旧文件
pub(crate) async fn replace_photos(
    person_id: i64,
    uploads: Vec<UploadedPhoto>,
    request: &HttpRequest,
) -> Result<Person> {
    let storage = get_storage(request)?;
    let files = get_providers(request)?.files;

    let mut person = storage.get_person_by_id(person_id).await?.ok_or_else(|| {
        SchoolError::validation("não é possível atualizar as fotos de um responsável inexistente!")
    })?;

    for upload in uploads {
        let Some(photo) = PersonPhoto::from_field_name(&upload.field) else {
            continue;
        };

        files.save_file(&upload.filename).await?;

        if let Some(previous) = person.photo(photo) {
            files.delete_file(previous).await?;
        }

        person = storage
            .update_person_photo(person_id, photo, &upload.filename)
            .await?
            .ok_or_else(|| SchoolError::not_found("responsável não encontrado"))?;
    }

    info!("Photos of person {} updated", person_id);
    Ok(person)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::TestContext;

    fn upload(field: &str, filename: &str) -> UploadedPhoto {
        UploadedPhoto {
            field: field.to_string(),
            filename: filename.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_replace_deletes_previous_file() {
        let ctx = TestContext::new().await;
        let person = ctx.person("Carla Dias", "11122233344").await;

        replace_photos(person.id, vec![upload("cpf_photo", "cpf-1.png")], &ctx.request())
            .await
            .unwrap();
        let updated = replace_photos(
            person.id,
            vec![
                upload("cpf_photo", "cpf-2.png"),
                upload("rg_photo", "rg-1.pdf"),
            ],
            &ctx.request(),
        )
        .await
        .unwrap();

        assert_eq!(updated.photo(PersonPhoto::Cpf), Some("cpf-2.png"));
        assert_eq!(updated.photo(PersonPhoto::Rg), Some("rg-1.pdf"));
        assert!(updated.cpf_photo_url.as_deref().unwrap().ends_with("/api/v1/files/cpf-2.png"));
        assert_eq!(
            ctx.fakes.files.saved(),
            vec!["cpf-1.png", "cpf-2.png", "rg-1.pdf"]
        );
        assert_eq!(ctx.fakes.files.deleted(), vec!["cpf-1.png"]);
    }

    #[actix_web::test]
    async fn test_missing_person() {
        let ctx = TestContext::new().await;
        assert!(
            replace_photos(12, vec![upload("rg_photo", "rg.png")], &ctx.request())
                .await
                .is_err()
        );
    }
}
