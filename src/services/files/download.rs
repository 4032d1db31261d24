use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header};

use crate::models::{ApiResponse, ErrorCode};
use crate::services::get_providers;

/// 按扩展名推断内容类型
fn content_type_of(filename: &str) -> &'static str {
    match crate::utils::file_magic::extension_of(filename).as_deref() {
        Some(".png") => "image/png",
        Some(".jpg") | Some(".jpeg") => "image/jpeg",
        Some(".webp") => "image/webp",
        Some(".pdf") => "application/pdf",
        Some(".txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

pub async fn serve_file(filename: String, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let path = get_providers(request)?.files.path_of(&filename);

    match tokio::fs::read(&path).await {
        Ok(buf) => Ok(HttpResponse::Ok()
            .insert_header((header::CONTENT_TYPE, content_type_of(&filename)))
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{filename}\""),
            ))
            .body(buf)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HttpResponse::NotFound().json(
            ApiResponse::error_empty(ErrorCode::FileNotFound, "arquivo não encontrado"),
        )),
        Err(e) => {
            tracing::error!("Failed to read upload {}: {}", filename, e);
            Err(crate::errors::SchoolError::file_operation("falha ao ler o arquivo").into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::FileStorageProvider;
    use crate::services::test_support::TestContext;
    use actix_web::http::StatusCode;

    #[test]
    fn test_content_type() {
        assert_eq!(content_type_of("a.PDF"), "application/pdf");
        assert_eq!(content_type_of("recibo.txt"), "text/plain; charset=utf-8");
        assert_eq!(content_type_of("blob"), "application/octet-stream");
    }

    #[actix_web::test]
    async fn test_serve_existing_and_missing_file() {
        let ctx = TestContext::new().await;
        let filename = format!("{}-recibo.txt", uuid::Uuid::new_v4().simple());
        let path = ctx.fakes.files.path_of(&filename);
        tokio::fs::write(&path, b"Recibo").await.unwrap();

        let response = serve_file(filename.clone(), &ctx.request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        tokio::fs::remove_file(&path).await.unwrap();
        let response = serve_file(filename, &ctx.request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
