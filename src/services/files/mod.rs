pub mod download;
pub mod upload;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

pub use upload::{UploadedPhoto, receive_photos};

pub struct FileService;

impl FileService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 读取已上传的证件或回执
    pub async fn serve_file(
        &self,
        filename: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        download::serve_file(filename, request).await
    }
}
