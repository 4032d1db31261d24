use actix_multipart::Multipart;
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::path::Path;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::errors::{Result, SchoolError};
use crate::utils::file_magic::extension_of;
use crate::utils::validate_magic_bytes;

/// 写入临时目录的上传文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedPhoto {
    /// 表单字段名
    pub field: String,
    /// 临时目录中的文件名
    pub filename: String,
}

/// 接收 multipart 中的证件照片
///
/// 只处理 `fields` 中列出的字段，其余字段被忽略；每个文件都会校验扩展名、
/// 魔术字节与大小，然后以随机文件名写入临时目录。
pub async fn receive_photos(mut payload: Multipart, fields: &[&str]) -> Result<Vec<UploadedPhoto>> {
    let config = AppConfig::get();
    let tmp_dir = Path::new(&config.upload.tmp_dir);
    let max_size = config.upload.max_size;
    let allowed_types = &config.upload.allowed_types;

    tokio::fs::create_dir_all(tmp_dir).await?;

    let mut photos: Vec<UploadedPhoto> = Vec::new();

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| SchoolError::validation(format!("upload inválido: {e}")))?
    {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        if !fields.contains(&name.as_str()) {
            continue;
        }

        if photos.iter().any(|p| p.field == name) {
            return Err(SchoolError::validation(format!("o campo {name} foi enviado mais de uma vez!")));
        }

        let original_name = content_disposition
            .and_then(|cd| cd.get_filename())
            .map(|s| s.to_string())
            .unwrap_or_default();

        let extension = extension_of(&original_name).unwrap_or_default();
        if !allowed_types.iter().any(|t| t.to_lowercase() == extension) {
            return Err(SchoolError::file_type_not_allowed(format!(
                "tipo de arquivo não permitido: {original_name}"
            )));
        }

        let mut data: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| SchoolError::validation(format!("upload inválido: {e}")))?;
            if data.len() + chunk.len() > max_size {
                return Err(SchoolError::file_size_exceeded(format!(
                    "o arquivo {original_name} excede o tamanho máximo permitido"
                )));
            }
            data.extend_from_slice(&chunk);
        }

        if !validate_magic_bytes(&data, &extension) {
            return Err(SchoolError::file_type_not_allowed(format!(
                "o conteúdo de {original_name} não corresponde à extensão"
            )));
        }

        let filename = format!("{}{}", Uuid::new_v4().simple(), extension);
        tokio::fs::write(tmp_dir.join(&filename), &data).await?;
        tracing::debug!("Upload {} stored in tmp as {}", original_name, filename);

        photos.push(UploadedPhoto {
            field: name,
            filename,
        });
    }

    Ok(photos)
}
