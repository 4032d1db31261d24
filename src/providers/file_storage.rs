use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::errors::{Result, SchoolError};

/// 上传文件存储
///
/// 文件先写入临时目录，`save_file` 把它移入正式目录。
#[async_trait]
pub trait FileStorageProvider: Send + Sync {
    async fn save_file(&self, filename: &str) -> Result<String>;
    async fn delete_file(&self, filename: &str) -> Result<()>;
    /// 正式目录中的文件路径
    fn path_of(&self, filename: &str) -> PathBuf;
}

pub struct DiskStorageProvider {
    tmp_dir: PathBuf,
    uploads_dir: PathBuf,
}

impl DiskStorageProvider {
    pub fn new(tmp_dir: impl AsRef<Path>, uploads_dir: impl AsRef<Path>) -> Self {
        Self {
            tmp_dir: tmp_dir.as_ref().to_path_buf(),
            uploads_dir: uploads_dir.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl FileStorageProvider for DiskStorageProvider {
    async fn save_file(&self, filename: &str) -> Result<String> {
        tokio::fs::create_dir_all(&self.uploads_dir).await?;
        tokio::fs::rename(self.tmp_dir.join(filename), self.uploads_dir.join(filename))
            .await
            .map_err(|e| SchoolError::file_operation(format!("Failed to store {filename}: {e}")))?;
        tracing::debug!("Stored upload {}", filename);
        Ok(filename.to_string())
    }

    async fn delete_file(&self, filename: &str) -> Result<()> {
        match tokio::fs::remove_file(self.uploads_dir.join(filename)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("Upload {} already gone", filename);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn path_of(&self, filename: &str) -> PathBuf {
        self.uploads_dir.join(filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_save_moves_and_delete_removes() {
        let root = std::env::temp_dir().join(format!("santiago-storage-{}", uuid::Uuid::new_v4()));
        let tmp = root.join("tmp");
        let uploads = root.join("uploads");
        tokio::fs::create_dir_all(&tmp).await.unwrap();
        tokio::fs::write(tmp.join("rg.png"), b"data").await.unwrap();

        let provider = DiskStorageProvider::new(&tmp, &uploads);
        provider.save_file("rg.png").await.unwrap();

        assert!(!tmp.join("rg.png").exists());
        assert!(provider.path_of("rg.png").exists());

        provider.delete_file("rg.png").await.unwrap();
        assert!(!provider.path_of("rg.png").exists());
        // 重复删除不报错
        provider.delete_file("rg.png").await.unwrap();

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }

    #[actix_web::test]
    async fn test_save_missing_file_fails() {
        let root = std::env::temp_dir().join(format!("santiago-storage-{}", uuid::Uuid::new_v4()));
        let provider = DiskStorageProvider::new(root.join("tmp"), root.join("uploads"));
        assert!(provider.save_file("ghost.pdf").await.is_err());
        let _ = tokio::fs::remove_dir_all(&root).await;
    }
}
