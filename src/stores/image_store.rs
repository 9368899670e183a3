use std::path::{Path, PathBuf};

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::InternalError;
use crate::errors::internal::StorageError;
use crate::types::internal::user::ImageUpload;

/// Destination for uploaded profile pictures
///
/// Only the returned URL is kept on the record.
#[async_trait]
pub trait ImageStorage: Send + Sync {
    async fn store(&self, image: ImageUpload) -> Result<String, InternalError>;

    /// Remove a picture returned by `store` that no record ended up using
    async fn discard(&self, url: &str) -> Result<(), InternalError>;
}

/// Stores pictures on the local filesystem, served back under `/uploads`
pub struct LocalImageStorage {
    upload_dir: PathBuf,
    public_base_url: String,
}

impl LocalImageStorage {
    pub fn new(upload_dir: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// File name behind a URL this storage handed out
    fn file_name_in(&self, url: &str) -> Option<String> {
        url.strip_prefix(&self.public_base_url)?
            .strip_prefix("/uploads/")
            .filter(|name| !name.is_empty() && !name.contains(['/', '\\']) && *name != "..")
            .map(str::to_string)
    }

    /// Unique file name that keeps the extension of the uploaded file
    fn file_name_for(image: &ImageUpload) -> String {
        let extension = image
            .file_name
            .as_deref()
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
            .map(|ext| ext.to_ascii_lowercase());

        match extension {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        }
    }
}

#[async_trait]
impl ImageStorage for LocalImageStorage {
    async fn store(&self, image: ImageUpload) -> Result<String, InternalError> {
        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(|source| StorageError::CreateDirectory {
                path: self.upload_dir.clone(),
                source,
            })?;

        let file_name = Self::file_name_for(&image);
        let path = self.upload_dir.join(&file_name);

        tokio::fs::write(&path, &image.bytes)
            .await
            .map_err(|source| StorageError::Write {
                path: path.clone(),
                source,
            })?;

        tracing::debug!("Stored profile picture at {}", path.display());

        Ok(format!("{}/uploads/{}", self.public_base_url, file_name))
    }

    async fn discard(&self, url: &str) -> Result<(), InternalError> {
        let Some(file_name) = self.file_name_in(url) else {
            tracing::warn!("Not discarding {}: not an uploaded picture", url);
            return Ok(());
        };
        let path = self.upload_dir.join(file_name);

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!("Discarded profile picture at {}", path.display());
                Ok(())
            }
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Remove { path, source }.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(file_name: Option<&str>) -> ImageUpload {
        ImageUpload {
            file_name: file_name.map(str::to_string),
            content_type: Some("image/png".to_string()),
            bytes: vec![0x89, b'P', b'N', b'G'],
        }
    }

    #[tokio::test]
    async fn test_store_writes_file_and_returns_public_url() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalImageStorage::new(dir.path().join("uploads"), "http://localhost:3088/");

        let url = storage.store(png(Some("avatar.PNG"))).await.unwrap();

        assert!(url.starts_with("http://localhost:3088/uploads/"));
        assert!(url.ends_with(".png"));

        let file_name = url.rsplit('/').next().unwrap();
        let written = std::fs::read(storage.upload_dir().join(file_name)).unwrap();
        assert_eq!(written, vec![0x89, b'P', b'N', b'G']);
    }

    #[tokio::test]
    async fn test_store_generates_distinct_names() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalImageStorage::new(dir.path(), "http://localhost:3088");

        let first = storage.store(png(Some("a.png"))).await.unwrap();
        let second = storage.store(png(Some("a.png"))).await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_discard_removes_stored_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalImageStorage::new(dir.path(), "http://localhost:3088");

        let url = storage.store(png(Some("a.png"))).await.unwrap();
        let file_name = url.rsplit('/').next().unwrap().to_string();
        assert!(dir.path().join(&file_name).exists());

        storage.discard(&url).await.unwrap();
        assert!(!dir.path().join(&file_name).exists());

        // Already gone
        storage.discard(&url).await.unwrap();
    }

    #[tokio::test]
    async fn test_discard_ignores_foreign_urls() {
        let dir = tempfile::tempdir().unwrap();
        let keep = dir.path().join("keep.png");
        std::fs::write(&keep, b"png").unwrap();
        let storage = LocalImageStorage::new(dir.path().join("uploads"), "http://localhost:3088");

        storage.discard("http://elsewhere.example/uploads/keep.png").await.unwrap();
        storage.discard("http://localhost:3088/uploads/../keep.png").await.unwrap();

        assert!(keep.exists());
    }

    #[test]
    fn test_file_name_drops_suspicious_extension() {
        let name = LocalImageStorage::file_name_for(&png(Some("evil.p/ng")));
        assert!(!name.contains('/'));

        let name = LocalImageStorage::file_name_for(&png(None));
        assert!(Uuid::parse_str(&name).is_ok());
    }
}
