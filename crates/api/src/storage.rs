//! Local-disk media storage. The block editor stores only the public URL
//! returned from here, never binary content.

use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

/// Uploads above this size are rejected before they reach the store.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
    public_base: String,
}

impl MediaStore {
    pub fn new(root: &str, public_base: &str) -> Self {
        Self {
            root: PathBuf::from(root),
            public_base: public_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File extension for an accepted image MIME type. `None` means the
    /// type is not accepted for upload.
    pub fn extension_for(content_type: &str) -> Option<&'static str> {
        match content_type {
            "image/png" => Some("png"),
            "image/jpeg" => Some("jpg"),
            "image/gif" => Some("gif"),
            "image/webp" => Some("webp"),
            _ => None,
        }
    }

    /// Restrict caller-chosen folder prefixes to a safe charset. Anything
    /// that sanitizes away entirely lands in the default folder.
    pub fn sanitize_folder(folder: &str) -> String {
        let cleaned: String = folder
            .trim()
            .chars()
            .map(|c| c.to_ascii_lowercase())
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '_')
            .collect();
        if cleaned.is_empty() {
            "uploads".to_string()
        } else {
            cleaned
        }
    }

    /// Write the upload under `{root}/{folder}/` with a fresh name and
    /// return its public URL.
    pub async fn store(
        &self,
        folder: &str,
        extension: &str,
        bytes: &[u8],
    ) -> Result<String, MediaError> {
        let folder = Self::sanitize_folder(folder);
        let dir = self.root.join(&folder);
        tokio::fs::create_dir_all(&dir).await?;
        let filename = format!("{}.{extension}", Uuid::new_v4().simple());
        tokio::fs::write(dir.join(&filename), bytes).await?;
        Ok(format!("{}/media/{folder}/{filename}", self.public_base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_image_types_map_to_extensions() {
        assert_eq!(MediaStore::extension_for("image/png"), Some("png"));
        assert_eq!(MediaStore::extension_for("image/jpeg"), Some("jpg"));
        assert_eq!(MediaStore::extension_for("image/webp"), Some("webp"));
        assert_eq!(MediaStore::extension_for("application/pdf"), None);
        assert_eq!(MediaStore::extension_for("text/html"), None);
    }

    #[test]
    fn folder_names_are_sanitized() {
        assert_eq!(MediaStore::sanitize_folder("Blog Images"), "blogimages");
        assert_eq!(MediaStore::sanitize_folder("../etc"), "etc");
        assert_eq!(MediaStore::sanitize_folder("hero-images"), "hero-images");
        assert_eq!(MediaStore::sanitize_folder("///"), "uploads");
        assert_eq!(MediaStore::sanitize_folder(""), "uploads");
    }

    #[tokio::test]
    async fn store_writes_and_returns_public_url() {
        let dir = std::env::temp_dir().join(format!("kemas-media-{}", Uuid::new_v4().simple()));
        let store = MediaStore::new(dir.to_str().unwrap(), "https://kemas.example/");

        let url = store.store("gallery", "png", b"not-a-real-png").await.unwrap();

        assert!(url.starts_with("https://kemas.example/media/gallery/"));
        assert!(url.ends_with(".png"));

        let filename = url.rsplit('/').next().unwrap();
        let on_disk = dir.join("gallery").join(filename);
        assert_eq!(tokio::fs::read(&on_disk).await.unwrap(), b"not-a-real-png");

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
