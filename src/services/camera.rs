use anyhow::Result;
use std::path::PathBuf;

/// Sentinel reference used when no photo could be captured.
pub const PLACEHOLDER_PHOTO: &str = "placeholder";

/// Reference to a captured photo. The classifier treats it as opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoRef {
    Captured(String),
    Placeholder,
}

impl PhotoRef {
    pub fn as_str(&self) -> &str {
        match self {
            PhotoRef::Captured(uri) => uri,
            PhotoRef::Placeholder => PLACEHOLDER_PHOTO,
        }
    }

    /// An absent or empty reference means capture failed.
    pub fn from_optional(uri: Option<&str>) -> Self {
        match uri.map(str::trim) {
            Some(uri) if !uri.is_empty() => PhotoRef::Captured(uri.to_string()),
            _ => PhotoRef::Placeholder,
        }
    }
}

impl std::fmt::Display for PhotoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[async_trait::async_trait]
pub trait Camera: Send + Sync {
    /// Take a picture and return its URI.
    async fn take_picture(&self) -> Result<String>;
}

/// Camera backed by an image file already on disk.
pub struct FileCamera {
    path: PathBuf,
}

impl FileCamera {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl Camera for FileCamera {
    async fn take_picture(&self) -> Result<String> {
        let metadata = tokio::fs::metadata(&self.path).await?;
        if !metadata.is_file() {
            anyhow::bail!("{} is not a file", self.path.display());
        }
        log::debug!("📸 Captured {} ({} bytes)", self.path.display(), metadata.len());
        Ok(self.path.to_string_lossy().into_owned())
    }
}

/// Capture a photo, degrading to the placeholder on any failure.
pub async fn capture_photo(camera: &dyn Camera) -> PhotoRef {
    match camera.take_picture().await {
        Ok(uri) => {
            let photo = PhotoRef::from_optional(Some(uri.as_str()));
            if photo == PhotoRef::Placeholder {
                log::warn!("⚠️ Camera returned an empty photo reference, using placeholder");
            }
            photo
        }
        Err(e) => {
            log::warn!("⚠️ Camera capture failed, using placeholder: {}", e);
            PhotoRef::Placeholder
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenCamera;

    #[async_trait::async_trait]
    impl Camera for BrokenCamera {
        async fn take_picture(&self) -> Result<String> {
            anyhow::bail!("shutter jammed")
        }
    }

    struct BlankCamera;

    #[async_trait::async_trait]
    impl Camera for BlankCamera {
        async fn take_picture(&self) -> Result<String> {
            Ok(String::new())
        }
    }

    #[test]
    fn test_from_optional() {
        assert_eq!(PhotoRef::from_optional(None), PhotoRef::Placeholder);
        assert_eq!(PhotoRef::from_optional(Some("  ")), PhotoRef::Placeholder);
        assert_eq!(
            PhotoRef::from_optional(Some("file:///tmp/a.jpg")),
            PhotoRef::Captured("file:///tmp/a.jpg".to_string())
        );
        assert_eq!(PhotoRef::Placeholder.to_string(), "placeholder");
    }

    #[tokio::test]
    async fn test_failed_capture_uses_placeholder() {
        assert_eq!(capture_photo(&BrokenCamera).await, PhotoRef::Placeholder);
        assert_eq!(capture_photo(&BlankCamera).await, PhotoRef::Placeholder);
    }

    #[tokio::test]
    async fn test_file_camera() {
        let path = std::env::temp_dir().join(format!("drink-finder-{}.jpg", std::process::id()));
        tokio::fs::write(&path, b"jpeg").await.unwrap();

        let photo = capture_photo(&FileCamera::new(&path)).await;
        assert_eq!(photo, PhotoRef::Captured(path.to_string_lossy().into_owned()));

        tokio::fs::remove_file(&path).await.unwrap();
        let missing = capture_photo(&FileCamera::new(&path)).await;
        assert_eq!(missing, PhotoRef::Placeholder);
    }
}
