// chat/image_fetch.rs - Image fetch service seam

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Decoded-enough image payload: where it came from and its bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub source: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Unsupported image URL: {0}")]
    Unsupported(String),
    #[error("Failed to read image: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Image is empty: {0}")]
    Empty(String),
}

/// Loads images for attachment thumbnails.
///
/// Runs on the UI task, so implementations need not be `Send`.
#[async_trait(?Send)]
pub trait ImageFetcher {
    async fn fetch(&self, url: &str, placeholder: Option<&str>) -> Result<Image, FetchError>;
}

/// Fetches `file://` URLs and bare paths from the local disk
#[derive(Debug, Clone, Default)]
pub struct FileImageFetcher {
    /// Base directory for relative paths
    pub root: Option<PathBuf>,
}

impl FileImageFetcher {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    fn resolve(&self, url: &str) -> Result<PathBuf, FetchError> {
        if let Some(path) = url.strip_prefix("file://") {
            return Ok(PathBuf::from(path));
        }
        if url.contains("://") {
            return Err(FetchError::Unsupported(url.to_string()));
        }
        Ok(match &self.root {
            Some(root) => root.join(url),
            None => PathBuf::from(url),
        })
    }
}

#[async_trait(?Send)]
impl ImageFetcher for FileImageFetcher {
    async fn fetch(&self, url: &str, _placeholder: Option<&str>) -> Result<Image, FetchError> {
        let path = self.resolve(url)?;
        let bytes = tokio::fs::read(&path).await?;
        if bytes.is_empty() {
            return Err(FetchError::Empty(url.to_string()));
        }
        log::debug!("Fetched {} bytes from {}", bytes.len(), path.display());
        Ok(Image {
            source: url.to_string(),
            bytes,
        })
    }
}
