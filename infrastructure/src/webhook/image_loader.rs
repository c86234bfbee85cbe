//! Load a user-selected image from disk into an in-memory [`ImageFile`]

use std::path::{Path, PathBuf};
use stylegen_domain::ImageFile;
use thiserror::Error;
use tracing::debug;

const FALLBACK_MIME: &str = "application/octet-stream";

#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("Could not read image {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image file is empty: {0}")]
    Empty(PathBuf),

    #[error("Not an image file: {path} ({mime_type})")]
    NotAnImage { path: PathBuf, mime_type: String },
}

/// Read `path` and guess its MIME type from the extension.
///
/// Unknown extensions are sent as `application/octet-stream`; known
/// non-image types are rejected.
pub async fn load_image_file(path: &Path) -> Result<ImageFile, ImageLoadError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| ImageLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    if bytes.is_empty() {
        return Err(ImageLoadError::Empty(path.to_path_buf()));
    }

    let mime_type = match mime_guess::from_path(path).first_raw() {
        Some(mime) if mime.starts_with("image/") => mime.to_string(),
        Some(mime) => {
            return Err(ImageLoadError::NotAnImage {
                path: path.to_path_buf(),
                mime_type: mime.to_string(),
            });
        }
        None => FALLBACK_MIME.to_string(),
    };

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    debug!(
        "Loaded image {} ({}, {} bytes)",
        file_name,
        mime_type,
        bytes.len()
    );
    Ok(ImageFile::new(file_name, mime_type, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_loads_png_with_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portrait.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let file = load_image_file(&path).await.unwrap();
        assert_eq!(file.file_name, "portrait.png");
        assert_eq!(file.mime_type, "image/png");
        assert_eq!(file.len(), 4);
    }

    #[tokio::test]
    async fn test_unknown_extension_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.unknownext");
        std::fs::write(&path, [1, 2, 3]).unwrap();

        let file = load_image_file(&path).await.unwrap();
        assert_eq!(file.mime_type, FALLBACK_MIME);
    }

    #[tokio::test]
    async fn test_rejects_non_image_and_empty_and_missing() {
        let dir = tempfile::tempdir().unwrap();

        let text = dir.path().join("notes.txt");
        std::fs::write(&text, "hello").unwrap();
        assert!(matches!(
            load_image_file(&text).await,
            Err(ImageLoadError::NotAnImage { .. })
        ));

        let empty = dir.path().join("empty.jpg");
        std::fs::write(&empty, b"").unwrap();
        assert!(matches!(
            load_image_file(&empty).await,
            Err(ImageLoadError::Empty(_))
        ));

        assert!(matches!(
            load_image_file(&dir.path().join("missing.png")).await,
            Err(ImageLoadError::Read { .. })
        ));
    }
}
