//! Event image constraints and data-URL encoding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Largest accepted image, in bytes (5 MiB).
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

pub const ALLOWED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/jpg"];

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Image must be less than 5MB.")]
    TooLarge { size: u64 },
    #[error("Only .jpg, .jpeg, .png formats are allowed for the image.")]
    UnsupportedType { mime: String },
    #[error("Could not read image {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A file the user picked for an event, checked against the size and type
/// constraints at selection time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSelection {
    pub path: PathBuf,
    pub size: u64,
    pub mime: String,
}

impl ImageSelection {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Declared MIME type for a path, from its extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Size is checked before type.
pub fn check_image(size: u64, mime: &str) -> Result<(), ImageError> {
    if size > MAX_IMAGE_BYTES {
        return Err(ImageError::TooLarge { size });
    }
    if !ALLOWED_IMAGE_TYPES.contains(&mime) {
        return Err(ImageError::UnsupportedType {
            mime: mime.to_string(),
        });
    }
    Ok(())
}

/// Stat a picked file and check it against the image constraints.
pub async fn inspect(path: PathBuf) -> Result<ImageSelection, ImageError> {
    let meta = tokio::fs::metadata(&path)
        .await
        .map_err(|source| ImageError::Io {
            path: path.clone(),
            source,
        })?;
    let mime = mime_for_path(&path);
    check_image(meta.len(), mime)?;
    Ok(ImageSelection {
        size: meta.len(),
        mime: mime.to_string(),
        path,
    })
}

/// Read the whole file and encode it as a `data:` URL.
///
/// The constraints are re-checked on the bytes actually read, since the file
/// may have changed since it was selected.
pub async fn read_data_url(selection: &ImageSelection) -> Result<String, ImageError> {
    let bytes = tokio::fs::read(&selection.path)
        .await
        .map_err(|source| ImageError::Io {
            path: selection.path.clone(),
            source,
        })?;
    check_image(bytes.len() as u64, &selection.mime)?;
    Ok(encode_data_url(&selection.mime, &bytes))
}

pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MB: u64 = 1024 * 1024;

    #[test]
    fn test_check_image_matrix() {
        assert!(matches!(
            check_image(6 * MB, "image/png"),
            Err(ImageError::TooLarge { .. })
        ));
        assert!(matches!(
            check_image(MB, "image/gif"),
            Err(ImageError::UnsupportedType { .. })
        ));
        assert!(check_image(MB, "image/jpeg").is_ok());
        assert!(check_image(MAX_IMAGE_BYTES, "image/png").is_ok());
        assert!(check_image(MAX_IMAGE_BYTES + 1, "image/jpg").is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ImageError::TooLarge { size: 0 }.to_string(),
            "Image must be less than 5MB."
        );
        assert_eq!(
            ImageError::UnsupportedType { mime: "image/gif".into() }.to_string(),
            "Only .jpg, .jpeg, .png formats are allowed for the image."
        );
    }

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(Path::new("a/b/photo.JPG")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("banner.png")), "image/png");
        assert_eq!(mime_for_path(Path::new("anim.gif")), "image/gif");
        assert_eq!(mime_for_path(Path::new("README")), "application/octet-stream");
    }

    #[test]
    fn test_encode_data_url() {
        assert_eq!(encode_data_url("image/png", b"hi"), "data:image/png;base64,aGk=");
    }

    #[tokio::test]
    async fn test_inspect_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poster.png");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"\x89PNG").unwrap();

        let selection = inspect(path).await.unwrap();
        assert_eq!(selection.size, 4);
        assert_eq!(selection.mime, "image/png");
        assert_eq!(selection.file_name(), "poster.png");

        let url = read_data_url(&selection).await.unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn test_inspect_rejects_wrong_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("anim.gif");
        std::fs::write(&path, b"GIF89a").unwrap();
        assert!(matches!(
            inspect(path).await,
            Err(ImageError::UnsupportedType { .. })
        ));
    }

    #[tokio::test]
    async fn test_inspect_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            inspect(dir.path().join("nope.png")).await,
            Err(ImageError::Io { .. })
        ));
    }
}
