//! Input directory scanning.
//!
//! Lists one directory level, keeps regular files whose name carries a
//! supported image extension and returns them sorted by file name so
//! repeated runs process files in the same order.

use std::io;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use mime::Mime;

use crate::TRACING_TARGET_SCAN;

/// Image formats accepted by a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// `.jpg` or `.jpeg`
    Jpeg,
    /// `.png`
    Png,
}

impl ImageFormat {
    /// Detects the format from a file name's extension, ignoring case.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
            Some(Self::Jpeg)
        } else if lower.ends_with(".png") {
            Some(Self::Png)
        } else {
            None
        }
    }

    /// MIME type sent to the OCR provider.
    pub fn mime_type(self) -> Mime {
        match self {
            Self::Jpeg => mime::IMAGE_JPEG,
            Self::Png => mime::IMAGE_PNG,
        }
    }
}

/// An image file selected for processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputImage {
    /// Full path to the file.
    pub path: PathBuf,
    /// File name as it appears in the report, lossily decoded if needed.
    pub file_name: String,
    /// Format detected from the extension.
    pub format: ImageFormat,
}

impl InputImage {
    /// Reads the full file content.
    pub async fn read(&self) -> io::Result<Bytes> {
        tokio::fs::read(&self.path).await.map(Bytes::from)
    }
}

/// Lists the supported image files directly inside `dir`.
///
/// Entries that are not regular files (after following symlinks) are skipped.
/// Names that are not valid UTF-8 keep their real path but are reported with
/// invalid sequences replaced by U+FFFD. The result is sorted by file name.
pub async fn scan_images(dir: &Path) -> io::Result<Vec<InputImage>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut images = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let file_name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                let lossy = raw.to_string_lossy().into_owned();
                tracing::debug!(
                    target: TRACING_TARGET_SCAN,
                    path = %entry.path().display(),
                    file = %lossy,
                    "file name is not valid UTF-8, reporting it lossily"
                );
                lossy
            }
        };

        let Some(format) = ImageFormat::from_file_name(&file_name) else {
            continue;
        };

        let path = entry.path();
        match tokio::fs::metadata(&path).await {
            Ok(metadata) if metadata.is_file() => {}
            Ok(_) => {
                tracing::debug!(
                    target: TRACING_TARGET_SCAN,
                    file = %file_name,
                    "skipping non-file entry with image extension"
                );
                continue;
            }
            Err(err) => {
                tracing::warn!(
                    target: TRACING_TARGET_SCAN,
                    file = %file_name,
                    error = %err,
                    "skipping unreadable entry"
                );
                continue;
            }
        }

        images.push(InputImage {
            path,
            file_name,
            format,
        });
    }

    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    tracing::debug!(
        target: TRACING_TARGET_SCAN,
        dir = %dir.display(),
        images = images.len(),
        "input directory scanned"
    );

    Ok(images)
}
