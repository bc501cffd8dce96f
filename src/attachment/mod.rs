//! Image attachment staging.
//!
//! A draft holds at most one image: a freshly picked file with a locally rendered preview, or a
//! reference to the image the remote already stores for the entity being edited.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::errors::AppError;

/// Largest binary accepted for staging (5 MiB).
pub const MAX_ATTACHMENT_BYTES: usize = 5 * 1024 * 1024;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// A binary picked by the user, not yet uploaded.
#[derive(Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl StagedFile {
    /// Wrap raw bytes, sniffing the content type from the image signature.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let content_type = sniff_image_type(&bytes)
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();
        Self {
            file_name: file_name.into(),
            content_type,
            bytes,
        }
    }

    /// Override the sniffed content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

impl std::fmt::Debug for StagedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StagedFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// The attachment slot of a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AttachmentSlot {
    #[default]
    Absent,
    /// A new binary and its `data:` URL preview
    Staged { file: StagedFile, preview: String },
    /// The image already stored remotely for the entity under edit
    Persisted { url: String },
}

impl AttachmentSlot {
    /// Slot for an entity loaded from the remote; blank URLs count as absent.
    pub fn persisted(url: Option<&str>) -> Self {
        match url.map(str::trim) {
            Some(url) if !url.is_empty() => AttachmentSlot::Persisted {
                url: url.to_string(),
            },
            _ => AttachmentSlot::Absent,
        }
    }

    /// Stage a new binary, replacing whatever the slot held.
    ///
    /// Oversized files are rejected and leave the slot untouched.
    pub async fn stage(&mut self, file: StagedFile) -> Result<(), AppError> {
        check_size(file.size())?;

        let (file, preview) = tokio::task::spawn_blocking(move || {
            let preview = data_url(&file);
            (file, preview)
        })
        .await?;

        tracing::debug!(file = ?file, "Staged attachment");
        *self = AttachmentSlot::Staged { file, preview };
        Ok(())
    }

    /// Read a file from disk and stage it.
    pub async fn stage_path(&mut self, path: impl AsRef<Path>) -> Result<(), AppError> {
        let path = path.as_ref();

        let metadata = tokio::fs::metadata(path).await?;
        check_size(usize::try_from(metadata.len()).unwrap_or(usize::MAX))?;

        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        self.stage(StagedFile::new(file_name, bytes)).await
    }

    /// Drop any staged binary and its preview.
    pub fn clear(&mut self) {
        *self = AttachmentSlot::Absent;
    }

    /// Something the UI can put in an `<img src>`.
    pub fn preview(&self) -> Option<&str> {
        match self {
            AttachmentSlot::Absent => None,
            AttachmentSlot::Staged { preview, .. } => Some(preview),
            AttachmentSlot::Persisted { url } => Some(url),
        }
    }

    /// The binary awaiting upload, if any.
    pub fn staged(&self) -> Option<&StagedFile> {
        match self {
            AttachmentSlot::Staged { file, .. } => Some(file),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, AttachmentSlot::Absent)
    }
}

fn check_size(size: usize) -> Result<(), AppError> {
    if size > MAX_ATTACHMENT_BYTES {
        tracing::warn!(size, limit = MAX_ATTACHMENT_BYTES, "Rejected oversized attachment");
        return Err(AppError::AttachmentTooLarge {
            size,
            limit: MAX_ATTACHMENT_BYTES,
        });
    }
    Ok(())
}

fn data_url(file: &StagedFile) -> String {
    format!(
        "data:{};base64,{}",
        file.content_type,
        STANDARD.encode(&file.bytes)
    )
}

/// Identify common web image formats by their leading bytes.
pub fn sniff_image_type(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
        [0x89, 0x50, 0x4E, 0x47, ..] => Some("image/png"),
        [0x47, 0x49, 0x46, 0x38, ..] => Some("image/gif"),
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => Some("image/webp"),
        _ => None,
    }
}
