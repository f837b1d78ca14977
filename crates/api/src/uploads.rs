//! Filesystem storage for uploaded photos.
//!
//! Photos are written under the configured upload root in per-purpose
//! subdirectories (`photos/`, `clock_in/`, `clock_out/`) with generated
//! names, and referenced from database rows by their relative path.
//!
//! Ordering rule: the file is stored *before* the owning row is inserted or
//! updated, and the caller removes the file again if the database write
//! fails. A failed store therefore aborts the whole operation and never
//! leaves a row pointing at a missing file.

use std::path::{Path, PathBuf};

use hrms_core::photo::{extension_for, validate_photo};
use uuid::Uuid;

/// Subdirectory for employee portrait photos.
pub const DIR_EMPLOYEE_PHOTOS: &str = "photos";
/// Subdirectory for clock-in captures.
pub const DIR_CLOCK_IN: &str = "clock_in";
/// Subdirectory for clock-out captures.
pub const DIR_CLOCK_OUT: &str = "clock_out";

/// Errors from the photo store.
#[derive(Debug, thiserror::Error)]
pub enum PhotoStoreError {
    /// The upload failed validation (empty, oversized, or not an image).
    #[error("{0}")]
    Invalid(String),

    /// The filesystem write or delete failed.
    #[error("Photo storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes and removes photo files under a fixed root directory.
#[derive(Debug)]
pub struct PhotoStore {
    root: PathBuf,
}

impl PhotoStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Validate and persist uploaded photo bytes into `subdir`.
    ///
    /// Returns the stored file's path relative to the upload root, the form
    /// in which it is persisted on the owning row.
    pub async fn store(&self, subdir: &str, bytes: &[u8]) -> Result<String, PhotoStoreError> {
        let format = validate_photo(bytes).map_err(PhotoStoreError::Invalid)?;

        let file_name = format!("{}.{}", Uuid::new_v4(), extension_for(format));
        let relative = format!("{subdir}/{file_name}");

        let dir = self.root.join(subdir);
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(&file_name), bytes).await?;

        Ok(relative)
    }

    /// Remove a previously stored photo by its relative path.
    ///
    /// Missing files are not an error (the delete is idempotent). Paths that
    /// escape the upload root are rejected.
    pub async fn remove(&self, relative: &str) -> Result<(), PhotoStoreError> {
        let rel = Path::new(relative);
        let escapes = rel.is_absolute()
            || rel
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir));
        if escapes {
            return Err(PhotoStoreError::Invalid(format!(
                "Refusing to remove path outside the upload root: {relative}"
            )));
        }
        let path = self.root.join(rel);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Best-effort removal for compensating deletes; logs instead of
    /// propagating so the original error stays the one reported.
    pub async fn remove_quietly(&self, relative: &str) {
        if let Err(e) = self.remove(relative).await {
            tracing::warn!(path = relative, error = %e, "Failed to clean up stored photo");
        }
    }
}
