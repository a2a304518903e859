use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use uuid::Uuid;

pub const MAX_FILENAME_BYTES: usize = 255;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilenameError {
    #[error("name is empty")]
    Empty,
    #[error("name must not be '.' or '..'")]
    DotName,
    #[error("name must not contain path separators")]
    PathSeparator,
    #[error("name must not contain NUL characters")]
    Nul,
    #[error("name is longer than {MAX_FILENAME_BYTES} bytes")]
    TooLong,
}

/// Checks that a client supplied filename can be used verbatim as a single
/// path component inside the upload directory.
pub fn validate_filename(name: &str) -> Result<&str, FilenameError> {
    if name.is_empty() {
        return Err(FilenameError::Empty);
    }
    if name == "." || name == ".." {
        return Err(FilenameError::DotName);
    }
    if name.contains(['/', '\\']) {
        return Err(FilenameError::PathSeparator);
    }
    if name.contains('\0') {
        return Err(FilenameError::Nul);
    }
    if name.len() > MAX_FILENAME_BYTES {
        return Err(FilenameError::TooLong);
    }
    Ok(name)
}

/// Writes `bytes` to `dir/name`, replacing any existing file.
///
/// The content lands in a temporary sibling first and is renamed into place,
/// so readers only ever see a complete upload. `name` must already be
/// validated.
pub async fn store_upload(dir: &Path, name: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
    let destination = dir.join(name);
    let staging = dir.join(format!(".{}.part", Uuid::new_v4()));

    if let Err(err) = fs::write(&staging, bytes).await {
        let _ = fs::remove_file(&staging).await;
        return Err(err);
    }

    if let Err(err) = fs::rename(&staging, &destination).await {
        let _ = fs::remove_file(&staging).await;
        return Err(err);
    }

    Ok(destination)
}
