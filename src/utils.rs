use std::{fs, path::Path};

use crate::error::{Result, RewriteError, RewriteErrorKind};

/// Reads a file's entire content, decoding it as UTF-8.
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => RewriteError::new(RewriteErrorKind::FileNotFound(
            path.display().to_string(),
        )),
        std::io::ErrorKind::PermissionDenied => RewriteError::new(
            RewriteErrorKind::PermissionDenied(path.display().to_string()),
        ),
        std::io::ErrorKind::InvalidData => {
            RewriteError::new(RewriteErrorKind::InvalidUtf8(path.display().to_string()))
                .with_source(e)
        }
        _ => RewriteError::new(RewriteErrorKind::ReadError(e.to_string()))
            .with_context(path.display().to_string()),
    })
}

/// Replaces a file's entire content, encoding it as UTF-8.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| match e.kind() {
        std::io::ErrorKind::PermissionDenied => RewriteError::new(
            RewriteErrorKind::PermissionDenied(path.display().to_string()),
        ),
        _ => RewriteError::new(RewriteErrorKind::WriteError(e.to_string()))
            .with_context(path.display().to_string()),
    })
}
