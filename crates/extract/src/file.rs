//! Filesystem facts about the file being analysed.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::instrument;

use crate::mime::MimeType;

/// Basic information about a file.
///
/// Only `path` is guaranteed. The remaining fields are `None` when the step
/// that produces them failed; see [`file_info`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileInfo {
    /// The path as given, not canonicalised.
    pub path: PathBuf,
    pub size: Option<u64>,
    /// Lowercase hex SHA-256 digest of the contents (64 characters).
    pub sha256: Option<String>,
    pub mime_type: Option<String>,
}
impl FileInfo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_sha256(mut self, sha256: impl Into<String>) -> Self {
        self.sha256 = Some(sha256.into());
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// Stat, sniff and hash a file.
///
/// This never fails. I/O errors are logged and whatever was gathered before
/// the failure is returned, so a missing or unreadable file yields a record
/// holding just its path.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn file_info(path: impl AsRef<Path>) -> FileInfo {
    let mut info = FileInfo::new(path.as_ref());
    match gather(&mut info) {
        Ok(()) => tracing::debug!(size = info.size, sha256 = info.sha256.as_deref(), "Gathered file information"),
        Err(err) => {
            tracing::warn!(error = %err, "Unable to read file; continuing with partial file information");
        },
    }
    info
}

fn gather(info: &mut FileInfo) -> io::Result<()> {
    let file = File::open(&info.path)?;
    info.size = Some(file.metadata()?.len());
    let mut reader = BufReader::new(file);
    info.mime_type = MimeType::from_magic_bytes(reader.fill_buf()?).map(|mime| mime.as_str().to_string());
    let mut hasher = Sha256::new();
    io::copy(&mut reader, &mut hasher)?;
    info.sha256 = Some(format!("{:x}", hasher.finalize()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        let info = FileInfo::new("a/b.jpg").with_size(10).with_sha256("ab").with_mime_type("image/jpeg");
        assert_eq!(info.path, PathBuf::from("a/b.jpg"));
        assert_eq!(info.size, Some(10));
        assert_eq!(info.sha256.as_deref(), Some("ab"));
        assert_eq!(info.mime_type.as_deref(), Some("image/jpeg"));
    }

    #[test]
    fn new_has_only_a_path() {
        let info = FileInfo::new("noext");
        assert_eq!(info.size, None);
        assert_eq!(info.sha256, None);
        assert_eq!(info.mime_type, None);
    }
}
