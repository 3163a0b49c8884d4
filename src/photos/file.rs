use super::{Permission, PhotoLibrary, PickResult};
use crate::domain::error::{Result, UrbanfyError};
use crate::domain::PhotoPayload;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;

/// Photo library backed by files chosen up front (e.g. on the command line).
///
/// Each [`pick_image`](PhotoLibrary::pick_image) consumes the next queued
/// path; an empty queue behaves like a cancelled pick.
#[derive(Debug, Default)]
pub struct FilePhotoLibrary {
    queue: Mutex<VecDeque<PathBuf>>,
}

impl FilePhotoLibrary {
    pub fn new(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            queue: Mutex::new(paths.into_iter().collect()),
        }
    }

    /// Paths not yet picked.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.lock().map_or(0, |queue| queue.len())
    }

    fn next_path(&self) -> Result<Option<PathBuf>> {
        let mut queue = self
            .queue
            .lock()
            .map_err(|e| UrbanfyError::PhotoLibrary(format!("queue poisoned: {e}")))?;
        Ok(queue.pop_front())
    }
}

#[async_trait::async_trait]
impl PhotoLibrary for FilePhotoLibrary {
    async fn request_permission(&self) -> Result<Permission> {
        // Files named by the user are readable by definition.
        Ok(Permission::Granted)
    }

    async fn pick_image(&self) -> Result<PickResult> {
        let Some(path) = self.next_path()? else {
            return Ok(PickResult::Cancelled);
        };

        let bytes = tokio::fs::read(&path).await.map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "failed to read photo");
            UrbanfyError::PhotoLibrary(format!("{}: {e}", path.display()))
        })?;

        tracing::debug!(path = %path.display(), size = bytes.len(), "photo encoded");
        Ok(PickResult::Picked(PhotoPayload::new(STANDARD.encode(bytes))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_pick_encodes_files_in_order() {
        let mut first = tempfile::NamedTempFile::new().unwrap();
        first.write_all(b"abc").unwrap();
        let mut second = tempfile::NamedTempFile::new().unwrap();
        second.write_all(b"hello").unwrap();

        let library = FilePhotoLibrary::new([first.path().to_path_buf(), second.path().to_path_buf()]);

        assert_eq!(library.request_permission().await.unwrap(), Permission::Granted);
        assert_eq!(
            library.pick_image().await.unwrap(),
            PickResult::Picked(PhotoPayload::new("YWJj"))
        );
        assert_eq!(
            library.pick_image().await.unwrap(),
            PickResult::Picked(PhotoPayload::new("aGVsbG8="))
        );
        assert_eq!(library.pick_image().await.unwrap(), PickResult::Cancelled);
    }

    #[tokio::test]
    async fn test_missing_file_is_library_error() {
        let dir = tempfile::tempdir().unwrap();
        let library = FilePhotoLibrary::new([dir.path().join("nope.jpg")]);

        let err = library.pick_image().await.unwrap_err();
        assert!(matches!(err, UrbanfyError::PhotoLibrary(_)));
        assert_eq!(library.remaining(), 0);
    }
}
