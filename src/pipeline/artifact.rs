//! Transient artifacts: uniquely named temp files that exist only to hand
//! bytes to and from a path-based conversion engine.
//!
//! ## Lifecycle
//!
//! An artifact is created with [`TransientArtifact::create`] and released
//! with [`TransientArtifact::release`], which deletes the file and logs (never
//! returns) any failure. If an artifact is dropped without being released, for
//! example while unwinding from a panic, the wrapped [`TempPath`] still removes
//! the file, silently.
//!
//! Uniqueness comes from `tempfile`'s random names created with `O_EXCL`, so
//! concurrent requests can never open each other's artifacts.

use crate::error::ConvertError;
use std::io;
use std::path::Path;
use tempfile::TempPath;
use tracing::{debug, warn};

/// Prefix shared by every artifact this service creates.
pub const ARTIFACT_PREFIX: &str = "pdf2docx-";

/// A temp file owned by a single conversion.
#[derive(Debug)]
pub struct TransientArtifact {
    path: TempPath,
}

impl TransientArtifact {
    /// Create an empty, uniquely named file in `dir` ending with `suffix`.
    pub fn create(dir: &Path, suffix: &str) -> Result<Self, ConvertError> {
        let file = tempfile::Builder::new()
            .prefix(ARTIFACT_PREFIX)
            .suffix(suffix)
            .tempfile_in(dir)
            .map_err(|source| ConvertError::Artifact {
                dir: dir.to_path_buf(),
                source,
            })?;
        let path = file.into_temp_path();
        debug!("Allocated artifact {}", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the file. A file that is already gone counts as released.
    ///
    /// Failures are logged as warnings and reported as `false`; they never
    /// propagate to the caller.
    pub fn release(self) -> bool {
        let shown = self.path.display().to_string();
        match self.path.close() {
            Ok(()) => {
                debug!("Released artifact {}", shown);
                true
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Artifact {} was already removed", shown);
                true
            }
            Err(e) => {
                warn!("Cleanup error for {}: {}", shown, e);
                false
            }
        }
    }
}
