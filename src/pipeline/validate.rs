//! Upload validation: decide whether an upload may proceed to conversion.
//!
//! Checks run in a fixed order and the first failure wins, so a client that
//! sends an empty filename *and* an oversized body always hears about the
//! filename. Nothing here touches the filesystem or the engine.

use crate::error::ValidationError;
use axum::body::Bytes;

/// Largest accepted upload in bytes (inclusive).
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// Extensions accepted after the final `.`, compared case-insensitively.
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf"];

/// A received upload.
#[derive(Debug, Clone)]
pub struct Upload {
    /// Filename as declared by the client, unsanitised.
    pub filename: String,
    /// The received bytes. Empty when reading stopped at the size ceiling.
    pub content: Bytes,
    /// Number of bytes actually received, never a client-declared header.
    pub size: u64,
}

impl Upload {
    pub fn new(filename: impl Into<String>, content: impl Into<Bytes>) -> Self {
        let content = content.into();
        Self {
            filename: filename.into(),
            size: content.len() as u64,
            content,
        }
    }
}

/// Validate an upload, or its absence.
pub fn validate(upload: Option<&Upload>) -> Result<(), ValidationError> {
    let upload = upload.ok_or(ValidationError::MissingFile)?;
    validate_filename(&upload.filename)?;
    validate_size(upload.size)
}

/// Non-empty selection and extension checks.
pub fn validate_filename(filename: &str) -> Result<(), ValidationError> {
    if filename.is_empty() {
        return Err(ValidationError::NoFileSelected);
    }
    if !allowed_file(filename) {
        return Err(ValidationError::InvalidFileType);
    }
    Ok(())
}

pub fn validate_size(size: u64) -> Result<(), ValidationError> {
    if size > MAX_UPLOAD_BYTES {
        return Err(ValidationError::FileTooLarge);
    }
    Ok(())
}

/// True when the suffix after the final `.` is whitelisted.
pub fn allowed_file(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => ALLOWED_EXTENSIONS
            .iter()
            .any(|allowed| ext.eq_ignore_ascii_case(allowed)),
        None => false,
    }
}
