//! Pull the `file` upload out of a multipart body.
//!
//! Only the first `file` field that carries a filename counts as an upload;
//! a `file` field without one is an ordinary form value. The upload body is
//! counted while it streams in and reading stops once the ceiling is passed,
//! so an oversized upload never sits in memory in full.

use crate::pipeline::validate::{Upload, MAX_UPLOAD_BYTES};
use axum::body::Bytes;
use axum::extract::multipart::Field;
use axum::extract::Multipart;
use tracing::{debug, warn};

/// Name of the multipart field carrying the PDF.
pub const UPLOAD_FIELD: &str = "file";

/// Read the upload, if any.
///
/// Returns `None` when no usable `file` field exists, including when the
/// body is malformed. An oversized `file` field comes back as an [`Upload`]
/// whose `size` exceeds the ceiling, so the validator still checks the
/// filename first.
pub async fn read_upload(multipart: &mut Multipart) -> Option<Upload> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return None,
            Err(e) => {
                warn!("Malformed multipart body: {}", e.body_text());
                return None;
            }
        };

        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            debug!("Ignoring '{}' field without a filename", UPLOAD_FIELD);
            continue;
        };

        return read_field(field, filename).await;
    }
}

async fn read_field(mut field: Field<'_>, filename: String) -> Option<Upload> {
    let mut content = Vec::new();
    let mut size: u64 = 0;

    loop {
        match field.chunk().await {
            Ok(Some(chunk)) => {
                size += chunk.len() as u64;
                if size > MAX_UPLOAD_BYTES {
                    break;
                }
                content.extend_from_slice(&chunk);
            }
            Ok(None) => break,
            Err(e) => {
                warn!("Failed to read upload '{}': {}", filename, e.body_text());
                return None;
            }
        }
    }

    let content = if size > MAX_UPLOAD_BYTES {
        Bytes::new()
    } else {
        Bytes::from(content)
    };
    debug!("Received upload '{}' ({} bytes)", filename, size);
    Some(Upload {
        filename,
        content,
        size,
    })
}
