//! The per-request result of the conversion pipeline.

use crate::error::ValidationError;

/// A converted document ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedDocument {
    /// The full DOCX bytes.
    pub bytes: Vec<u8>,
    /// Attachment name, already sanitised and ending in `.docx`.
    pub filename: String,
}

/// Tagged outcome of one request, produced once and consumed once by the
/// response mapper in [`crate::api::response`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    Success(ConvertedDocument),

    /// The upload was rejected before conversion.
    Invalid(ValidationError),

    /// The engine failed. `message` is safe to show to the client.
    ConversionFailed { message: String },

    /// Internal failure. `message` is for logs only.
    Unexpected { message: String },
}

impl ConversionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionOutcome::Success(_))
    }
}

impl From<ValidationError> for ConversionOutcome {
    fn from(e: ValidationError) -> Self {
        ConversionOutcome::Invalid(e)
    }
}
