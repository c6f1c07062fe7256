//! Error types for the pdf2docx-api service.
//!
//! Three layers of failure, each with its own type:
//!
//! * [`ValidationError`] — the upload was rejected before anything touched the
//!   filesystem or the engine. Its `Display` text is exactly what the client
//!   sees in the `error` field of a 400 response.
//!
//! * [`EngineError`] — the external conversion engine refused or failed. This
//!   becomes a 500 "Conversion failed: …" response.
//!
//! * [`ConvertError`] — anything that can go wrong inside the orchestrator.
//!   Only the [`ConvertError::Engine`] variant reaches the client verbatim;
//!   every other variant is logged and downgraded to a generic message.
//!
//! [`ServiceError`] covers configuration and start-up, which never happen on
//! a request path.

use std::path::PathBuf;
use thiserror::Error;

/// Why an upload was rejected.
///
/// Variants are listed in the order the validator checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The request carried no `file` upload field.
    #[error("No file provided")]
    MissingFile,

    /// The `file` field was present but its filename was empty.
    #[error("No file selected")]
    NoFileSelected,

    /// The filename extension is not `pdf` (case-insensitive).
    #[error("Invalid file type. Only PDF files are allowed.")]
    InvalidFileType,

    /// The received content exceeded the upload ceiling.
    #[error("File size exceeds 50MB limit")]
    FileTooLarge,
}

impl ValidationError {
    /// Stable machine-readable name of the rejection kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::MissingFile => "MissingFile",
            ValidationError::NoFileSelected => "NoFileSelected",
            ValidationError::InvalidFileType => "InvalidFileType",
            ValidationError::FileTooLarge => "FileTooLarge",
        }
    }
}

/// Failure reported by a [`crate::pipeline::engine::ConversionEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The engine ran and reported an error.
    #[error("{0}")]
    Failed(String),

    /// The engine program could not be started.
    #[error("failed to launch '{program}': {detail}")]
    Launch { program: String, detail: String },

    /// The engine did not finish within the configured bound.
    #[error("engine timed out after {secs}s")]
    Timeout { secs: u64 },

    /// The engine reported success but wrote nothing.
    #[error("engine produced no output")]
    EmptyOutput,
}

impl EngineError {
    /// Replace every occurrence of `needle` in the message with `replacement`.
    ///
    /// Used to keep artifact paths out of client-visible text.
    pub fn redact(self, needle: &str, replacement: &str) -> Self {
        if needle.is_empty() {
            return self;
        }
        match self {
            EngineError::Failed(msg) => EngineError::Failed(msg.replace(needle, replacement)),
            EngineError::Launch { program, detail } => EngineError::Launch {
                program,
                detail: detail.replace(needle, replacement),
            },
            other => other,
        }
    }
}

/// Fatal errors inside the conversion orchestrator.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A transient artifact could not be allocated in the temp directory.
    #[error("Failed to allocate temporary artifact in '{dir}': {source}")]
    Artifact {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The upload bytes could not be written to the input artifact.
    #[error("Failed to write upload to '{path}': {source}")]
    WriteInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The engine's output artifact could not be read back.
    #[error("Failed to read converted output '{path}': {source}")]
    ReadOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The conversion engine failed. The only variant shown to clients.
    #[error("{0}")]
    Engine(#[from] EngineError),

    /// The conversion task panicked or was cancelled by the runtime.
    #[error("Conversion task failed: {0}")]
    TaskFailed(String),
}

/// Configuration and start-up errors.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The listener could not be bound.
    #[error("Failed to bind '{addr}': {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}
