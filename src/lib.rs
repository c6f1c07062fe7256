//! # pdf2docx-api
//!
//! An HTTP service that turns an uploaded PDF into a Word (DOCX) document.
//!
//! The conversion itself is done by an external engine (the `pdf2docx` tool
//! by default). This crate owns everything around it: validating the upload,
//! staging it on disk for a path-based converter, guaranteeing the staged
//! files are removed, and mapping every outcome to a well-formed response.
//!
//! ## Request Pipeline
//!
//! ```text
//! POST /convert (multipart, field "file")
//!  │
//!  ├─ 1. Upload    pull the "file" field, counting bytes as they arrive
//!  ├─ 2. Validate  presence → filename → extension → size (first failure wins)
//!  ├─ 3. Stage     write bytes to a uniquely named temp .pdf
//!  ├─ 4. Engine    convert into a uniquely named temp .docx (optionally bounded)
//!  ├─ 5. Collect   read the .docx into memory
//!  ├─ 6. Release   delete both temp files, whatever happened above
//!  └─ 7. Respond   200 attachment | 400 / 500 {"error": …}
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2docx_api::{serve, AppState, CommandEngine, Converter, ServiceConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServiceConfig::default();
//!     let converter = Converter::new(Arc::new(CommandEngine::default()), config);
//!     serve("0.0.0.0:5000", AppState::new(converter)).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2docx-api` binary (clap + anyhow + tracing-subscriber) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod api;
pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use api::{build_router, serve, AppState};
pub use config::{ServiceConfig, ServiceConfigBuilder};
pub use convert::Converter;
pub use error::{ConvertError, EngineError, ServiceError, ValidationError};
pub use output::{ConversionOutcome, ConvertedDocument};
pub use pipeline::engine::{CommandEngine, ConversionEngine, PageRange};
pub use pipeline::validate::{Upload, MAX_UPLOAD_BYTES};
