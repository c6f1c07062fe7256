//! Pipeline stages for PDF-to-DOCX conversion.
//!
//! Each submodule owns one concern of the request pipeline so it can be
//! tested without an HTTP server or a real converter.
//!
//! ## Data Flow
//!
//! ```text
//! validate ──▶ sanitize ──▶ artifact ──▶ engine ──▶ artifact
//! (reject)     (name)       (write in)   (convert)  (read out, release)
//! ```
//!
//! 1. [`validate`] — ordered presence / filename / extension / size checks
//! 2. [`sanitize`] — derive a safe `.docx` attachment name
//! 3. [`artifact`] — uniquely named temp files with guaranteed release
//! 4. [`engine`]   — the path-based converter boundary and its process adapter
//!
//! [`crate::convert`] strings these together.

pub mod artifact;
pub mod engine;
pub mod sanitize;
pub mod validate;
