//! Filename sanitising for the attachment name returned to the client.
//!
//! The rules follow the widely used `secure_filename` convention. Characters
//! are NFKD-decomposed and reduced to ASCII, so accented letters keep their
//! base letter. Separators become word breaks, whitespace collapses to `_`,
//! and anything outside `[A-Za-z0-9_.-]` is dropped. The result is
//! deterministic and never empty.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Token used when nothing safe survives sanitising.
pub const FALLBACK_NAME: &str = "document";

/// Extension given to converted documents.
pub const OUTPUT_EXTENSION: &str = "docx";

static RE_UNSAFE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_.-]").unwrap());

/// Reduce a client-supplied filename to a filesystem-safe token.
pub fn sanitize(raw: &str) -> String {
    let ascii: String = raw
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();
    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");
    let cleaned = RE_UNSAFE.replace_all(&joined, "");
    let trimmed = cleaned.trim_matches(|c| c == '.' || c == '_');

    if trimmed.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Derive the attachment name: sanitised base name with a `.docx` extension.
///
/// ```rust
/// use pdf2docx_api::pipeline::sanitize::output_filename;
///
/// assert_eq!(output_filename("Quarterly Report.PDF"), "Quarterly_Report.docx");
/// ```
pub fn output_filename(raw: &str) -> String {
    let safe = sanitize(raw);
    let base = match safe.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => safe.as_str(),
    };
    format!("{base}.{OUTPUT_EXTENSION}")
}
