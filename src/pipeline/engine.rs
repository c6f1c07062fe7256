//! The conversion engine boundary.
//!
//! The engine is an opaque collaborator that reads a PDF from one path and
//! writes a DOCX to another. It is modelled as a trait so the orchestrator
//! sees an explicit `Result` instead of whatever failure mode the underlying
//! tool uses, and so tests can substitute in-process fakes.
//!
//! [`CommandEngine`] is the shipped adapter: it runs an external program,
//! `pdf2docx` by default, as a child process.

use crate::error::EngineError;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Page range handed to the engine. Indices are 0-based; `end` is exclusive
/// and `None` means "to the end of the document".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRange {
    pub start: usize,
    pub end: Option<usize>,
}

impl PageRange {
    /// Every page of the document.
    pub const ALL: PageRange = PageRange {
        start: 0,
        end: None,
    };
}

/// A PDF → DOCX converter operating on filesystem paths.
#[async_trait]
pub trait ConversionEngine: Send + Sync {
    /// Human-readable engine name reported by the health probe.
    fn name(&self) -> &str;

    /// Convert `input` into `output`.
    ///
    /// `output` already exists (empty) when this is called. Implementations
    /// must be cancel-safe: if the returned future is dropped, no work may
    /// keep writing to `output` afterwards.
    async fn convert(&self, input: &Path, output: &Path, pages: PageRange)
        -> Result<(), EngineError>;
}

/// Runs an external converter program.
///
/// Arguments are templates. `{input}`, `{output}`, `{start}` and `{end}` are
/// substituted per call; an argument mentioning `{end}` is left out entirely
/// when the range is open-ended.
#[derive(Debug, Clone)]
pub struct CommandEngine {
    name: String,
    program: String,
    args: Vec<String>,
}

impl CommandEngine {
    pub fn new(
        name: impl Into<String>,
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The `pdf2docx` command-line tool, invoked as `program`.
    pub fn pdf2docx(program: impl Into<String>) -> Self {
        Self::new(
            "pdf2docx",
            program,
            ["convert", "{input}", "{output}", "--start={start}", "--end={end}"],
        )
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Expand the argument templates for one call.
    pub fn render_args(&self, input: &Path, output: &Path, pages: PageRange) -> Vec<String> {
        let input = input.to_string_lossy();
        let output = output.to_string_lossy();
        let start = pages.start.to_string();
        self.args
            .iter()
            .filter_map(|arg| {
                let arg = match pages.end {
                    Some(end) => arg.replace("{end}", &end.to_string()),
                    None if arg.contains("{end}") => return None,
                    None => arg.clone(),
                };
                Some(
                    arg.replace("{input}", &input)
                        .replace("{output}", &output)
                        .replace("{start}", &start),
                )
            })
            .collect()
    }
}

impl Default for CommandEngine {
    fn default() -> Self {
        Self::pdf2docx("pdf2docx")
    }
}

#[async_trait]
impl ConversionEngine for CommandEngine {
    fn name(&self) -> &str {
        &self.name
    }

    async fn convert(
        &self,
        input: &Path,
        output: &Path,
        pages: PageRange,
    ) -> Result<(), EngineError> {
        let args = self.render_args(input, output, pages);
        debug!("Running {} {:?}", self.program, args);

        let result = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| EngineError::Launch {
                program: self.program.clone(),
                detail: e.to_string(),
            })?;

        if result.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&result.stderr);
        Err(EngineError::Failed(failure_message(&stderr, result.status)))
    }
}

/// Pick the most useful line of a failed run: the last non-empty stderr line,
/// which is where Python tracebacks and most CLIs put the actual error.
fn failure_message(stderr: &str, status: std::process::ExitStatus) -> String {
    stderr
        .lines()
        .map(str::trim)
        .rfind(|l| !l.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("engine exited with {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn paths() -> (PathBuf, PathBuf) {
        (PathBuf::from("/t/in.pdf"), PathBuf::from("/t/out.docx"))
    }

    #[test]
    fn pdf2docx_args_for_whole_document() {
        let (i, o) = paths();
        let engine = CommandEngine::default();
        assert_eq!(
            engine.render_args(&i, &o, PageRange::ALL),
            vec!["convert", "/t/in.pdf", "/t/out.docx", "--start=0"]
        );
        assert_eq!(engine.name(), "pdf2docx");
        assert_eq!(engine.program(), "pdf2docx");
    }

    #[test]
    fn bounded_range_keeps_end_argument() {
        let (i, o) = paths();
        let engine = CommandEngine::default();
        let args = engine.render_args(&i, &o, PageRange { start: 2, end: Some(5) });
        assert_eq!(args[3], "--start=2");
        assert_eq!(args[4], "--end=5");
    }

    #[cfg(unix)]
    #[test]
    fn failure_message_prefers_last_stderr_line() {
        use std::os::unix::process::ExitStatusExt;

        let status = std::process::ExitStatus::from_raw(1 << 8);
        let msg = failure_message("Traceback...\n  File x\nValueError: bad xref\n\n", status);
        assert_eq!(msg, "ValueError: bad xref");

        let msg = failure_message("  \n", status);
        assert_eq!(msg, "engine exited with exit status: 1");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn successful_command() {
        let tmp = tempfile::TempDir::new().unwrap();
        let input = tmp.path().join("in.pdf");
        let output = tmp.path().join("out.docx");
        std::fs::write(&input, b"%PDF-1.4").unwrap();

        let engine = CommandEngine::new("copy", "cp", ["{input}", "{output}"]);
        engine.convert(&input, &output, PageRange::ALL).await.unwrap();
        assert_eq!(std::fs::read(&output).unwrap(), b"%PDF-1.4");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_command_reports_stderr() {
        let (i, o) = paths();
        let engine = CommandEngine::new("sh", "sh", ["-c", "echo 'boom: broken file' >&2; exit 3"]);
        let err = engine.convert(&i, &o, PageRange::ALL).await.unwrap_err();
        assert_eq!(err, EngineError::Failed("boom: broken file".into()));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn silent_failure_reports_exit_status() {
        let (i, o) = paths();
        let engine = CommandEngine::new("false", "false", Vec::<String>::new());
        let err = engine.convert(&i, &o, PageRange::ALL).await.unwrap_err();
        assert!(err.to_string().contains("exit"), "got: {err}");
    }

    #[tokio::test]
    async fn missing_program_is_launch_error() {
        let (i, o) = paths();
        let engine = CommandEngine::pdf2docx("definitely-not-a-real-converter-binary");
        let err = engine.convert(&i, &o, PageRange::ALL).await.unwrap_err();
        assert!(matches!(err, EngineError::Launch { .. }), "got: {err:?}");
    }
}
