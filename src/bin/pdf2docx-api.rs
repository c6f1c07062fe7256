//! Server binary for pdf2docx-api.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ServiceConfig`, installs logging, and serves.

use anyhow::{Context, Result};
use clap::Parser;
use pdf2docx_api::{serve, AppState, CommandEngine, ConversionEngine, Converter, ServiceConfig};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Serve on the default address
  pdf2docx-api

  # Custom port, converter on a non-standard path
  pdf2docx-api --port 8080 --engine /opt/venv/bin/pdf2docx

  # No engine timeout, artifacts on a dedicated volume
  pdf2docx-api --timeout 0 --temp-dir /scratch

  # Convert a file
  curl -F "file=@report.pdf" http://localhost:5000/convert -o report.docx

ENVIRONMENT VARIABLES:
  PDF2DOCX_HOST       Bind host
  PDF2DOCX_PORT       Bind port
  PDF2DOCX_ENGINE     Converter program
  PDF2DOCX_TIMEOUT    Engine timeout in seconds (0 disables)
  PDF2DOCX_TEMP_DIR   Directory for transient artifacts
  RUST_LOG            Overrides the log filter
"#;

/// Serve PDF → DOCX conversion over HTTP.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2docx-api",
    version,
    about = "Serve PDF to DOCX conversion over HTTP",
    long_about = "HTTP service exposing POST /convert (multipart field \"file\") and GET /health. \
Conversion is delegated to the pdf2docx command-line tool.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Address to bind.
    #[arg(long, env = "PDF2DOCX_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to bind.
    #[arg(short, long, env = "PDF2DOCX_PORT", default_value_t = 5000)]
    port: u16,

    /// Converter program (pdf2docx CLI).
    #[arg(long, env = "PDF2DOCX_ENGINE", default_value = "pdf2docx")]
    engine: String,

    /// Engine timeout in seconds; 0 waits indefinitely.
    #[arg(long, env = "PDF2DOCX_TIMEOUT",
          default_value_t = pdf2docx_api::config::DEFAULT_ENGINE_TIMEOUT_SECS)]
    timeout: u64,

    /// Directory for transient artifacts (default: system temp dir).
    #[arg(long, env = "PDF2DOCX_TEMP_DIR")]
    temp_dir: Option<PathBuf>,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDF2DOCX_VERBOSE")]
    verbose: bool,

    /// Only log errors.
    #[arg(short, long, env = "PDF2DOCX_QUIET", conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Configuration ────────────────────────────────────────────────────
    let mut builder = ServiceConfig::builder()
        .engine_timeout_secs((cli.timeout > 0).then_some(cli.timeout));
    if let Some(dir) = cli.temp_dir {
        builder = builder.temp_dir(dir);
    }
    let config = builder.build().context("invalid configuration")?;

    let engine = CommandEngine::pdf2docx(cli.engine);
    tracing::info!(
        "Engine: {} (program '{}', timeout {:?})",
        engine.name(),
        engine.program(),
        config.engine_timeout_secs
    );
    let state = AppState::new(Converter::new(Arc::new(engine), config));

    // ── Serve ────────────────────────────────────────────────────────────
    let addr = format!("{}:{}", cli.host, cli.port);
    serve(&addr, state)
        .await
        .with_context(|| format!("server on {addr} failed"))?;

    Ok(())
}
