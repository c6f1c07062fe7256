//! The conversion orchestrator.
//!
//! ## Resource contract
//!
//! Every accepted upload gets exactly one input artifact and one output
//! artifact. Both are released on every exit path: engine success, engine
//! failure, timeout, or an I/O error part-way through. Release happens only
//! after the output has been read fully into memory, so the response never
//! races the deletion.
//!
//! ## Why a spawned task?
//!
//! axum drops a handler future when the client disconnects. Running the
//! orchestration on its own task means an aborted request still finishes the
//! engine call and the cleanup instead of stopping at an arbitrary `.await`.

use crate::config::ServiceConfig;
use crate::error::{ConvertError, EngineError, ValidationError};
use crate::output::{ConversionOutcome, ConvertedDocument};
use crate::pipeline::artifact::TransientArtifact;
use crate::pipeline::engine::{ConversionEngine, PageRange};
use crate::pipeline::sanitize::output_filename;
use crate::pipeline::validate::{self, Upload};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, info_span, Instrument};

/// Owns the engine and configuration shared by all requests.
pub struct Converter {
    engine: Arc<dyn ConversionEngine>,
    config: ServiceConfig,
}

impl std::fmt::Debug for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Converter")
            .field("engine", &self.engine.name())
            .field("config", &self.config)
            .finish()
    }
}

impl Converter {
    pub fn new(engine: Arc<dyn ConversionEngine>, config: ServiceConfig) -> Self {
        Self { engine, config }
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Run the whole pipeline for one request: validate, then convert on a
    /// detached task that runs to completion even if the caller goes away.
    pub async fn process(self: &Arc<Self>, upload: Option<Upload>) -> ConversionOutcome {
        let checked = validate::validate(upload.as_ref());
        let upload = match (checked, upload) {
            (Ok(()), Some(upload)) => upload,
            (Err(e), _) => {
                info!("Rejected upload: {}", e.kind());
                return e.into();
            }
            (Ok(()), None) => return ValidationError::MissingFile.into(),
        };

        let this = Arc::clone(self);
        match tokio::spawn(async move { this.convert(upload).await }).await {
            Ok(outcome) => outcome,
            Err(e) => {
                let err = ConvertError::TaskFailed(e.to_string());
                error!("Unexpected error: {}", err);
                ConversionOutcome::Unexpected {
                    message: err.to_string(),
                }
            }
        }
    }

    /// Convert an already validated upload.
    pub async fn convert(&self, upload: Upload) -> ConversionOutcome {
        let filename = output_filename(&upload.filename);
        let span = info_span!("convert", file = %filename, bytes = upload.size);

        async move {
            let start = Instant::now();
            info!("Starting conversion of {}", filename);

            match self.run(&upload.content).await {
                Ok(bytes) => {
                    info!(
                        "Conversion completed for {} ({} bytes, {}ms)",
                        filename,
                        bytes.len(),
                        start.elapsed().as_millis()
                    );
                    ConversionOutcome::Success(ConvertedDocument { bytes, filename })
                }
                Err(ConvertError::Engine(e)) => {
                    error!("Conversion error: {}", e);
                    ConversionOutcome::ConversionFailed {
                        message: e.to_string(),
                    }
                }
                Err(e) => {
                    error!("Unexpected error: {}", e);
                    ConversionOutcome::Unexpected {
                        message: e.to_string(),
                    }
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Allocate artifacts, drive the engine, and release the artifacts no
    /// matter how driving went.
    async fn run(&self, content: &[u8]) -> Result<Vec<u8>, ConvertError> {
        let dir = self.config.artifact_dir();

        let input = TransientArtifact::create(&dir, ".pdf")?;
        let output = match TransientArtifact::create(&dir, ".docx") {
            Ok(output) => output,
            Err(e) => {
                input.release();
                return Err(e);
            }
        };

        let result = self
            .drive(&input, &output, content)
            .await
            .map_err(|e| redact_paths(e, input.path(), output.path(), &dir));

        input.release();
        output.release();
        result
    }

    async fn drive(
        &self,
        input: &TransientArtifact,
        output: &TransientArtifact,
        content: &[u8],
    ) -> Result<Vec<u8>, ConvertError> {
        tokio::fs::write(input.path(), content)
            .await
            .map_err(|source| ConvertError::WriteInput {
                path: input.path().to_path_buf(),
                source,
            })?;

        let call = self
            .engine
            .convert(input.path(), output.path(), PageRange::ALL);
        match self.config.engine_timeout() {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| EngineError::Timeout {
                    secs: limit.as_secs(),
                })??,
            None => call.await?,
        }

        let bytes = tokio::fs::read(output.path())
            .await
            .map_err(|source| ConvertError::ReadOutput {
                path: output.path().to_path_buf(),
                source,
            })?;
        if bytes.is_empty() {
            return Err(EngineError::EmptyOutput.into());
        }
        Ok(bytes)
    }
}

/// Keep artifact locations out of engine messages, which reach the client.
fn redact_paths(err: ConvertError, input: &Path, output: &Path, dir: &Path) -> ConvertError {
    match err {
        ConvertError::Engine(e) => ConvertError::Engine(
            e.redact(&input.to_string_lossy(), "<input>")
                .redact(&output.to_string_lossy(), "<output>")
                .redact(&dir.to_string_lossy(), "<tmp>"),
        ),
        other => other,
    }
}
