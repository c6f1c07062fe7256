//! Service configuration.
//!
//! Only deployment knobs live here: where transient artifacts go and how long
//! the engine may run. The upload ceiling and the extension whitelist are
//! fixed constants in [`crate::pipeline::validate`], not configuration.

use crate::error::ServiceError;
use std::path::PathBuf;
use std::time::Duration;

/// Default bound on a single engine invocation, in seconds.
pub const DEFAULT_ENGINE_TIMEOUT_SECS: u64 = 300;

/// Configuration for the conversion service.
///
/// Built via [`ServiceConfig::builder()`] or using
/// [`ServiceConfig::default()`].
///
/// # Example
/// ```rust
/// use pdf2docx_api::ServiceConfig;
///
/// let config = ServiceConfig::builder()
///     .engine_timeout_secs(Some(120))
///     .build()
///     .unwrap();
/// assert_eq!(config.engine_timeout_secs, Some(120));
/// ```
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Directory for transient input/output artifacts. Default: the OS temp dir.
    pub temp_dir: Option<PathBuf>,

    /// Upper bound on one engine call in seconds. `None` waits indefinitely.
    /// Default: [`DEFAULT_ENGINE_TIMEOUT_SECS`].
    pub engine_timeout_secs: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            temp_dir: None,
            engine_timeout_secs: Some(DEFAULT_ENGINE_TIMEOUT_SECS),
        }
    }
}

impl ServiceConfig {
    /// Create a new builder for `ServiceConfig`.
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder {
            config: Self::default(),
        }
    }

    /// The directory transient artifacts are created in.
    pub fn artifact_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    pub fn engine_timeout(&self) -> Option<Duration> {
        self.engine_timeout_secs.map(Duration::from_secs)
    }
}

/// Builder for [`ServiceConfig`].
#[derive(Debug)]
pub struct ServiceConfigBuilder {
    config: ServiceConfig,
}

impl ServiceConfigBuilder {
    pub fn temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.temp_dir = Some(dir.into());
        self
    }

    pub fn engine_timeout_secs(mut self, secs: Option<u64>) -> Self {
        self.config.engine_timeout_secs = secs;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ServiceConfig, ServiceError> {
        let c = &self.config;
        if c.engine_timeout_secs == Some(0) {
            return Err(ServiceError::InvalidConfig(
                "Engine timeout must be >= 1 second (use None to disable)".into(),
            ));
        }
        if let Some(ref dir) = c.temp_dir {
            if !dir.is_dir() {
                return Err(ServiceError::InvalidConfig(format!(
                    "Temp directory '{}' does not exist or is not a directory",
                    dir.display()
                )));
            }
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = ServiceConfig::default();
        assert!(c.temp_dir.is_none());
        assert_eq!(c.engine_timeout_secs, Some(DEFAULT_ENGINE_TIMEOUT_SECS));
        assert_eq!(c.artifact_dir(), std::env::temp_dir());
    }

    #[test]
    fn zero_timeout_rejected() {
        let err = ServiceConfig::builder()
            .engine_timeout_secs(Some(0))
            .build()
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("timeout"), "got: {msg}");
        assert!(msg.contains(">= 1 second"), "got: {msg}");
        assert!(msg.is_ascii(), "got: {msg}");
    }

    #[test]
    fn disabled_timeout_allowed() {
        let c = ServiceConfig::builder()
            .engine_timeout_secs(None)
            .build()
            .unwrap();
        assert!(c.engine_timeout().is_none());
    }

    #[test]
    fn missing_temp_dir_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        let err = ServiceConfig::builder().temp_dir(&missing).build().unwrap_err();
        assert!(matches!(err, ServiceError::InvalidConfig(_)));
    }

    #[test]
    fn existing_temp_dir_used_for_artifacts() {
        let tmp = tempfile::TempDir::new().unwrap();
        let c = ServiceConfig::builder().temp_dir(tmp.path()).build().unwrap();
        assert_eq!(c.artifact_dir(), tmp.path());
    }
}
