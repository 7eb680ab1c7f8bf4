use crate::error::{EngineError, Result};
use crate::options::OutputFormat;
use derive_builder::Builder;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Identifiers given directly, in dispatch order.
    #[builder(default)]
    pub inputs: Vec<PathBuf>,
    /// Newline-separated list of additional identifiers; `-` reads stdin.
    #[builder(default)]
    pub files_from: Option<PathBuf>,
    /// Total time the collector waits for workers.
    #[builder(default)]
    pub timeout: Option<Duration>,
    #[builder(default)]
    pub format: OutputFormat,
}

impl Config {
    /// # Errors
    /// Rejects a zero timeout, which would time out every worker before it starts.
    pub fn validate(&self) -> Result<()> {
        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(EngineError::Config(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
