// crates/engine/src/lib.rs
use std::sync::Arc;

pub mod collector;
pub mod config;
pub mod counter;
pub mod counts;
pub mod dispatcher;
pub mod error;
pub mod inputs;
pub mod options;
pub mod record;
pub mod source;
pub mod worker;

use crate::collector::RunResult;
use crate::config::Config;
use crate::error::Result;
use crate::source::{ByteSource, FsSource};

/// Count letters across every input on the local filesystem.
///
/// # Errors
///
/// Returns an error only when the pipeline cannot start (invalid configuration or an
/// unreadable file list). Per-file failures are collected in `RunResult::errors`.
pub fn run(config: &Config) -> Result<RunResult> {
    run_with_source(config, Arc::new(FsSource))
}

/// Same as [`run`], reading through an arbitrary storage backend.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_source(config: &Config, source: Arc<dyn ByteSource>) -> Result<RunResult> {
    config.validate()?;
    let paths = inputs::resolve(config)?;

    let (tx, rx) = crossbeam_channel::unbounded();
    let dispatched = dispatcher::dispatch(paths, &source, &tx);
    // Only workers may keep the channel open, so a lost worker shows up as a disconnect.
    drop(tx);

    let result = collector::collect(&rx, &dispatched, config.timeout);
    log::info!(
        "collected {} of {} inputs ({} failed), {} letters",
        result.processed,
        dispatched.expected(),
        result.errors.len(),
        result.totals.total()
    );
    Ok(result)
}
