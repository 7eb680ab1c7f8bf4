// crates/engine/src/worker.rs
use crate::counter;
use crate::error::WorkerError;
use crate::record::{ResultRecord, WorkerId};
use crate::source::ByteSource;
use crossbeam_channel::Sender;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Run the letter counter for one identifier and wrap the outcome.
///
/// Panics inside the source or the scan are caught and reported as
/// `WorkerError::Crashed`, so this always yields exactly one record.
pub fn run(worker: WorkerId, path: &std::path::Path, source: &dyn ByteSource) -> ResultRecord {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| counter::count(source, path)))
        .unwrap_or_else(|payload| {
            Err(WorkerError::Crashed {
                path: path.to_path_buf(),
                message: panic_message(payload.as_ref()),
            })
        });

    ResultRecord::from_outcome(worker, outcome)
}

/// Start a worker thread bound to `path`.
///
/// The thread sends its record on `tx` and exits. If the collector has already
/// stopped listening, the record is discarded.
///
/// # Errors
/// Returns the OS error when the thread cannot be created. Nothing has been sent in
/// that case; the caller owns reporting it.
pub fn spawn(
    worker: WorkerId,
    path: PathBuf,
    source: Arc<dyn ByteSource>,
    tx: Sender<ResultRecord>,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name(format!("letter-worker-{}", worker.0))
        .spawn(move || {
            let record = run(worker, &path, source.as_ref());
            log::debug!(
                "worker {worker} finished '{}' (success: {})",
                path.display(),
                record.is_success()
            );
            if tx.send(record).is_err() {
                log::debug!("collector gone, dropping record from worker {worker}");
            }
        })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
