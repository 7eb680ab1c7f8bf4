use crate::error::WorkerError;
use crate::record::{ResultRecord, WorkerId};
use crate::source::ByteSource;
use crate::worker;
use crossbeam_channel::Sender;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::JoinHandle;

/// What the collector needs to know about a dispatch: one identifier per `WorkerId`.
#[derive(Debug, Clone, Default)]
pub struct Dispatched {
    paths: Vec<PathBuf>,
}

impl Dispatched {
    /// Number of records the collector must account for.
    pub fn expected(&self) -> usize {
        self.paths.len()
    }

    pub fn path(&self, worker: WorkerId) -> Option<&Path> {
        self.paths.get(worker.0).map(PathBuf::as_path)
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

impl From<Vec<PathBuf>> for Dispatched {
    fn from(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

/// Start one worker per identifier and return without waiting for any of them.
///
/// Every identifier produces exactly one record on `tx`: from its worker, or from
/// here when the worker thread could not be started.
pub fn dispatch(
    paths: Vec<PathBuf>,
    source: &Arc<dyn ByteSource>,
    tx: &Sender<ResultRecord>,
) -> Dispatched {
    dispatch_with(paths, source, tx, worker::spawn)
}

/// [`dispatch`] with the thread launcher supplied by the caller.
pub(crate) fn dispatch_with<F>(
    paths: Vec<PathBuf>,
    source: &Arc<dyn ByteSource>,
    tx: &Sender<ResultRecord>,
    mut spawn: F,
) -> Dispatched
where
    F: FnMut(WorkerId, PathBuf, Arc<dyn ByteSource>, Sender<ResultRecord>) -> io::Result<JoinHandle<()>>,
{
    for (index, path) in paths.iter().enumerate() {
        let id = WorkerId(index);
        if let Err(e) = spawn(id, path.clone(), Arc::clone(source), tx.clone()) {
            log::error!("could not start worker {id} for '{}': {e}", path.display());
            let record = ResultRecord::Failure {
                worker: id,
                error: WorkerError::Spawn {
                    path: path.clone(),
                    source: e,
                },
            };
            // The caller still holds a receiver while dispatching.
            let _ = tx.send(record);
        }
    }

    log::info!("dispatched {} workers", paths.len());
    Dispatched { paths }
}
