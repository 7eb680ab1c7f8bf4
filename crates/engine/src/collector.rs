// crates/engine/src/collector.rs
use crate::counts::CountVector;
use crate::dispatcher::Dispatched;
use crate::error::WorkerError;
use crate::record::{ResultRecord, WorkerId};
use crossbeam_channel::{Receiver, RecvTimeoutError};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Aggregate of one run.
#[derive(Debug, Default)]
pub struct RunResult {
    pub totals: CountVector,
    /// Number of workers whose counts were merged into `totals`.
    pub processed: usize,
    /// Failed identifiers, in dispatch order.
    pub errors: Vec<(PathBuf, WorkerError)>,
}

/// Drain one record per dispatched worker and merge the successful ones.
///
/// With `timeout` set, waits at most that long in total. Workers that have not
/// reported by then are recorded as `WorkerError::TimedOut`. If every sender is
/// dropped before all records arrive, the missing workers are recorded as
/// `WorkerError::Crashed`. Either way this returns; it never waits on a lost worker.
pub fn collect(
    rx: &Receiver<ResultRecord>,
    dispatched: &Dispatched,
    timeout: Option<Duration>,
) -> RunResult {
    let expected = dispatched.expected();
    // A timeout too large to represent as an instant is no deadline at all.
    let deadline = timeout.and_then(|t| Instant::now().checked_add(t));

    let mut reported = vec![false; expected];
    let mut remaining = expected;
    let mut totals = CountVector::zero();
    let mut processed = 0;
    let mut failures: Vec<(WorkerId, WorkerError)> = Vec::new();

    while remaining > 0 {
        let received = match deadline {
            Some(at) => rx.recv_deadline(at),
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        let record = match received {
            Ok(record) => record,
            Err(RecvTimeoutError::Timeout) => {
                let waited = timeout.unwrap_or_default();
                log::warn!("{remaining} worker(s) did not report within {waited:?}");
                fill_missing(&reported, dispatched, &mut failures, |path| {
                    WorkerError::TimedOut { path, waited }
                });
                break;
            }
            Err(RecvTimeoutError::Disconnected) => {
                log::error!("completion channel closed with {remaining} record(s) outstanding");
                fill_missing(&reported, dispatched, &mut failures, |path| {
                    WorkerError::Crashed {
                        path,
                        message: "worker exited without reporting".to_string(),
                    }
                });
                break;
            }
        };

        let worker = record.worker();
        match reported.get_mut(worker.0) {
            Some(seen) if !*seen => *seen = true,
            Some(_) => {
                log::warn!("ignoring duplicate record from worker {worker}");
                continue;
            }
            None => {
                log::warn!("ignoring record from unknown worker {worker}");
                continue;
            }
        }
        remaining -= 1;

        match record {
            ResultRecord::Success { counts, .. } => {
                totals += counts;
                processed += 1;
            }
            ResultRecord::Failure { error, .. } => {
                log::warn!("{error}");
                failures.push((worker, error));
            }
        }
    }

    failures.sort_by_key(|(worker, _)| *worker);
    let errors = failures
        .into_iter()
        .map(|(_, error)| (error.path().to_path_buf(), error))
        .collect();

    RunResult {
        totals,
        processed,
        errors,
    }
}

fn fill_missing<F>(
    reported: &[bool],
    dispatched: &Dispatched,
    failures: &mut Vec<(WorkerId, WorkerError)>,
    make: F,
) where
    F: Fn(PathBuf) -> WorkerError,
{
    for (index, _) in reported.iter().enumerate().filter(|(_, seen)| !**seen) {
        let worker = WorkerId(index);
        if let Some(path) = dispatched.path(worker) {
            let error = make(path.to_path_buf());
            log::warn!("{error}");
            failures.push((worker, error));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts_of(text: &str) -> CountVector {
        crate::counter::count_letters(text.as_bytes()).unwrap()
    }

    fn dispatched_for(names: &[&str]) -> Dispatched {
        Dispatched::from(names.iter().map(PathBuf::from).collect::<Vec<_>>())
    }

    #[test]
    fn test_merges_out_of_order() {
        let dispatched = dispatched_for(&["a", "b"]);
        let (tx, rx) = crossbeam_channel::unbounded();
        tx.send(ResultRecord::Success {
            worker: WorkerId(1),
            counts: counts_of("bb"),
        })
        .unwrap();
        tx.send(ResultRecord::Success {
            worker: WorkerId(0),
            counts: counts_of("ab"),
        })
        .unwrap();

        let result = collect(&rx, &dispatched, None);
        assert_eq!(result.processed, 2);
        assert_eq!(result.totals.get('a'), 1);
        assert_eq!(result.totals.get('b'), 3);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_stops_after_expected_records() {
        let dispatched = dispatched_for(&["a"]);
        let (tx, rx) = crossbeam_channel::unbounded();
        for _ in 0..2 {
            tx.send(ResultRecord::Success {
                worker: WorkerId(0),
                counts: counts_of("a"),
            })
            .unwrap();
        }

        // The sender is still alive: returning proves the collector did not wait for more.
        let result = collect(&rx, &dispatched, None);
        assert_eq!(result.totals.get('a'), 1);
        assert_eq!(rx.len(), 1);
    }

    #[test]
    fn test_duplicate_record_ignored() {
        let dispatched = dispatched_for(&["a", "b"]);
        let (tx, rx) = crossbeam_channel::unbounded();
        for worker in [0, 0, 1] {
            tx.send(ResultRecord::Success {
                worker: WorkerId(worker),
                counts: counts_of("a"),
            })
            .unwrap();
        }

        let result = collect(&rx, &dispatched, None);
        assert_eq!(result.processed, 2);
        assert_eq!(result.totals.get('a'), 2);
    }

    #[test]
    fn test_disconnect_marks_missing_as_crashed() {
        let dispatched = dispatched_for(&["a", "b"]);
        let (tx, rx) = crossbeam_channel::unbounded();
        tx.send(ResultRecord::Success {
            worker: WorkerId(0),
            counts: counts_of("a"),
        })
        .unwrap();
        drop(tx);

        let result = collect(&rx, &dispatched, None);
        assert_eq!(result.processed, 1);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].0, PathBuf::from("b"));
        assert!(matches!(result.errors[0].1, WorkerError::Crashed { .. }));
    }

    #[test]
    fn test_deadline_marks_missing_as_timed_out() {
        let dispatched = dispatched_for(&["slow"]);
        let (_tx, rx) = crossbeam_channel::unbounded();

        let result = collect(&rx, &dispatched, Some(Duration::from_millis(50)));
        assert!(result.totals.is_zero());
        assert!(matches!(
            result.errors.as_slice(),
            [(_, WorkerError::TimedOut { .. })]
        ));
    }

    #[test]
    fn test_huge_timeout_waits_normally() {
        let dispatched = dispatched_for(&["a"]);
        let (tx, rx) = crossbeam_channel::unbounded();
        tx.send(ResultRecord::Success {
            worker: WorkerId(0),
            counts: counts_of("abc"),
        })
        .unwrap();

        let result = collect(&rx, &dispatched, Some(Duration::from_secs(u64::MAX / 2)));
        assert_eq!(result.processed, 1);
        assert_eq!(result.totals.total(), 3);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_nothing_expected() {
        let (_tx, rx) = crossbeam_channel::unbounded();
        let result = collect(&rx, &Dispatched::default(), None);
        assert!(result.totals.is_zero());
        assert_eq!(result.processed, 0);
    }
}
