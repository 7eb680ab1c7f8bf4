use crate::counts::CountVector;
use crate::error::WorkerError;
use std::fmt;

/// Dispatch index of a worker, `0..N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkerId(pub usize);

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The single message a worker sends on the completion channel.
#[derive(Debug)]
pub enum ResultRecord {
    Success { worker: WorkerId, counts: CountVector },
    Failure { worker: WorkerId, error: WorkerError },
}

impl ResultRecord {
    pub fn from_outcome(worker: WorkerId, outcome: Result<CountVector, WorkerError>) -> Self {
        match outcome {
            Ok(counts) => Self::Success { worker, counts },
            Err(error) => Self::Failure { worker, error },
        }
    }

    pub const fn worker(&self) -> WorkerId {
        match self {
            Self::Success { worker, .. } | Self::Failure { worker, .. } => *worker,
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
