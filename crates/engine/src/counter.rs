use crate::counts::CountVector;
use crate::error::WorkerError;
use crate::source::ByteSource;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Count the letters of one identifier.
///
/// # Errors
/// `WorkerError::Open` when the source cannot open `path`, `WorkerError::Read` when
/// scanning fails part-way. No partial counts are returned in either case.
pub fn count(source: &dyn ByteSource, path: &Path) -> Result<CountVector, WorkerError> {
    let reader = source.open(path).map_err(|e| WorkerError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;

    count_letters(reader).map_err(|e| WorkerError::Read {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Scan `reader` to end-of-input, tallying ASCII letters case-insensitively.
pub fn count_letters<R: Read>(reader: R) -> io::Result<CountVector> {
    let mut reader = BufReader::new(reader);
    let mut counts = CountVector::zero();

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }

        for &b in buf {
            counts.record(b);
        }

        let len = buf.len();
        reader.consume(len);
    }

    Ok(counts)
}
