//! Zero-byte scanning over byte streams.
//!
//! The scanner reads a stream in fixed-size chunks and counts every `0x00`
//! byte it sees, stopping early once a caller-supplied cap is reached.
//! Filesystem checkers replace lost data chunks with zero bytes, so the
//! count works as a corruption heuristic; deciding what counts as
//! "corrupted" is the job of [`crate::policy`].
//!
//! Scanning never fails: a read error on the underlying stream ends the
//! scan with the count accumulated so far.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::{debug, trace};

/// Chunk size for the scan read loop
const READ_BUF_SIZE: usize = 8 * 1024;

/// Counts zero bytes in `reader`, stopping early once `limit` is reached.
///
/// A `limit` of 0 means unlimited: the stream is read to exhaustion and the
/// count saturates at `u64::MAX` instead of wrapping. For a non-zero
/// `limit` the returned count never exceeds it.
///
/// The reader is consumed but not closed. Interrupted reads are retried;
/// any other read error is treated as end-of-stream.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
///
/// let count = zcount_core::count_zero_bytes(Cursor::new([0u8, 1, 0, 2, 0]), 0);
/// assert_eq!(count, 3);
/// ```
pub fn count_zero_bytes<R: Read>(mut reader: R, limit: u64) -> u64 {
    // 0 is the "no limit" sentinel, so a cap of exactly zero cannot be
    // expressed; it is treated as the maximum representable count.
    let cap = if limit == 0 { u64::MAX } else { limit };

    let mut zeros: u64 = 0;
    let mut buf = [0u8; READ_BUF_SIZE];

    while zeros < cap {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                trace!("read error treated as end-of-stream: {}", e);
                break;
            }
        };

        let found = buf[..n].iter().filter(|&&b| b == 0).count() as u64;
        // A chunk may overshoot the cap; clamp so the scan never overruns it.
        zeros = zeros.saturating_add(found).min(cap);
    }

    zeros
}

/// Counts zero bytes in the file at `path`.
///
/// Convenience wrapper around [`count_zero_bytes`]: opens the file, scans
/// it, and closes the handle before returning. Open failures map to
/// [`Error::FileOpen`]; read failures after a successful open degrade to
/// end-of-stream as usual.
pub fn scan_file(path: impl AsRef<Path>, limit: u64) -> Result<u64> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::file_open(path, e))?;
    let zeros = count_zero_bytes(file, limit);
    debug!("scanned {}: {} zero-bytes", path.display(), zeros);
    Ok(zeros)
}
