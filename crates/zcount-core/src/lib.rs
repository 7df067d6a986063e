//! # zcount-core
//!
//! A library for counting zero bytes in byte streams and classifying
//! corrupted-looking inputs.
//!
//! Filesystem checkers usually replace lost data chunks with zero bytes
//! (0x00), so an unusual number of them is a cheap corruption heuristic.
//! This crate provides both halves of that check:
//!
//! - [`scanner`]: counting zero bytes in a stream, with an early-stop cap
//! - [`policy`]: classifying a count, rendering report lines, and tallying
//!   the process exit status
//! - [`parse`]: the numeric option-value syntax shared by the CLI
//! - [`error`]: error types and handling
//!
//! ## Example
//!
//! ```no_run
//! use zcount_core::{scan_file, Thresholds};
//!
//! // Unlimited scan; a single zero byte is already suspicious.
//! let thresholds = Thresholds::default();
//! let zeros = scan_file("suspect.bin", thresholds.upper)?;
//!
//! let verdict = thresholds.classify(zeros);
//! if verdict.suspicious {
//!     eprintln!("suspect.bin: seems corrupted, {} zero-bytes counted", zeros);
//! }
//! # Ok::<(), zcount_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod error;
pub mod parse;
pub mod policy;
pub mod scanner;

// Re-export primary types for convenience
pub use error::{Error, Result};
pub use parse::parse_count;
pub use policy::{
    evaluate, report, Channel, Evaluation, Report, Source, Tally, Thresholds, Verdict,
};
pub use scanner::{count_zero_bytes, scan_file};

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
