//! Classification and reporting policy.
//!
//! This module turns a raw zero count into everything the user observes:
//! a suspicious/clean verdict, the report line for that input (or silence,
//! depending on verbosity), and the aggregate tally that becomes the
//! process exit status.
//!
//! ## Verbosity levels
//!
//! - `0` — silent; classification still runs and feeds the tally
//! - `1` — report suspicious inputs only, to the error stream
//! - `2+` — report every input: suspicious to the error stream, clean to
//!   standard output
//!
//! State is explicit throughout: the driver owns a [`Tally`] and records
//! each [`Verdict`] into it, so nothing here is global or hidden.

use std::path::Path;
use tracing::debug;

/// Classification thresholds for one run.
///
/// `upper` doubles as the scan cap handed to the scanner; `lower` is the
/// count at or above which an input is classified suspicious.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// Scan cap; 0 means unlimited
    pub upper: u64,
    /// Suspicious-classification threshold
    pub lower: u64,
}

impl Default for Thresholds {
    /// Unlimited scan; a single zero byte already counts as suspicious.
    fn default() -> Self {
        Self { upper: 0, lower: 1 }
    }
}

impl Thresholds {
    /// Creates thresholds from parsed option values
    pub fn new(upper: u64, lower: u64) -> Self {
        Self { upper, lower }
    }

    /// Lower threshold actually used for classification.
    ///
    /// An input cannot be required to show more zero bytes than the scanner
    /// was allowed to count, so a `lower` above a non-zero `upper` clamps
    /// down to `upper`. Recomputed on every classification; since thresholds
    /// never change after option parsing this is equivalent to clamping once.
    pub fn effective_lower(&self) -> u64 {
        if self.upper != 0 && self.lower > self.upper {
            self.upper
        } else {
            self.lower
        }
    }

    /// Classifies one scan result against these thresholds
    pub fn classify(&self, zero_count: u64) -> Verdict {
        Verdict {
            zero_count,
            suspicious: zero_count >= self.effective_lower(),
        }
    }
}

/// Outcome of classifying one scanned input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// Zero bytes counted by the scan
    pub zero_count: u64,
    /// Whether the count met the (effective) lower threshold
    pub suspicious: bool,
}

/// The input a report line talks about
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    /// A file named on the command line
    File(&'a Path),
    /// Standard input, scanned when no files are named
    Stdin,
}

/// Destination stream for a report line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Standard output; carries only clean-input reports
    Stdout,
    /// Error stream; carries suspicious-input reports
    Stderr,
}

/// A rendered per-input report line and the stream it belongs on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Message text, without a trailing newline
    pub line: String,
    /// Stream to write the line to
    pub channel: Channel,
}

/// Renders the report for one input, if `verbosity` calls for one.
///
/// Returns `None` at verbosity 0, and for clean inputs at verbosity 1.
pub fn report(verdict: &Verdict, source: &Source<'_>, verbosity: u8) -> Option<Report> {
    if verbosity == 0 || (verbosity == 1 && !verdict.suspicious) {
        return None;
    }

    let n = verdict.zero_count;
    let (line, channel) = match (source, verdict.suspicious) {
        (Source::File(path), true) => (
            format!(
                "{}: seems corrupted, {} zero-bytes counted",
                path.display(),
                n
            ),
            Channel::Stderr,
        ),
        (Source::File(path), false) => (
            format!("{}: {} zero-bytes counted", path.display(), n),
            Channel::Stdout,
        ),
        (Source::Stdin, true) => (
            format!("data in stdin seems corrupted, {} zero-bytes counted", n),
            Channel::Stderr,
        ),
        (Source::Stdin, false) => (
            format!("{} zero-bytes in stdin counted", n),
            Channel::Stdout,
        ),
    };

    Some(Report { line, channel })
}

/// Per-input policy outcome: the verdict plus the report it earned
#[derive(Debug)]
pub struct Evaluation {
    /// Classification of the scanned input
    pub verdict: Verdict,
    /// Report to emit, or `None` when verbosity suppresses it
    pub report: Option<Report>,
}

/// Evaluates one scanned input: classify, then render the report.
///
/// Called exactly once per input argument, or once for stdin when no file
/// arguments were given. Recording the verdict into a [`Tally`] is left to
/// the driver, which owns the aggregate.
pub fn evaluate(
    zero_count: u64,
    thresholds: &Thresholds,
    verbosity: u8,
    source: &Source<'_>,
) -> Evaluation {
    let verdict = thresholds.classify(zero_count);
    debug!(
        "{} zero-bytes against lower threshold {}: suspicious = {}",
        zero_count,
        thresholds.effective_lower(),
        verdict.suspicious
    );

    Evaluation {
        report: report(&verdict, source, verbosity),
        verdict,
    }
}

/// Running count of suspicious inputs; doubles as the process exit status.
///
/// Saturates at `i32::MAX` rather than wrapping. Whatever the OS truncates
/// the status to afterwards is the OS's business.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    suspicious: i32,
}

impl Tally {
    /// Creates an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one verdict; suspicious inputs bump the count, saturating
    pub fn record(&mut self, verdict: &Verdict) {
        if verdict.suspicious {
            self.suspicious = self.suspicious.saturating_add(1);
        }
    }

    /// Exit status for the run so far
    pub fn exit_status(&self) -> i32 {
        self.suspicious
    }
}
