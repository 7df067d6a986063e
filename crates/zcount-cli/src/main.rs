//! zcount - count zero bytes in files or standard input.
//!
//! Lost data chunks are usually replaced by zero bytes (0x00) by the
//! filesystem checkers, so corrupted files stand out by their zero-byte
//! count. This binary drives the scanner and policy from `zcount-core`
//! once per input, in command-line order, and exits with the number of
//! inputs classified suspicious.

use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use zcount_core::{
    count_zero_bytes, evaluate, parse_count, scan_file, Channel, Source, Tally, Thresholds,
};

const LONG_ABOUT: &str = "\
Principal use of this program is to detect corrupt files: lost data chunks
are usually replaced by zero-bytes (0x00) by the filesystem checkers, so
corrupted files are easily identified by a large number of zero-bytes.

If no input files are given on the command line, then stdin is used. The
exit code of the program is the number of suspicious inputs. WARNING: by
default no output is produced, as the program is intended to be used in a
script. Set at least one '-v' for human readable output.";

/// Count zero bytes in files or standard input
#[derive(Parser, Debug)]
#[command(name = "zcount")]
#[command(version, about, after_help = LONG_ABOUT)]
struct Cli {
    /// Input files; standard input is scanned when none are given
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Produce verbose output, multiple flags allowed
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Stop after counting NUMBER1 zero-bytes (0 for no limit)
    #[arg(short, long, value_name = "NUMBER1", default_value = "0", value_parser = count_value)]
    upper: u64,

    /// Consider an input damaged after counting at least NUMBER2 zero-bytes
    /// (if NUMBER2 > NUMBER1 then NUMBER1 is used for both limits)
    #[arg(short, long, value_name = "NUMBER2", default_value = "1", value_parser = count_value)]
    lower: u64,
}

/// clap adapter around [`parse_count`]; the error display is exactly the
/// rejection line shown to the user.
fn count_value(token: &str) -> Result<u64, String> {
    parse_count(token).map_err(|e| e.to_string())
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    std::process::exit(run(&cli));
}

/// Initializes the diagnostic logging layer.
///
/// Diagnostics are opt-in via `RUST_LOG` and go to stderr. Report lines are
/// not log events; they never pass through the subscriber, so stdout stays
/// clean for the policy output.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Processes every input in command-line order and returns the exit status.
fn run(cli: &Cli) -> i32 {
    let thresholds = Thresholds::new(cli.upper, cli.lower);
    let mut tally = Tally::new();

    if cli.files.is_empty() {
        process_stdin(cli, &thresholds, &mut tally);
    } else {
        for path in &cli.files {
            process_file(cli, &thresholds, &mut tally, path);
        }
    }

    tally.exit_status()
}

/// Scans one named file and settles its verdict.
///
/// An open failure is reported to the error stream and leaves the tally
/// untouched; the run continues with the next argument.
fn process_file(cli: &Cli, thresholds: &Thresholds, tally: &mut Tally, path: &Path) {
    match scan_file(path, thresholds.upper) {
        Ok(zeros) => settle(cli, thresholds, tally, zeros, Source::File(path)),
        Err(err) => emit_line(Channel::Stderr, &err.to_string()),
    }
}

/// Scans standard input once; used when no file arguments are given.
fn process_stdin(cli: &Cli, thresholds: &Thresholds, tally: &mut Tally) {
    debug!("no file arguments, scanning stdin");
    let zeros = count_zero_bytes(io::stdin().lock(), thresholds.upper);
    settle(cli, thresholds, tally, zeros, Source::Stdin);
}

/// Records the verdict for one scanned input and emits its report line.
fn settle(cli: &Cli, thresholds: &Thresholds, tally: &mut Tally, zeros: u64, source: Source<'_>) {
    let evaluation = evaluate(zeros, thresholds, cli.verbose, &source);
    tally.record(&evaluation.verdict);
    if let Some(report) = evaluation.report {
        emit_line(report.channel, &report.line);
    }
}

/// Writes one line to the chosen stream.
///
/// Write failures (a closed pipe, say) are ignored: a lost report line must
/// not abort the run or panic.
fn emit_line(channel: Channel, line: &str) {
    match channel {
        Channel::Stdout => {
            let _ = writeln!(io::stdout(), "{line}");
        }
        Channel::Stderr => {
            let _ = writeln!(io::stderr(), "{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_are_silent_and_unlimited() {
        let cli = Cli::parse_from(["zcount"]);
        assert!(cli.files.is_empty());
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.upper, 0);
        assert_eq!(cli.lower, 1);
    }

    #[test]
    fn test_verbose_flags_accumulate() {
        let cli = Cli::parse_from(["zcount", "-v", "-v", "--verbose"]);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_numeric_options_accept_base_prefixes() {
        let cli = Cli::parse_from(["zcount", "-u", "0x10", "--lower=017"]);
        assert_eq!(cli.upper, 16);
        assert_eq!(cli.lower, 15);
    }

    #[test]
    fn test_malformed_count_is_rejected() {
        let err = Cli::try_parse_from(["zcount", "-u", "12abc"]).unwrap_err();
        assert!(err
            .to_string()
            .contains("'12abc' is not a non-negative integer"));
    }

    #[test]
    fn test_files_collected_in_order() {
        let cli = Cli::parse_from(["zcount", "a.bin", "b.bin"]);
        assert_eq!(cli.files, [PathBuf::from("a.bin"), PathBuf::from("b.bin")]);
    }
}
