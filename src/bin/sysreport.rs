//! sysreport - point-in-time system information report.
//!
//! Collects CPU, memory, disk, OS and network facts from the host and
//! prints a fixed-layout report to stdout.

use std::io;

use clap::Parser;
use tracing::{Level, debug, warn};
use tracing_subscriber::EnvFilter;

use sysreport::collector::{SysinfoSource, SystemCollector};
use sysreport::report::write_report;

/// Point-in-time system information report.
#[derive(Parser)]
#[command(
    name = "sysreport",
    about = "Point-in-time system information report",
    version
)]
struct Args {
    /// Increase logging verbosity (-v for debug, -vv for trace). Default is warnings only.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Maps the verbosity flags to a log level.
/// Default is WARN so the report stays the only stdout output.
fn log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// Initializes the tracing subscriber on stderr with the appropriate log level.
fn init_logging(verbose: u8, quiet: bool) {
    let level = log_level(verbose, quiet);

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("sysreport={}", level).parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Prints a colored hint when no metrics backend can run here.
fn print_support_warning(error: &str) {
    // ANSI colors: red for error, yellow for hints, reset after
    const RED: &str = "\x1b[1;31m";
    const YELLOW: &str = "\x1b[33m";
    const RESET: &str = "\x1b[0m";

    println!("{RED}Error: {error}{RESET}");
    println!();
    println!("{YELLOW}  The report needs the sysinfo metrics backend, which supports:");
    println!("    Linux, Windows, macOS, FreeBSD and Android");
    println!();
    println!("  No report can be produced on this platform.{RESET}");
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);
    debug!("sysreport {} starting", env!("CARGO_PKG_VERSION"));

    let source = match SysinfoSource::new() {
        Ok(source) => source,
        Err(e) => {
            warn!(error = %e, "metrics backend unavailable");
            print_support_warning(&e.to_string());
            std::process::exit(1);
        }
    };

    let mut collector = SystemCollector::new(source);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = write_report(&mut collector, &mut out) {
        println!("Error: {}", e);
        std::process::exit(1);
    }
}
