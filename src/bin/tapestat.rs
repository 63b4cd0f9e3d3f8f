//! tapestat - iostat-style report for SCSI tape drives.
//!
//! Usage:
//!   tapestat            # cumulative counters of every drive, in bytes
//!   tapestat -u m       # same, in MB
//!   tapestat -c         # per-second deltas until Ctrl-C
//!   tapestat -c -u k -i 5

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use clap::Parser;
use tracing::{Level, debug, info, warn};
use tracing_subscriber::EnvFilter;

use tapestat::collector::{DEFAULT_SYS_PATH, RealFs};
use tapestat::sampler::{Sampler, SamplerConfig};
use tapestat::util::{Unit, parse_unit};

/// I/O statistics for SCSI tape drives.
#[derive(Parser)]
#[command(name = "tapestat", about = "I/O statistics for SCSI tape drives", version)]
struct Args {
    /// Display unit for byte columns: B, K, M, G or T (case-insensitive).
    #[arg(short, long, default_value = "B", value_parser = parse_unit)]
    unit: Unit,

    /// Continuous display of per-interval deltas.
    #[arg(short, long)]
    continuous: bool,

    /// Sampling interval in seconds.
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
    interval: u64,

    /// Path to the sysfs mount (for testing against a captured tree).
    #[arg(long, default_value = DEFAULT_SYS_PATH)]
    sys_path: PathBuf,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace). Default is warn.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only log errors.
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn sampler_config(&self) -> SamplerConfig {
        SamplerConfig {
            unit: self.unit,
            continuous: self.continuous,
            interval: Duration::from_secs(self.interval),
            sys_path: self.sys_path.clone(),
        }
    }
}

/// Initializes the tracing subscriber. Logs go to stderr so that stdout only
/// carries the table.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("tapestat={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let config = args.sampler_config();
    info!("tapestat {} starting", env!("CARGO_PKG_VERSION"));
    debug!("Config: {:?}", config);

    let stop = Arc::new(AtomicBool::new(false));
    let s = stop.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        info!("Received shutdown signal");
        s.store(true, Ordering::SeqCst);
    }) {
        warn!("Failed to set Ctrl-C handler: {}", e);
    }

    let sampler = Sampler::new(RealFs::new(), config);
    let mut stdout = io::stdout().lock();
    match sampler.run(&mut stdout, &stop) {
        Ok(()) => {}
        Err(e) if e.is_broken_pipe() => debug!("Output closed, stopping"),
        Err(e) => {
            eprintln!("tapestat: {}", e);
            std::process::exit(1);
        }
    }
}
