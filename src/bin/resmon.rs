//! resmon - Task-manager style terminal resource monitor.
//!
//! Samples CPU, memory, disk and network usage once per refresh interval
//! and redraws a colored dashboard with a scrolling CPU history graph.
//!
//! Usage:
//!   resmon              # 1 second refresh
//!   resmon 5            # 5 second refresh
//!   resmon --history 60 # keep 60 samples in the graph

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use clap::Parser;
use tracing::{Level, debug, info};
use tracing_subscriber::EnvFilter;

use resmon::collector::SysinfoSource;
use resmon::config::DashboardConfig;
use resmon::tui::{AnsiTerminal, App};

/// Task-manager style terminal resource monitor.
#[derive(Parser)]
#[command(
    name = "resmon",
    about = "Task-manager style terminal resource monitor",
    version
)]
struct Args {
    /// Refresh interval in seconds (default: 1).
    #[arg(value_name = "INTERVAL")]
    interval: Option<u64>,

    /// Number of CPU samples kept in the history graph.
    #[arg(long, default_value = "30", value_name = "SAMPLES")]
    history: usize,

    /// Height of the CPU history graph in rows.
    #[arg(long, default_value = "5", value_name = "ROWS")]
    graph_height: usize,

    /// Width of the usage bars in cells.
    #[arg(long, default_value = "30", value_name = "CELLS")]
    bar_width: usize,

    /// Increase logging verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Initializes the tracing subscriber on stderr.
/// Default level is WARN so log output does not fight the dashboard.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("resmon={}", level).parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    if args.history == 0 || args.graph_height == 0 {
        eprintln!("Error: --history and --graph-height must be positive");
        std::process::exit(1);
    }

    let config = DashboardConfig {
        tick: Duration::from_secs(args.interval.unwrap_or(1)),
        history_len: args.history,
        graph_rows: args.graph_height,
        bar_width: args.bar_width,
    };

    // Graceful shutdown on Ctrl+C: clear the flag, the loop observes it at
    // the next tick boundary and restores the terminal itself.
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        debug!("received interrupt");
        r.store(false, Ordering::SeqCst);
    }) {
        eprintln!("Error: failed to set Ctrl-C handler: {}", e);
        std::process::exit(1);
    }

    info!(
        "resmon {} starting: refresh={}s, history={} samples",
        env!("CARGO_PKG_VERSION"),
        config.tick.as_secs(),
        config.history_len
    );

    let mut app = App::new(SysinfoSource::new(), config);
    let mut terminal = AnsiTerminal::stdout();

    match app.run(&mut terminal, &running) {
        Ok(()) => println!("Resource monitor stopped by user."),
        Err(e) => {
            eprintln!("Unexpected error: {}", e);
            std::process::exit(1);
        }
    }
}
