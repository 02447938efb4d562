//! The interactive expense tracker binary.

use std::{fs::OpenOptions, io, path::PathBuf, sync::Arc};

use clap::Parser;
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use spendtrack::{Config, CsvLedgerStore, LedgerStore, run_session};

/// An interactive tracker for dated, categorised purchases.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the CSV ledger.
    #[arg(long, default_value = "finances.csv")]
    ledger_path: PathBuf,

    /// File path the spending chart is written to.
    #[arg(long, default_value = "spending_chart.html")]
    chart_path: PathBuf,
}

fn main() {
    setup_logging();

    let args = Args::parse();

    if let Err(error) = run(args) {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), spendtrack::Error> {
    let config = Config::new(args.ledger_path, args.chart_path)?;

    let mut store = CsvLedgerStore::new(&config.ledger_path);
    if !store.exists() {
        store.create()?;
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    run_session(&config, &mut store, &mut input, &mut output)
}

fn setup_logging() {
    // Prompts and replies own stdout, so only warnings get through to the
    // terminal; the full detail goes to the debug log.
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("debug.log")
        .expect("Could not create log file");

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(filter::LevelFilter::WARN)
                .and_then(debug_log)
                .with_filter(filter::LevelFilter::DEBUG),
        )
        .init();
}
