// ============================================================
// File: main.rs
// Project: parcelindex
// Date: Oct 18, 2026
//
// Description:
//   Entry point for the parcel index program. Loads the parcel
//   data file into the hash-of-trees index, then hands off to the
//   interactive menu on stdin/stdout.
//
//   Logging goes to stderr so the menu output on stdout stays
//   clean for scripted use.
// ============================================================
use std::io;

use clap::Parser;
use parcelindex::config::Cli;
use parcelindex::{Session, repl_loop};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    // A missing file leaves the index empty; ADD still works
    let mut session = match Session::from_file(&cli.data) {
        Ok(session) => session,
        Err(e) => {
            warn!(error = %e, "starting with an empty index");
            Session::new()
        }
    };

    println!("Parcel Index");
    println!(
        "Loaded {} parcel(s), skipped {} invalid line(s)",
        session.report.loaded, session.report.skipped
    );

    if cli.no_repl {
        let stats = session.index.stats();
        println!("occupied buckets: {}", stats.occupied_buckets);
        if let Some((slot, depth)) = stats.deepest_bucket {
            println!("deepest bucket: slot {} (depth {})", slot, depth);
        }
        return Ok(());
    }

    println!("{}", parcelindex::USAGE);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl_loop(&mut session, stdin.lock(), &mut stdout)?;

    info!(records = session.index.len(), "shutting down");
    Ok(())
}
