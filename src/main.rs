//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::io::{self, Read, Write};
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{debug, info};

use chatlens::analysis::Analysis;
use chatlens::cli::Args;
use chatlens::format::to_format_string;
use chatlens::logging::init_logging;
use chatlens::{ChatlensError, Result};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let start = Instant::now();
    let analysis_config = args.analysis_config();
    let dashboard_config = args.dashboard_config();

    let analysis = if args.reads_stdin() {
        let mut bytes = Vec::new();
        io::stdin().read_to_end(&mut bytes)?;
        Analysis::from_bytes(bytes, "stdin", &analysis_config)?
    } else {
        Analysis::from_path(Path::new(&args.input), &analysis_config)?
    };
    debug!(elapsed_ms = start.elapsed().as_millis() as u64, "analysis complete");

    let format = args.output_format();
    let rendered = to_format_string(&analysis, format, &dashboard_config)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            info!(path = %path, format = %format, "wrote output");
            println!(
                "✅ Loaded {} messages! {} output saved to {}",
                analysis.stats.total_messages, format, path
            );
        }
        None => write_stdout(&rendered)?,
    }

    Ok(())
}

/// Writes to stdout, treating a closed pipe (`chatlens chat.txt | head`) as success.
fn write_stdout(rendered: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
    {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.map_err(ChatlensError::from),
    }
}
