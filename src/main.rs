use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

use linemend::{write_stats_json, NormalizeJob, Normalizer};

#[derive(Parser, Debug)]
#[command(name = "linemend")]
#[command(about = "Flatten a hard-wrapped text file and start a new line at every [n] marker")]
#[command(version)]
#[command(arg_required_else_help = true)]
struct Args {
    /// Text file to normalize
    input: PathBuf,

    /// Where to write the result; the input file is overwritten when omitted
    output: Option<PathBuf>,

    /// Write run statistics as JSON to this path
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // WHY: structured JSON logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let normalizer = Normalizer::new().context("Failed to build normalizer")?;
    let job = NormalizeJob::new(args.input, args.output);

    if job.is_in_place() {
        info!("No output path given, overwriting {}", job.input().display());
    }

    let report = job.run(&normalizer).await?;

    for line in report.summary_lines() {
        println!("{line}");
    }

    if let Some(stats_path) = args.stats_out {
        write_stats_json(&stats_path, &report).await?;
        println!("Stats written to: {}", stats_path.display());
    }

    println!("Done: text flattened and re-segmented at markers.");
    Ok(())
}
