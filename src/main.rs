use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod pipeline;

/// Consolidate overlapping detections from multiple inference passes
#[derive(Parser)]
#[command(name = "seemode", version)]
struct Cli {
    /// Detections JSON file (class name -> list of detections)
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Resolution mode: "max" (highest confidence) or "merge" (largest box)
    #[arg(short, long)]
    mode: Option<String>,

    /// Merge pairs whose intersection over smaller area exceeds this value
    #[arg(short, long)]
    threshold: Option<f64>,

    /// JSON config file; flags take precedence
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Log per-class merge counts
    #[arg(long)]
    stats: bool,
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let result = pipeline::build_config(cli.config.as_deref(), cli.mode.as_deref(), cli.threshold)
        .and_then(|config| {
            pipeline::run(&pipeline::RunOptions {
                input: cli.input,
                output: cli.output,
                config,
                stats: cli.stats,
            })
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Resolution failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
