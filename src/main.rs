use clap::Parser;
use matchx::pipeline::{run, FeedbackRun, PipelineConfig};
use matchx_engine::{BoostConfig, FeedbackConfig};
use matchx_core::TfidfConfig;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// A lightweight content-based recommendation pipeline
#[derive(Parser, Debug)]
#[command(name = "matchx")]
#[command(about = "Batch TF-IDF recommendations with explainable boosts", long_about = None)]
struct Args {
    /// Path to the directory holding users.csv, events.csv, jobs.csv, posts.csv
    #[arg(short, long, default_value = "./data")]
    data_dir: PathBuf,

    /// Directory the JSON output is written to
    #[arg(short, long, default_value = "./output")]
    output_dir: PathBuf,

    /// Recommendations kept per user and item kind
    #[arg(long, default_value_t = 10)]
    top_n: usize,

    /// Seed for the synthetic feedback simulation
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Skip the synthetic feedback pass entirely
    #[arg(long)]
    skip_feedback: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting matchX v{}", env!("CARGO_PKG_VERSION"));
    info!("Data directory: {:?}", args.data_dir);
    info!("Output directory: {:?}", args.output_dir);

    let config = PipelineConfig {
        data_dir: args.data_dir,
        output_dir: args.output_dir,
        top_n: args.top_n,
        tfidf: TfidfConfig::default(),
        boosts: BoostConfig::default(),
        feedback: if args.skip_feedback {
            None
        } else {
            Some(FeedbackRun {
                config: FeedbackConfig::default(),
                seed: args.seed,
            })
        },
    };

    run(&config)
}
