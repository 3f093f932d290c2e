//! # vqe-predict
//!
//! Command-line interface for exam topic importance prediction.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use data_core::{ExamHistory, HistoryLoader};
use predictor_facade::{
    PredictionRequest, PredictionResponse, PredictionResult, PredictorConfig, StatevectorBackend,
};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "vqe-predict")]
#[command(about = "Exam topic importance prediction", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict next-year importance for one or more topics
    Predict {
        /// Topics to predict, as named in the data file
        #[arg(required = true)]
        topics: Vec<String>,

        /// Historical data file (CSV or JSON)
        #[arg(short, long)]
        data_file: PathBuf,

        /// Confidence level in [0, 1]
        #[arg(short, long, default_value = "0.95")]
        confidence: f64,

        /// Skip the quantum estimator
        #[arg(long)]
        force_classical: bool,

        /// Minimum years of history per topic (overrides MIN_HISTORICAL_YEARS)
        #[arg(long)]
        min_years: Option<usize>,

        /// Widest quantum register (overrides MAX_QUBITS)
        #[arg(long)]
        max_qubits: Option<usize>,

        /// Variational search iteration cap (overrides MAX_ITERATIONS)
        #[arg(long)]
        max_iterations: Option<usize>,

        /// Write the full response as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List topics with enough history to predict
    ListTopics {
        /// Historical data file (CSV or JSON)
        #[arg(short, long)]
        data_file: PathBuf,

        /// Minimum years of history
        #[arg(long, default_value = "3")]
        min_years: usize,
    },
}

/// Options for the predict command
struct PredictArgs {
    topics: Vec<String>,
    data_file: PathBuf,
    confidence: f64,
    force_classical: bool,
    min_years: Option<usize>,
    max_qubits: Option<usize>,
    max_iterations: Option<usize>,
    output: Option<PathBuf>,
}

fn load_history<'a>(loader: &'a mut HistoryLoader, path: &Path) -> Result<&'a ExamHistory> {
    loader
        .load(path)
        .with_context(|| format!("Failed to load {}", path.display()))
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Print one result in a human-readable block
fn print_result(result: &PredictionResult) {
    println!("{}", result.topic);
    println!("  Importance:  {:.4}", round4(result.importance));
    println!(
        "  Interval:    [{:.4}, {:.4}]",
        round4(result.lower()),
        round4(result.upper())
    );
    println!("  Trend:       {}", result.trend);
    println!("  Method:      {}", result.method);
    if let (Some(q), Some(c)) = (result.quantum_contribution, result.classical_contribution) {
        println!("  Blend:       quantum {:.2} / classical {:.2}", q, c);
    }
    if let Some(d) = &result.diagnostics {
        println!(
            "  Quantum:     {} qubits, depth {}, {} iterations, eigenvalue {:.4}",
            d.qubits,
            d.circuit_depth,
            d.iterations,
            round4(d.eigenvalue)
        );
    }
}

fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(&mut file, value).context("Failed to write JSON")?;
    println!("Results written to {}", path.display());
    Ok(())
}

fn print_response(response: &PredictionResponse) {
    println!(
        "Method: {}{}",
        response.method_used,
        if response.fallback_used {
            " (classical fallback used)"
        } else {
            ""
        }
    );
    println!("Execution time: {} ms", response.execution_time_ms);
    println!();
    for result in &response.predictions {
        print_result(result);
    }
}

/// Run predict command
fn run_predict(args: PredictArgs) -> Result<()> {
    let mut config = PredictorConfig::from_env().context("Invalid predictor configuration")?;
    if let Some(years) = args.min_years {
        config = config.with_min_historical_years(years);
    }
    if let Some(qubits) = args.max_qubits {
        config = config.with_max_qubits(qubits);
    }
    if let Some(iterations) = args.max_iterations {
        config = config.with_max_iterations(iterations);
    }

    let mut loader = HistoryLoader::new();
    let history = load_history(&mut loader, &args.data_file)?;
    for warning in history.validate(config.min_historical_years) {
        warn!("{}", warning);
    }

    let predictor = config.build_predictor(Arc::new(StatevectorBackend::new()))?;
    let request = PredictionRequest::new(args.topics)
        .with_confidence(args.confidence)
        .force_classical(args.force_classical);

    let response = predictor.predict(&request, history)?;
    if response.predictions.is_empty() {
        bail!("No predictions: requested topics are missing or have too little history");
    }

    info!(
        predictions = response.predictions.len(),
        method = %response.method_used,
        "Prediction finished"
    );
    print_response(&response);

    if let Some(path) = &args.output {
        write_json(&response, path)?;
    }
    Ok(())
}

/// Run list-topics command
fn run_list_topics(data_file: PathBuf, min_years: usize) -> Result<()> {
    let mut loader = HistoryLoader::new();
    let history = load_history(&mut loader, &data_file)?;

    let topics = history.available_topics(min_years);
    if topics.is_empty() {
        println!("No topics with at least {} years of data", min_years);
        return Ok(());
    }

    println!("{:<30} {:>6} {:>8}", "Topic", "Years", "Latest");
    for topic in topics {
        println!(
            "{:<30} {:>6} {:>8}",
            topic.name, topic.years_available, topic.latest_year
        );
    }
    Ok(())
}

fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vqe_predict=info,predictor_core=info,data_core=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Predict {
            topics,
            data_file,
            confidence,
            force_classical,
            min_years,
            max_qubits,
            max_iterations,
            output,
        } => run_predict(PredictArgs {
            topics,
            data_file,
            confidence,
            force_classical,
            min_years,
            max_qubits,
            max_iterations,
            output,
        }),

        Commands::ListTopics {
            data_file,
            min_years,
        } => run_list_topics(data_file, min_years),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
