use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use serde::Serialize;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use batch_bridge::config::Config;
use batch_bridge::engine::{read_transactions, BatchOrchestrator};
use batch_bridge::models::ErrorResponse;
use batch_bridge::processor::ExternalProcessor;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            eprintln!("Usage: batch-bridge [input].json|[input].csv [log_level:optional] > [result].json");
            eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
            eprintln!("The processor path is read from TRANSACTION_PROCESSOR_PATH (default: ./transaction_processor)");
            exit(1);
        }
    };

    setup_logging(config.log_level);

    let transactions = match read_transactions(&config.input_path) {
        Ok(transactions) => transactions,
        Err(error) => {
            error!("{error}");
            write_json_to_stdout(&ErrorResponse::from(&error))?;
            exit(1);
        }
    };

    let orchestrator = BatchOrchestrator::new(ExternalProcessor::new(&config.processor_path));

    let timer = Instant::now();
    let result = orchestrator.process(&transactions).await;
    let duration = timer.elapsed();

    info!("Processed {} transactions in: {duration:?}", transactions.len());

    write_json_to_stdout(&result)?;

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the result document, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_json_to_stdout<T: Serialize>(value: &T) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    serde_json::to_writer(&mut output, value)?;
    writeln!(output)?;
    output.flush()?;

    Ok(())
}
