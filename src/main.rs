use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paydispatch::application::dispatch::PaymentDispatchService;
use paydispatch::application::registry::StrategyRegistry;
use paydispatch::config::DispatchConfig;
use paydispatch::domain::method::PaymentMethod;
use paydispatch::domain::result::TransactionId;
use paydispatch::interfaces::csv::payment_reader::PaymentRecordReader;
use paydispatch::interfaces::csv::result_writer::{CancelWriter, ResultWriter};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payments CSV file
    input: PathBuf,

    /// JSON configuration file. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Deadline for every backend call, in milliseconds
    #[arg(long)]
    backend_timeout_ms: Option<u64>,

    /// Cancel every successful payment after the batch and print the outcomes
    #[arg(long)]
    cancel: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn dispatch_config(&self) -> Result<DispatchConfig> {
        let mut config = match &self.config {
            Some(path) => DispatchConfig::from_json_file(path).into_diagnostic()?,
            None => DispatchConfig::default(),
        };
        if let Some(ms) = self.backend_timeout_ms {
            if ms == 0 {
                miette::bail!("--backend-timeout-ms must be greater than zero");
            }
            config.backend_timeout = Duration::from_millis(ms);
        }
        Ok(config)
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.dispatch_config()?;
    tracing::debug!(?config, "starting payment dispatch");

    // The registry is fully populated before any payment is dispatched.
    let registry = StrategyRegistry::with_simulated_backends(&config).into_diagnostic()?;
    let service = PaymentDispatchService::new(Arc::new(registry));

    let stdout = io::stdout();
    let mut writer = ResultWriter::new(stdout.lock()).into_diagnostic()?;
    let mut settled: Vec<(PaymentMethod, TransactionId)> = Vec::new();

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = PaymentRecordReader::new(file);
    for request in reader.requests() {
        match request {
            Ok((method, request)) => match service.process_payment(method, &request).await {
                Ok(result) => {
                    writer.write_result(&result).into_diagnostic()?;
                    if result.is_success() {
                        settled.push((method, result.transaction_id().clone()));
                    }
                }
                Err(e) => {
                    eprintln!("Error processing payment for order {}: {}", request.order_id(), e);
                }
            },
            Err(e) => {
                eprintln!("Error reading payment: {}", e);
            }
        }
    }
    writer.flush().into_diagnostic()?;
    drop(writer);

    if cli.cancel {
        println!();
        let mut cancels = CancelWriter::new(stdout.lock()).into_diagnostic()?;
        for (method, transaction_id) in settled {
            match service.cancel_payment(method, &transaction_id).await {
                Ok(result) => cancels.write_cancel(&result).into_diagnostic()?,
                Err(e) => eprintln!("Error cancelling payment {}: {}", transaction_id, e),
            }
        }
        cancels.flush().into_diagnostic()?;
    }

    Ok(())
}
