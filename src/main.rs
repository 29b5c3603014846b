use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::error;

use bridgecore::application::{Pipeline, RunMode};
use bridgecore::infrastructure::{CsvHistorySource, GoldApiClient, JsonCheckpointStore};
use bridgecore::report::Envelope;
use bridgecore::shared::config::{ConfigLoader, PipelineConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Historical,
    Live,
}

impl From<Mode> for RunMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Historical => RunMode::Historical,
            Mode::Live => RunMode::Live,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Gold-pegged construction milestone simulation pipeline")]
struct Args {
    /// Pipeline mode
    #[arg(long, value_enum, default_value_t = Mode::Historical)]
    mode: Mode,

    /// Path to config file (optional)
    #[arg(long)]
    config: Option<String>,

    /// Historical price file (overrides config)
    #[arg(long)]
    history_file: Option<String>,

    /// Checkpoint file path (overrides config)
    #[arg(long)]
    checkpoint_file: Option<String>,

    /// Live quote API access token (overrides config)
    #[arg(long)]
    access_token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    // Priority: CLI args > Config file > Defaults
    let mut config = if let Some(config_path) = &args.config {
        ConfigLoader::load(config_path)?
    } else {
        PipelineConfig::default()
    };

    if let Some(history_file) = args.history_file {
        config.source.history_file = history_file;
    }
    if let Some(checkpoint_file) = args.checkpoint_file {
        config.checkpoint.path = checkpoint_file;
    }
    if let Some(access_token) = args.access_token {
        config.source.access_token = access_token;
    }

    let mode = RunMode::from(args.mode);
    let pipeline = Pipeline::new(
        config.clone(),
        Box::new(CsvHistorySource::new(&config.source.history_file)),
        Box::new(GoldApiClient::new(&config.source)?),
        Box::new(JsonCheckpointStore::new(&config.checkpoint.path)),
    );

    let envelope = match pipeline.run(mode).await {
        Ok(outcome) => Envelope::from_outcome(outcome),
        Err(e) => {
            error!("Pipeline failed: {}", e);
            Envelope::failure(mode, &e)
        }
    };

    println!("{}", envelope.to_json()?);
    Ok(())
}
