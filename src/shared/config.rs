//! Pipeline configuration

use serde::{Deserialize, Serialize};
use std::fs;

use crate::shared::errors::AppError;
use crate::shared::types::MilestoneBand;

/// Price source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub history_file: String,
    pub api_url: String,
    pub access_token: String,
    pub fetch_timeout_ms: u64,
}

/// Milestone detection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneConfig {
    /// Fixed structural bands used by the historical policy
    pub bands: Vec<MilestoneBand>,
    /// Uniform step size used by the live policy, in currency units
    pub live_step: f64,
}

/// Derived record configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordConfig {
    pub gap_threshold: f64,
    pub payment_multiplier: f64,
    pub payment_recipient: String,
    pub payment_status: String,
    /// Macroeconomic tags assigned positionally to historical contracts
    pub gap_contexts: Vec<String>,
    /// Tag assigned when contracts outnumber the gap_contexts list
    pub fallback_context: String,
}

/// Checkpoint store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckpointConfig {
    pub path: String,
}

/// Full pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub source: SourceConfig,
    pub milestones: MilestoneConfig,
    pub records: RecordConfig,
    pub checkpoint: CheckpointConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig {
                history_file: "data/XAUUSD_historical.csv".to_string(),
                api_url: "https://www.goldapi.io/api/XAU/USD".to_string(),
                access_token: "".to_string(), // Will be set from config file or CLI
                fetch_timeout_ms: 10_000,
            },
            milestones: MilestoneConfig {
                bands: vec![
                    MilestoneBand::new("Foundation Laid", 380.0, 800.0),
                    MilestoneBand::new("Pillars Complete", 800.0, 1200.0),
                    MilestoneBand::new("Deck Installed", 1200.0, 1800.0),
                    MilestoneBand::new("Railings Added", 1800.0, 2400.0),
                    MilestoneBand::new("Bridge Topped Off", 2400.0, 3500.0),
                ],
                live_step: 30.0,
            },
            records: RecordConfig {
                gap_threshold: 0.02,
                payment_multiplier: 100.0,
                payment_recipient: "Bridge Contractor Escrow".to_string(),
                payment_status: "Scheduled".to_string(),
                gap_contexts: vec![
                    "None".to_string(),
                    "Pre-Crisis Boom + Commodities Rise".to_string(),
                    "2008 Global Financial Crisis".to_string(),
                    "Eurozone Crisis & Quantitative Easing".to_string(),
                    "COVID-19, War in Ukraine, AI-led Hype".to_string(),
                ],
                fallback_context: "Unclassified".to_string(),
            },
            checkpoint: CheckpointConfig {
                path: "checkpoint.json".to_string(),
            },
        }
    }
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file
    pub fn load(path: &str) -> Result<PipelineConfig, AppError> {
        let config_content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigError(format!("Failed to read config file: {}", e)))?;

        let config: PipelineConfig = toml::from_str(&config_content)
            .map_err(|e| AppError::ConfigError(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }
}
