//! Pipeline orchestration
//!
//! Two modes, three terminal outcomes. Historical runs scan the full series
//! against the fixed bands; live runs map one quote to a step threshold and
//! are gated by the checkpoint. Failures abort the whole run, partial record
//! sets are never produced, and the orchestrator never retries.

use chrono::Utc;
use tracing::info;

use crate::domain::milestone::{
    classify_transition, CheckpointStore, MilestoneDetector, StepDetector, Transition,
};
use crate::domain::records::{AlertGenerator, ContractGenerator, GapAnalyzer, PaymentBatchGenerator};
use crate::domain::summary::summarize_project;
use crate::infrastructure::{LivePriceSource, PriceHistorySource};
use crate::shared::config::PipelineConfig;
use crate::shared::errors::AppError;
use crate::shared::types::{
    Alert, Checkpoint, Contract, Direction, GapRecord, MilestoneHit, Payment, PriceSample,
    ProjectSummary,
};

/// Pipeline execution mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Historical,
    Live,
}

/// Full derived record set produced by one fan-out
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    pub milestones: Vec<MilestoneHit>,
    pub contracts: Vec<Contract>,
    pub gaps: Vec<GapRecord>,
    pub alerts: Vec<Alert>,
    pub payments: Vec<Payment>,
    pub summary: ProjectSummary,
}

/// Live price snapshot carried in every live outcome
#[derive(Debug, Clone, PartialEq)]
pub struct LiveSnapshot {
    pub live_price: f64,
    pub open_price: f64,
    pub delta: f64,
    pub milestone_price: f64,
    pub message: String,
}

/// Terminal outcome of one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Historical run completed end-to-end
    Historical(RecordSet),
    /// Live run crossed into a new step interval
    LiveTriggered {
        snapshot: LiveSnapshot,
        direction: Direction,
        records: RecordSet,
    },
    /// Live run found the price still within the last triggered interval
    LiveQuiescent(LiveSnapshot),
}

/// Sequences detection and fan-out for one invocation
pub struct Pipeline {
    config: PipelineConfig,
    history: Box<dyn PriceHistorySource>,
    live: Box<dyn LivePriceSource>,
    checkpoints: Box<dyn CheckpointStore>,
}

impl Pipeline {
    pub fn new(
        config: PipelineConfig,
        history: Box<dyn PriceHistorySource>,
        live: Box<dyn LivePriceSource>,
        checkpoints: Box<dyn CheckpointStore>,
    ) -> Self {
        Self {
            config,
            history,
            live,
            checkpoints,
        }
    }

    pub async fn run(&self, mode: RunMode) -> Result<RunOutcome, AppError> {
        match mode {
            RunMode::Historical => self.run_historical(),
            RunMode::Live => self.run_live().await,
        }
    }

    fn run_historical(&self) -> Result<RunOutcome, AppError> {
        let series = self.history.load()?;
        info!("Loaded {} rows of price data", series.len());

        let detector = MilestoneDetector::new(self.config.milestones.bands.clone());
        let hits = detector.detect(&series);
        info!("Milestones found: {}", hits.len());

        let records = self.fan_out(hits, None)?;
        Ok(RunOutcome::Historical(records))
    }

    async fn run_live(&self) -> Result<RunOutcome, AppError> {
        let quote = self.live.fetch().await?;
        let delta = quote.price - quote.open_price;

        let detector = StepDetector::new(self.config.milestones.live_step);
        let threshold = detector.threshold_for(quote.price);
        let checkpoint = self.checkpoints.read();

        match classify_transition(checkpoint.last_milestone, threshold) {
            Transition::Unchanged => {
                info!("Price {} still within milestone {}", quote.price, threshold);
                Ok(RunOutcome::LiveQuiescent(LiveSnapshot {
                    live_price: quote.price,
                    open_price: quote.open_price,
                    delta,
                    milestone_price: threshold,
                    message: format!("No new milestone. Price holding at {:.0}.", threshold),
                }))
            }
            Transition::Crossed { direction } => {
                info!("Milestone {} crossed ({})", threshold, direction);
                let sample = PriceSample {
                    timestamp: Utc::now(),
                    price: quote.price,
                };
                let hits = vec![detector.detect(&sample)];
                let records = self.fan_out(hits, Some(direction))?;

                // Written only after the full fan-out succeeds, so a failed
                // run leaves the trigger re-armed.
                self.checkpoints.write(&Checkpoint {
                    last_milestone: threshold,
                    last_direction: direction,
                })?;

                Ok(RunOutcome::LiveTriggered {
                    snapshot: LiveSnapshot {
                        live_price: quote.price,
                        open_price: quote.open_price,
                        delta,
                        milestone_price: threshold,
                        message: format!("New milestone {:.0} crossed ({}).", threshold, direction),
                    },
                    direction,
                    records,
                })
            }
        }
    }

    /// Deterministic fan-out from a milestone log into the derived record set.
    fn fan_out(
        &self,
        hits: Vec<MilestoneHit>,
        live_direction: Option<Direction>,
    ) -> Result<RecordSet, AppError> {
        let records_cfg = &self.config.records;

        let contract_generator = ContractGenerator::new(
            records_cfg.gap_contexts.clone(),
            records_cfg.fallback_context.clone(),
        );
        let contracts = match live_direction {
            None => contract_generator.generate(&hits),
            Some(direction) => {
                contract_generator.generate_with_context(&hits, live_context(direction))
            }
        };

        let gaps = GapAnalyzer::new(records_cfg.gap_threshold).analyze(&hits);
        let alerts = AlertGenerator.generate(&contracts);
        let payments = PaymentBatchGenerator::new(
            records_cfg.payment_multiplier,
            records_cfg.payment_recipient.clone(),
            records_cfg.payment_status.clone(),
        )
        .generate(&contracts);

        let summary = summarize_project(&hits, &contracts)?;

        Ok(RecordSet {
            milestones: hits,
            contracts,
            gaps,
            alerts,
            payments,
            summary,
        })
    }
}

/// Fixed literal gap-context tag for live contracts
fn live_context(direction: Direction) -> &'static str {
    match direction {
        Direction::Progress => "Live Progress",
        Direction::Delay => "Live Delay",
        Direction::Neutral => "Live Hold",
    }
}
