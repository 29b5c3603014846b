//! Bridgecore - gold-pegged construction milestone simulation pipeline

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod report;
pub mod shared;

// Re-export main types for convenience
pub use application::{Pipeline, RunMode, RunOutcome};
pub use domain::milestone::{MilestoneDetector, StepDetector};
pub use report::Envelope;
pub use shared::config::PipelineConfig;
