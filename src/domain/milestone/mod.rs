//! Milestone domain - detection policies and live state tracking

mod detector;
mod tracker;

pub use detector::{MilestoneDetector, StepDetector};
pub use tracker::{classify_transition, CheckpointStore, Transition};
