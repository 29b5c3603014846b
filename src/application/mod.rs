//! Application layer - pipeline orchestration

pub mod pipeline;

pub use pipeline::{LiveSnapshot, Pipeline, RecordSet, RunMode, RunOutcome};
