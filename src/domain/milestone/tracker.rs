//! Live-mode milestone state tracking
//!
//! The checkpoint suppresses duplicate triggers: a threshold fires at most
//! once until the price moves to a different step interval.

use crate::shared::errors::CheckpointError;
use crate::shared::types::{Checkpoint, Direction};

/// Storage seam for the persisted checkpoint
pub trait CheckpointStore: Send + Sync {
    /// Read the current checkpoint. A missing or corrupt document is a valid
    /// initial state and reads as `Checkpoint::default()`, never an error.
    fn read(&self) -> Checkpoint;

    /// Persist a new checkpoint, replacing any prior value.
    fn write(&self, checkpoint: &Checkpoint) -> Result<(), CheckpointError>;
}

/// Outcome of comparing the current threshold against the checkpoint
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Same step interval as the last trigger; no fan-out, no state write
    Unchanged,
    /// New step interval entered; full fan-out and checkpoint update
    Crossed { direction: Direction },
}

/// Classify the move from the last triggered threshold to the current one.
pub fn classify_transition(last_threshold: f64, current_threshold: f64) -> Transition {
    if current_threshold == last_threshold {
        Transition::Unchanged
    } else if current_threshold > last_threshold {
        Transition::Crossed {
            direction: Direction::Progress,
        }
    } else {
        Transition::Crossed {
            direction: Direction::Delay,
        }
    }
}
