//! Common types used across the pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One observation of the gold price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSample {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

/// Named half-open price interval `[min, max)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneBand {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl MilestoneBand {
    pub fn new(label: &str, min: f64, max: f64) -> Self {
        Self {
            label: label.to_string(),
            min,
            max,
        }
    }

    /// Half-open membership: `min` belongs to this band, `max` does not.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price < self.max
    }
}

/// The first sample observed within a given band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneHit {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
    pub milestone: String,
}

/// Direction of a live milestone transition relative to the checkpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Progress,
    Delay,
    Neutral,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Progress => write!(f, "progress"),
            Direction::Delay => write!(f, "delay"),
            Direction::Neutral => write!(f, "neutral"),
        }
    }
}

/// Persisted live-mode state: last triggered threshold and movement direction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub last_milestone: f64,
    pub last_direction: Direction,
}

impl Default for Checkpoint {
    fn default() -> Self {
        Self {
            last_milestone: 0.0,
            last_direction: Direction::Neutral,
        }
    }
}

/// Synthetic contract derived from a milestone hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub milestone: String,
    pub timestamp: DateTime<Utc>,
    pub price: f64,
    pub gap_context: String,
}

/// A qualifying large fractional move between consecutive milestone hits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapRecord {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
    pub gap_ratio: f64,
}

/// Formatted notification derived from a contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub milestone: String,
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

/// Scheduled payout derived from a contract; no real payment execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub milestone: String,
    pub amount: f64,
    pub recipient: String,
    pub timestamp: DateTime<Utc>,
    pub status: String,
}

/// Scalar aggregate over the milestone log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub milestone_count: usize,
    pub contract_count: usize,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub duration_days: i64,
}

/// Live price snapshot as returned by the quote API
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveQuote {
    pub price: f64,
    pub open_price: f64,
}
