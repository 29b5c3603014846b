//! Result envelope consumed by presentation layers
//!
//! Success carries the full derived record set; live runs add the price
//! snapshot fields. Failure carries a single human-readable error message,
//! with live numeric fields serialized as explicit nulls rather than omitted.

use serde::Serialize;

use crate::application::{RunMode, RunOutcome};
use crate::shared::errors::AppError;
use crate::shared::types::{Alert, Contract, Direction, GapRecord, MilestoneHit, Payment, ProjectSummary};

/// Live-mode fields of the envelope
#[derive(Debug, Serialize)]
pub struct LiveFields {
    pub live_price: Option<f64>,
    pub open_price: Option<f64>,
    pub delta: Option<f64>,
    pub milestone_price: Option<f64>,
    pub milestone_direction: Option<Direction>,
    pub message: Option<String>,
}

/// Structure handed to presentation layers after every run
#[derive(Debug, Serialize)]
pub struct Envelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ProjectSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestones: Option<Vec<MilestoneHit>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contracts: Option<Vec<Contract>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gaps: Option<Vec<GapRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alerts: Option<Vec<Alert>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payments: Option<Vec<Payment>>,
    #[serde(flatten)]
    pub live: Option<LiveFields>,
}

impl Envelope {
    pub fn from_outcome(outcome: RunOutcome) -> Self {
        match outcome {
            RunOutcome::Historical(records) => Self {
                error: None,
                summary: Some(records.summary),
                milestones: Some(records.milestones),
                contracts: Some(records.contracts),
                gaps: Some(records.gaps),
                alerts: Some(records.alerts),
                payments: Some(records.payments),
                live: None,
            },
            RunOutcome::LiveTriggered {
                snapshot,
                direction,
                records,
            } => Self {
                error: None,
                summary: Some(records.summary),
                milestones: Some(records.milestones),
                contracts: Some(records.contracts),
                gaps: Some(records.gaps),
                alerts: Some(records.alerts),
                payments: Some(records.payments),
                live: Some(LiveFields {
                    live_price: Some(snapshot.live_price),
                    open_price: Some(snapshot.open_price),
                    delta: Some(snapshot.delta),
                    milestone_price: Some(snapshot.milestone_price),
                    milestone_direction: Some(direction),
                    message: Some(snapshot.message),
                }),
            },
            RunOutcome::LiveQuiescent(snapshot) => Self {
                error: None,
                summary: None,
                milestones: None,
                contracts: None,
                gaps: None,
                alerts: None,
                payments: None,
                live: Some(LiveFields {
                    live_price: Some(snapshot.live_price),
                    open_price: Some(snapshot.open_price),
                    delta: Some(snapshot.delta),
                    milestone_price: Some(snapshot.milestone_price),
                    milestone_direction: Some(Direction::Neutral),
                    message: Some(snapshot.message),
                }),
            },
        }
    }

    pub fn failure(mode: RunMode, error: &AppError) -> Self {
        Self {
            error: Some(error.to_string()),
            summary: None,
            milestones: None,
            contracts: None,
            gaps: None,
            alerts: None,
            payments: None,
            live: match mode {
                RunMode::Historical => None,
                // Live numeric fields stay present as explicit unknowns
                RunMode::Live => Some(LiveFields {
                    live_price: None,
                    open_price: None,
                    delta: None,
                    milestone_price: None,
                    milestone_direction: None,
                    message: None,
                }),
            },
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::LiveSnapshot;

    fn snapshot() -> LiveSnapshot {
        LiveSnapshot {
            live_price: 345.0,
            open_price: 340.0,
            delta: 5.0,
            milestone_price: 330.0,
            message: "No new milestone. Price holding at 330.".to_string(),
        }
    }

    #[test]
    fn test_quiescent_envelope_has_snapshot_only() {
        let envelope = Envelope::from_outcome(RunOutcome::LiveQuiescent(snapshot()));
        let value: serde_json::Value =
            serde_json::from_str(&envelope.to_json().unwrap()).unwrap();

        assert_eq!(value["live_price"], 345.0);
        assert_eq!(value["milestone_price"], 330.0);
        assert_eq!(value["milestone_direction"], "neutral");
        assert!(value.get("contracts").is_none());
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_live_failure_keeps_numeric_fields_as_null() {
        let error = AppError::SourceError("live price fetch failed: HTTP 401".to_string());
        let envelope = Envelope::failure(RunMode::Live, &error);
        let value: serde_json::Value =
            serde_json::from_str(&envelope.to_json().unwrap()).unwrap();

        assert!(value["error"].as_str().unwrap().contains("HTTP 401"));
        assert!(value["live_price"].is_null());
        assert!(value["delta"].is_null());
        assert!(value["milestone_price"].is_null());
    }

    #[test]
    fn test_historical_failure_is_error_only() {
        let error = AppError::SourceError("history file unreadable".to_string());
        let envelope = Envelope::failure(RunMode::Historical, &error);
        let value: serde_json::Value =
            serde_json::from_str(&envelope.to_json().unwrap()).unwrap();

        assert!(value.get("live_price").is_none());
        assert!(value.get("summary").is_none());
        assert!(value["error"].is_string());
    }
}
