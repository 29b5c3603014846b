//! Project summary aggregation

use crate::shared::errors::SummaryError;
use crate::shared::types::{Contract, MilestoneHit, ProjectSummary};

/// Reduce the milestone log and contract set into scalar project statistics.
/// Min/max over an empty hit set is undefined, so an empty log is an explicit
/// error rather than a crash.
pub fn summarize_project(
    hits: &[MilestoneHit],
    contracts: &[Contract],
) -> Result<ProjectSummary, SummaryError> {
    let start_date = hits
        .iter()
        .map(|h| h.timestamp)
        .min()
        .ok_or(SummaryError::EmptyMilestoneLog)?;
    let end_date = hits
        .iter()
        .map(|h| h.timestamp)
        .max()
        .ok_or(SummaryError::EmptyMilestoneLog)?;

    Ok(ProjectSummary {
        milestone_count: hits.len(),
        contract_count: contracts.len(),
        start_date,
        end_date,
        duration_days: (end_date - start_date).num_days(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn hit(days: i64, price: f64) -> MilestoneHit {
        MilestoneHit {
            timestamp: Utc.with_ymd_and_hms(2008, 1, 1, 0, 0, 0).unwrap()
                + chrono::Duration::days(days),
            price,
            milestone: format!("{:.0}", price),
        }
    }

    #[test]
    fn test_summary_counts_and_duration() {
        let hits = vec![hit(0, 820.0), hit(10, 1250.0)];
        let contracts = vec![];

        let summary = summarize_project(&hits, &contracts).unwrap();

        assert_eq!(summary.milestone_count, 2);
        assert_eq!(summary.contract_count, 0);
        assert_eq!(summary.start_date, hits[0].timestamp);
        assert_eq!(summary.end_date, hits[1].timestamp);
        assert_eq!(summary.duration_days, 10);
    }

    #[test]
    fn test_single_hit_has_zero_duration() {
        let hits = vec![hit(0, 820.0)];
        let summary = summarize_project(&hits, &[]).unwrap();
        assert_eq!(summary.duration_days, 0);
        assert_eq!(summary.start_date, summary.end_date);
    }

    #[test]
    fn test_empty_log_is_an_error() {
        let result = summarize_project(&[], &[]);
        assert!(matches!(result, Err(SummaryError::EmptyMilestoneLog)));
    }
}
