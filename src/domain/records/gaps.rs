//! Gap detection over consecutive milestone hits

use crate::shared::types::{GapRecord, MilestoneHit};

/// Flags large fractional price moves between consecutive milestone hits
#[derive(Debug, Clone, Copy)]
pub struct GapAnalyzer {
    threshold: f64,
}

impl GapAnalyzer {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Retain only hits whose fractional change from the previous hit
    /// exceeds the threshold. The first hit has no predecessor and is never
    /// flagged; no qualifying hit yields an empty set, not an error.
    pub fn analyze(&self, hits: &[MilestoneHit]) -> Vec<GapRecord> {
        hits.windows(2)
            .filter_map(|pair| {
                let gap_ratio = (pair[1].price - pair[0].price).abs() / pair[0].price;
                if gap_ratio > self.threshold {
                    Some(GapRecord {
                        timestamp: pair[1].timestamp,
                        price: pair[1].price,
                        gap_ratio,
                    })
                } else {
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn hit(secs: i64, price: f64) -> MilestoneHit {
        MilestoneHit {
            timestamp: Utc.timestamp_opt(1_600_000_000 + secs, 0).unwrap(),
            price,
            milestone: format!("{:.0}", price),
        }
    }

    #[test]
    fn test_first_hit_never_flagged() {
        let analyzer = GapAnalyzer::new(0.02);
        let hits = vec![hit(0, 1000.0), hit(60, 1000.0)];
        let gaps = analyzer.analyze(&hits);
        assert!(gaps.is_empty());

        // Even a huge first price is not a gap on its own
        let gaps = analyzer.analyze(&[hit(0, 5000.0)]);
        assert!(gaps.is_empty());
    }

    #[test]
    fn test_flags_only_moves_above_threshold() {
        let analyzer = GapAnalyzer::new(0.02);
        let hits = vec![
            hit(0, 1000.0),
            hit(60, 1015.0),  // 1.5%, below threshold
            hit(120, 1100.0), // ~8.4% from 1015
        ];

        let gaps = analyzer.analyze(&hits);

        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].price, 1100.0);
        assert!((gaps[0].gap_ratio - (1100.0 - 1015.0) / 1015.0).abs() < 1e-12);
    }

    #[test]
    fn test_downward_moves_use_absolute_change() {
        let analyzer = GapAnalyzer::new(0.02);
        let hits = vec![hit(0, 1000.0), hit(60, 900.0)];

        let gaps = analyzer.analyze(&hits);

        assert_eq!(gaps.len(), 1);
        assert!((gaps[0].gap_ratio - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_move_exactly_at_threshold_not_flagged() {
        let analyzer = GapAnalyzer::new(0.02);
        let hits = vec![hit(0, 1000.0), hit(60, 1020.0)];
        assert!(analyzer.analyze(&hits).is_empty());
    }

    #[test]
    fn test_empty_hit_sequence() {
        let analyzer = GapAnalyzer::new(0.02);
        assert!(analyzer.analyze(&[]).is_empty());
    }
}
