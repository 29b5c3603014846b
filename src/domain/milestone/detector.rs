//! Milestone detection policies
//!
//! Two distinct policies: the historical policy scans a series against a
//! fixed list of structural bands, the live policy maps a single price to a
//! uniform step threshold.

use crate::shared::types::{MilestoneBand, MilestoneHit, PriceSample};

/// Detects milestone crossings against a fixed band list (historical mode)
#[derive(Debug, Clone)]
pub struct MilestoneDetector {
    bands: Vec<MilestoneBand>,
}

impl MilestoneDetector {
    pub fn new(bands: Vec<MilestoneBand>) -> Self {
        Self { bands }
    }

    /// Scan the series and return the first qualifying sample per band,
    /// ordered by band list position. Bands the series never enters produce
    /// no hit; an empty result is valid.
    pub fn detect(&self, series: &[PriceSample]) -> Vec<MilestoneHit> {
        let mut hits = Vec::new();

        for band in &self.bands {
            if let Some(sample) = series.iter().find(|s| band.contains(s.price)) {
                hits.push(MilestoneHit {
                    timestamp: sample.timestamp,
                    price: sample.price,
                    milestone: band.label.clone(),
                });
            }
        }

        hits
    }
}

/// Maps a single live price to a uniform step threshold (live mode)
#[derive(Debug, Clone, Copy)]
pub struct StepDetector {
    step: f64,
}

impl StepDetector {
    pub fn new(step: f64) -> Self {
        Self { step }
    }

    /// Floor of the step interval the price falls into.
    pub fn threshold_for(&self, price: f64) -> f64 {
        (price / self.step).floor() * self.step
    }

    /// Produce the single hit for a live sample. The label is the
    /// threshold's floor value.
    pub fn detect(&self, sample: &PriceSample) -> MilestoneHit {
        let threshold = self.threshold_for(sample.price);
        MilestoneHit {
            timestamp: sample.timestamp,
            price: sample.price,
            milestone: format!("{:.0}", threshold),
        }
    }
}
