//! Contract generation

use crate::shared::types::{Contract, MilestoneHit};

/// Produces one synthetic contract per milestone hit, in hit order
#[derive(Debug, Clone)]
pub struct ContractGenerator {
    gap_contexts: Vec<String>,
    fallback_context: String,
}

impl ContractGenerator {
    pub fn new(gap_contexts: Vec<String>, fallback_context: String) -> Self {
        Self {
            gap_contexts,
            fallback_context,
        }
    }

    /// Historical mode: gap context assigned positionally from the tag list.
    /// Hits beyond the list's length receive the fallback tag.
    pub fn generate(&self, hits: &[MilestoneHit]) -> Vec<Contract> {
        hits.iter()
            .enumerate()
            .map(|(i, hit)| Contract {
                milestone: hit.milestone.clone(),
                timestamp: hit.timestamp,
                price: hit.price,
                gap_context: self
                    .gap_contexts
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| self.fallback_context.clone()),
            })
            .collect()
    }

    /// Live mode: every contract carries the same direction-specific tag.
    pub fn generate_with_context(&self, hits: &[MilestoneHit], context: &str) -> Vec<Contract> {
        hits.iter()
            .map(|hit| Contract {
                milestone: hit.milestone.clone(),
                timestamp: hit.timestamp,
                price: hit.price,
                gap_context: context.to_string(),
            })
            .collect()
    }
}
