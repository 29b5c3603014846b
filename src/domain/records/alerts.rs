//! Alert generation

use crate::shared::types::{Alert, Contract};

/// Formats one notification per contract, order-preserving
#[derive(Debug, Clone, Copy)]
pub struct AlertGenerator;

impl AlertGenerator {
    pub fn generate(&self, contracts: &[Contract]) -> Vec<Alert> {
        contracts
            .iter()
            .map(|contract| Alert {
                milestone: contract.milestone.clone(),
                timestamp: contract.timestamp,
                message: format!(
                    "Contract triggered for {} at ${:.2}",
                    contract.milestone, contract.price
                ),
            })
            .collect()
    }
}
