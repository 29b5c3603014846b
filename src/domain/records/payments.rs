//! Payment batch generation

use crate::shared::types::{Contract, Payment};

/// Produces one scheduled payment per contract; no real payment execution
#[derive(Debug, Clone)]
pub struct PaymentBatchGenerator {
    multiplier: f64,
    recipient: String,
    status: String,
}

impl PaymentBatchGenerator {
    pub fn new(multiplier: f64, recipient: String, status: String) -> Self {
        Self {
            multiplier,
            recipient,
            status,
        }
    }

    pub fn generate(&self, contracts: &[Contract]) -> Vec<Payment> {
        contracts
            .iter()
            .map(|contract| Payment {
                milestone: contract.milestone.clone(),
                amount: contract.price * self.multiplier,
                recipient: self.recipient.clone(),
                timestamp: contract.timestamp,
                status: self.status.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn contract(label: &str, price: f64) -> Contract {
        Contract {
            milestone: label.to_string(),
            timestamp: Utc.timestamp_opt(1_600_000_000, 0).unwrap(),
            price,
            gap_context: "None".to_string(),
        }
    }

    fn generator() -> PaymentBatchGenerator {
        PaymentBatchGenerator::new(100.0, "Escrow".to_string(), "Scheduled".to_string())
    }

    #[test]
    fn test_amount_is_price_times_multiplier() {
        let payments = generator().generate(&[contract("Pillars Complete", 820.0)]);

        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].amount, 82_000.0);
        assert_eq!(payments[0].recipient, "Escrow");
        assert_eq!(payments[0].status, "Scheduled");
    }

    #[test]
    fn test_one_payment_per_contract_in_order() {
        let contracts = vec![contract("A", 820.0), contract("B", 1250.0)];
        let payments = generator().generate(&contracts);

        assert_eq!(payments.len(), 2);
        assert_eq!(payments[0].milestone, "A");
        assert_eq!(payments[1].milestone, "B");
        assert_eq!(payments[1].amount, 125_000.0);
    }
}
