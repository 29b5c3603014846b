//! Derived record generators - pure transformations of the milestone log

mod alerts;
mod contracts;
mod gaps;
mod payments;

pub use alerts::AlertGenerator;
pub use contracts::ContractGenerator;
pub use gaps::GapAnalyzer;
pub use payments::PaymentBatchGenerator;
