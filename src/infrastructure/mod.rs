//! Infrastructure layer - external collaborators (price sources, checkpoint store)

pub mod checkpoint;
pub mod history;
pub mod live;

pub use checkpoint::JsonCheckpointStore;
pub use history::{CsvHistorySource, PriceHistorySource};
pub use live::{GoldApiClient, LivePriceSource};
