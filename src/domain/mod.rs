//! Domain layer - milestone detection and derived record generation

pub mod milestone;
pub mod records;
pub mod summary;
