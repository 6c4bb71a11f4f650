//! Core types and service wiring for the skiphire skip selection flow.

/// Filtering, ordering, and pricing of raw offers.
pub mod catalog;
/// Offer records, locations, and priced display records.
pub mod model;
/// Traits describing offer sources.
pub mod ports;
/// Single-item selection state and its observer.
pub mod selection;
/// High-level service facade used by clients.
pub mod service;

pub use catalog::*;
pub use model::*;
pub use ports::*;
pub use selection::*;
pub use service::*;
