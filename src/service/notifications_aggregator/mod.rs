mod dto;
mod notifications_aggregator;

pub use dto::*;
pub use notifications_aggregator::*;
