mod dto;
mod error;
mod realtime_service;
mod realtime_service_impl;

pub use dto::RealtimeServiceConfig;
pub use realtime_service::*;
pub use realtime_service_impl::*;
