pub mod notifications_aggregator;
pub mod notifications_api_service;
pub mod realtime_service;
pub mod toast_service;
