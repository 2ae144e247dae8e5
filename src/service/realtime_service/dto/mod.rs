mod realtime_service_config;

pub use realtime_service_config::*;
