mod notifications_api_service_config;

pub use notifications_api_service_config::*;
