mod dto;
mod toast_service;
mod toast_service_impl;

pub use dto::*;
pub use toast_service::*;
pub use toast_service_impl::*;
