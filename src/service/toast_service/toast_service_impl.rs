use super::{Toast, ToastService, ToastSeverity};
use async_trait::async_trait;

///
/// Headless toast sink: notices end up in the structured log.
/// Presentation layers substitute their own implementation.
///
pub struct ToastServiceImpl;

impl ToastServiceImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ToastServiceImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToastService for ToastServiceImpl {
    async fn show(&self, toast: Toast) {
        match toast.severity {
            ToastSeverity::Info | ToastSeverity::Success => {
                tracing::info!(severity = %toast.severity, "toast: {}", toast.message)
            }
            ToastSeverity::Error => {
                tracing::error!(severity = %toast.severity, "toast: {}", toast.message)
            }
        }
    }
}
