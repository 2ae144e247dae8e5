use super::Toast;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ToastService: Send + Sync {
    ///
    /// Show a transient, auto dismissing notice to the operator.
    ///
    /// Failing to show a toast is never a functional error.
    ///
    async fn show(&self, toast: Toast);
}
