use crate::{dto::input, error::Error};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsApiService: Send + Sync {
    ///
    /// Fetch the admin notification history.
    ///
    /// ### Returns
    /// Vec of history items in server order, newest first
    ///
    async fn fetch_history(&self) -> Result<Vec<input::NotificationHistoryItem>, Error>;

    ///
    /// Persist the read flag of a single notification.
    ///
    /// ### Errors
    /// - [Error::UnexpectedStatus] when the backend rejects the update
    ///
    async fn mark_as_read(&self, id: &str) -> Result<(), Error>;

    ///
    /// Persist the read flag of every notification of the admin.
    ///
    /// ### Errors
    /// - [Error::UnexpectedStatus] when the backend rejects the update
    ///
    async fn mark_all_as_read(&self) -> Result<(), Error>;
}
