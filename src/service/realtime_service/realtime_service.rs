use crate::dto::input;
use tokio::sync::broadcast;

#[cfg_attr(test, mockall::automock)]
pub trait RealtimeService: Send + Sync {
    ///
    /// Subscribe to account verification events pushed to the admin room.
    ///
    /// Every subscriber receives every event independently,
    /// there is no shared consumer state beyond the connection itself.
    ///
    fn subscribe(&self) -> broadcast::Receiver<input::AccountVerificationEvent>;
}
