use super::Notification;
use crate::{
    dto::input,
    service::{
        notifications_api_service::NotificationsApiService,
        realtime_service::RealtimeService,
        toast_service::{Toast, ToastService},
    },
};
use std::sync::Arc;
use tokio::{
    sync::{broadcast, broadcast::error::RecvError, Mutex},
    task::JoinHandle,
};

///
/// Client side view of the admin notification list.
///
/// One instance per mounted admin view. The list is seeded once from
/// the history endpoint and kept current by the push stream for the
/// lifetime of the instance. Instances sharing one realtime connection
/// aggregate independently, there is no shared list state.
///
/// Push driven supersession applies immediately, read state mutations
/// apply only after the backend confirmed them.
///
pub struct NotificationsAggregator {
    admin_context: bool,
    notifications: Arc<Mutex<Vec<Notification>>>,
    api_service: Arc<dyn NotificationsApiService>,
    toast_service: Arc<dyn ToastService>,
    listener: Option<JoinHandle<()>>,
}

impl NotificationsAggregator {
    ///
    /// Mounts the aggregator.
    ///
    /// Outside admin context nothing touches the network and the list
    /// stays empty and frozen. In admin context the history is fetched
    /// once (failure degrades to an empty list, the push stream still
    /// attaches) and a listener task follows the push stream until the
    /// instance is closed or dropped.
    ///
    pub async fn mount(
        admin_context: bool,
        api_service: Arc<dyn NotificationsApiService>,
        realtime_service: &dyn RealtimeService,
        toast_service: Arc<dyn ToastService>,
    ) -> Self {
        let notifications = Arc::new(Mutex::new(Vec::new()));

        if !admin_context {
            tracing::debug!("mounted outside admin context, notification list stays empty");
            return Self {
                admin_context,
                notifications,
                api_service,
                toast_service,
                listener: None,
            };
        }

        match api_service.fetch_history().await {
            Ok(history) => {
                let mut lock = notifications.lock().await;
                lock.extend(history.into_iter().map(Notification::from));
                tracing::info!(count = lock.len(), "seeded notification history");
            }
            Err(err) => tracing::warn!(%err, "failed to fetch notification history"),
        }

        let events_rx = realtime_service.subscribe();
        let listener = tokio::spawn(Self::listen(
            events_rx,
            Arc::clone(&notifications),
            Arc::clone(&toast_service),
        ));

        Self {
            admin_context,
            notifications,
            api_service,
            toast_service,
            listener: Some(listener),
        }
    }

    #[tracing::instrument(name = "Notifications Listener", skip_all)]
    async fn listen(
        mut events_rx: broadcast::Receiver<input::AccountVerificationEvent>,
        notifications: Arc<Mutex<Vec<Notification>>>,
        toast_service: Arc<dyn ToastService>,
    ) {
        loop {
            match events_rx.recv().await {
                Ok(event) => {
                    Self::apply_account_verification(
                        &notifications,
                        toast_service.as_ref(),
                        event,
                    )
                    .await;
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "listener lagged behind the push stream");
                }
                Err(RecvError::Closed) => {
                    tracing::info!("push stream closed");
                    break;
                }
            }
        }
    }

    ///
    /// Applies one push event to the list.
    ///
    /// A terminal status removes every pending record of the same
    /// seller before the new record is prepended. A terminal event
    /// whose (seller, status) pair is already present is a duplicate
    /// and is discarded.
    ///
    #[tracing::instrument(
        name = "Account Verification",
        skip_all,
        fields(
            id = %event.id,
            seller_id = %event.seller_id,
            status = %event.status,
        )
    )]
    async fn apply_account_verification(
        notifications: &Mutex<Vec<Notification>>,
        toast_service: &dyn ToastService,
        event: input::AccountVerificationEvent,
    ) {
        tracing::debug!("processing account verification event");

        let status = event.status;
        let seller_id = event.seller_id.clone();
        let notification = Notification::from(event);
        let toast = match status {
            input::VerificationStatus::Pending => Toast::info(notification.message.clone()),
            input::VerificationStatus::Approved => Toast::success(notification.message.clone()),
            input::VerificationStatus::Rejected => Toast::error(notification.message.clone()),
        };

        {
            let mut notifications = notifications.lock().await;

            if status.is_terminal() {
                let duplicate = notifications.iter().any(|notification| {
                    notification.kind == input::NotificationKind::AccountVerification
                        && notification.seller_id.as_deref() == Some(seller_id.as_str())
                        && notification.verification_status == Some(status)
                });
                if duplicate {
                    tracing::debug!("discarding duplicate terminal verification event");
                    return;
                }

                notifications.retain(|notification| {
                    !(notification.kind == input::NotificationKind::AccountVerification
                        && notification.seller_id.as_deref() == Some(seller_id.as_str())
                        && notification.verification_status
                            == Some(input::VerificationStatus::Pending))
                });
            }

            notifications.insert(0, notification);
        }

        toast_service.show(toast).await;
    }

    ///
    /// Persist the read flag of one notification, confirm then apply:
    /// the local record flips only after the backend acknowledged.
    ///
    /// A blank id is a caller contract violation, rejected without
    /// any network call. A confirmation arriving after the record was
    /// superseded updates nothing.
    ///
    pub async fn mark_as_read(&self, id: &str) {
        if !self.admin_context {
            tracing::debug!("ignoring read update outside admin context");
            return;
        }

        if id.trim().is_empty() {
            tracing::error!("mark as read called without notification id");
            return;
        }

        tracing::info!(id, "marking notification as read");
        match self.api_service.mark_as_read(id).await {
            Ok(()) => {
                let mut notifications = self.notifications.lock().await;
                match notifications
                    .iter_mut()
                    .find(|notification| notification.id == id)
                {
                    Some(notification) => notification.read = true,
                    None => tracing::debug!(id, "read confirmation for absent notification"),
                }
            }
            Err(err) => {
                tracing::warn!(%err, id, "failed to mark notification as read");
                self.toast_service
                    .show(Toast::error("Failed to mark notification as read"))
                    .await;
            }
        }
    }

    ///
    /// Persist the read flag of every notification, confirm then
    /// apply. Count and order of the list never change here.
    ///
    pub async fn mark_all_as_read(&self) {
        if !self.admin_context {
            tracing::debug!("ignoring read update outside admin context");
            return;
        }

        tracing::info!("marking all notifications as read");
        match self.api_service.mark_all_as_read().await {
            Ok(()) => {
                {
                    let mut notifications = self.notifications.lock().await;
                    for notification in notifications.iter_mut() {
                        notification.read = true;
                    }
                }
                self.toast_service
                    .show(Toast::success("All notifications marked as read"))
                    .await;
            }
            Err(err) => {
                tracing::warn!(%err, "failed to mark all notifications as read");
                self.toast_service
                    .show(Toast::error("Failed to mark all notifications as read"))
                    .await;
            }
        }
    }

    ///
    /// Snapshot of the list, newest first.
    ///
    pub async fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().await.clone()
    }

    pub async fn unread_count(&self) -> usize {
        self.notifications
            .lock()
            .await
            .iter()
            .filter(|notification| !notification.read)
            .count()
    }

    pub async fn close(mut self) {
        if let Some(listener) = self.listener.take() {
            listener.abort();
            let _ = listener.await;
        }
    }
}

impl Drop for NotificationsAggregator {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            listener.abort();
        }
    }
}
