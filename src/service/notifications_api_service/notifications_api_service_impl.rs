use super::{NotificationsApiService, NotificationsApiServiceConfig};
use crate::{dto::input, error::Error};
use async_trait::async_trait;
use reqwest::Client;

pub struct NotificationsApiServiceImpl {
    config: NotificationsApiServiceConfig,
    client: Client,
}

impl NotificationsApiServiceImpl {
    pub fn new(config: NotificationsApiServiceConfig) -> Self {
        // No request timeout, calls stay pending until the server answers
        let client = Client::new();

        Self { config, client }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl NotificationsApiService for NotificationsApiServiceImpl {
    async fn fetch_history(&self) -> Result<Vec<input::NotificationHistoryItem>, Error> {
        tracing::debug!("fetching notification history");

        let response = self
            .client
            .get(self.url("/api/v1/admin/notifications"))
            .bearer_auth(&self.config.bearer_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::UnexpectedStatus(response.status()));
        }

        let notifications = response
            .json::<Vec<input::NotificationHistoryItem>>()
            .await?;
        tracing::debug!(count = notifications.len(), "fetched notification history");

        Ok(notifications)
    }

    async fn mark_as_read(&self, id: &str) -> Result<(), Error> {
        tracing::debug!(id, "persisting read flag");

        let response = self
            .client
            .patch(self.url(&format!("/api/v1/admin/notifications/{id}/read")))
            .bearer_auth(&self.config.bearer_token)
            .send()
            .await?;

        match response.status().is_success() {
            true => Ok(()),
            false => Err(Error::UnexpectedStatus(response.status())),
        }
    }

    async fn mark_all_as_read(&self) -> Result<(), Error> {
        tracing::debug!("persisting read flag of all notifications");

        let response = self
            .client
            .patch(self.url("/api/v1/admin/notifications/read-all"))
            .bearer_auth(&self.config.bearer_token)
            .send()
            .await?;

        match response.status().is_success() {
            true => Ok(()),
            false => Err(Error::UnexpectedStatus(response.status())),
        }
    }
}
