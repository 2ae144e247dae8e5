#[derive(Debug, Clone)]
pub struct NotificationsApiServiceConfig {
    pub base_url: String,
    pub bearer_token: String,
}
