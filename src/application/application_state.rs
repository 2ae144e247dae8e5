use super::ApplicationEnv;
use crate::service::{
    notifications_aggregator::NotificationsAggregator,
    notifications_api_service::{NotificationsApiServiceConfig, NotificationsApiServiceImpl},
    realtime_service::{RealtimeServiceConfig, RealtimeServiceImpl},
    toast_service::ToastServiceImpl,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct ApplicationState {
    pub aggregator: Arc<NotificationsAggregator>,
}

pub struct ApplicationStateToClose {
    pub aggregator: Arc<NotificationsAggregator>,
    pub realtime_service: Arc<RealtimeServiceImpl>,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("creating services");
    let config = NotificationsApiServiceConfig {
        base_url: env.api_base_url.clone(),
        bearer_token: env.api_bearer_token.clone(),
    };
    let api_service = NotificationsApiServiceImpl::new(config);
    let api_service = Arc::new(api_service);

    let toast_service = ToastServiceImpl::new();
    let toast_service = Arc::new(toast_service);

    let config = RealtimeServiceConfig {
        url: env.realtime_url.clone(),
        buffer_size: env.realtime_buffer_size,
    };
    let realtime_service = RealtimeServiceImpl::new(config).await?;
    let realtime_service = Arc::new(realtime_service);

    tracing::info!("mounting admin notifications aggregator");
    let aggregator = NotificationsAggregator::mount(
        true,
        api_service,
        realtime_service.as_ref(),
        toast_service,
    )
    .await;
    let aggregator = Arc::new(aggregator);

    Ok((
        ApplicationState {
            aggregator: Arc::clone(&aggregator),
        },
        ApplicationStateToClose {
            aggregator,
            realtime_service,
        },
    ))
}
