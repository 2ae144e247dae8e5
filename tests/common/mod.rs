use axum::{
    extract::{
        ws::{Message, WebSocket},
        Path, State, WebSocketUpgrade,
    },
    http::StatusCode,
    response::Response,
    routing::{get, patch},
    Json, Router,
};
use cotchel_admin_notifier::service::{
    notifications_aggregator::NotificationsAggregator,
    notifications_api_service::{NotificationsApiServiceConfig, NotificationsApiServiceImpl},
    realtime_service::{RealtimeServiceConfig, RealtimeServiceImpl},
    toast_service::ToastServiceImpl,
};
use std::{
    net::SocketAddr,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::sync::{broadcast, Mutex};

pub struct StubBackend {
    pub address: SocketAddr,
    pub state: Arc<StubBackendState>,
}

pub struct StubBackendState {
    pub history: Mutex<Vec<serde_json::Value>>,
    pub push_tx: broadcast::Sender<String>,
    pub control_frames: Mutex<Vec<String>>,
    pub marked_read: Mutex<Vec<String>>,
    pub mark_all_calls: Mutex<usize>,
    pub fail_mutations: AtomicBool,
}

pub async fn spawn_backend(history: Vec<serde_json::Value>) -> StubBackend {
    let (push_tx, _) = broadcast::channel(32);
    let state = Arc::new(StubBackendState {
        history: Mutex::new(history),
        push_tx,
        control_frames: Mutex::new(Vec::new()),
        marked_read: Mutex::new(Vec::new()),
        mark_all_calls: Mutex::new(0),
        fail_mutations: AtomicBool::new(false),
    });

    let router = Router::new()
        .route("/api/v1/admin/notifications", get(fetch_history))
        .route(
            "/api/v1/admin/notifications/read-all",
            patch(mark_all_as_read),
        )
        .route("/api/v1/admin/notifications/:id/read", patch(mark_as_read))
        .route("/ws/v1", get(websocket_upgrade))
        .with_state(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    StubBackend { address, state }
}

async fn fetch_history(
    State(state): State<Arc<StubBackendState>>,
) -> Json<Vec<serde_json::Value>> {
    Json(state.history.lock().await.clone())
}

async fn mark_as_read(
    State(state): State<Arc<StubBackendState>>,
    Path(id): Path<String>,
) -> StatusCode {
    if state.fail_mutations.load(Ordering::SeqCst) {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    state.marked_read.lock().await.push(id);
    StatusCode::NO_CONTENT
}

async fn mark_all_as_read(State(state): State<Arc<StubBackendState>>) -> StatusCode {
    if state.fail_mutations.load(Ordering::SeqCst) {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    *state.mark_all_calls.lock().await += 1;
    StatusCode::NO_CONTENT
}

async fn websocket_upgrade(
    State(state): State<Arc<StubBackendState>>,
    ws: WebSocketUpgrade,
) -> Response {
    ws.on_upgrade(|websocket| handle_websocket(websocket, state))
}

async fn handle_websocket(mut websocket: WebSocket, state: Arc<StubBackendState>) {
    let mut push_rx = state.push_tx.subscribe();

    loop {
        tokio::select! {
            frame = push_rx.recv() => {
                let Ok(frame) = frame else { break };
                if websocket.send(Message::Text(frame)).await.is_err() {
                    break;
                }
            }
            message = websocket.recv() => {
                match message {
                    Some(Ok(Message::Text(frame))) => {
                        state.control_frames.lock().await.push(frame);
                    }
                    Some(Ok(_)) => (),
                    _ => break,
                }
            }
        }
    }
}

pub fn history_item_json(
    id: &str,
    seller_id: &str,
    status: &str,
    read: bool,
) -> serde_json::Value {
    serde_json::json!({
        "_id": id,
        "type": "account_verification",
        "sellerId": seller_id,
        "verificationStatus": status,
        "message": format!("Account verification {status}"),
        "read": read,
        "createdAt": "2026-08-01T10:00:00Z",
    })
}

pub fn push_account_verification(backend: &StubBackend, id: &str, seller_id: &str, status: &str) {
    let frame = serde_json::json!({
        "event": "accountVerification",
        "data": {
            "notificationId": id,
            "sellerId": seller_id,
            "status": status,
        },
    })
    .to_string();

    backend.state.push_tx.send(frame).unwrap();
}

///
/// Connects the realtime service and waits until the backend received
/// the join frame, so pushed events cannot outrun the subscription.
///
pub async fn connect_realtime(backend: &StubBackend) -> RealtimeServiceImpl {
    let realtime_service = RealtimeServiceImpl::new(RealtimeServiceConfig {
        url: format!("ws://{}/ws/v1", backend.address),
        buffer_size: 16,
    })
    .await
    .unwrap();

    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    loop {
        if !backend.state.control_frames.lock().await.is_empty() {
            return realtime_service;
        }
        assert!(
            tokio::time::Instant::now() < deadline,
            "join frame not received in time"
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

pub async fn mount_admin_aggregator(
    backend: &StubBackend,
    realtime_service: &RealtimeServiceImpl,
) -> NotificationsAggregator {
    let api_service = Arc::new(NotificationsApiServiceImpl::new(
        NotificationsApiServiceConfig {
            base_url: format!("http://{}", backend.address),
            bearer_token: "test-token".to_string(),
        },
    ));

    NotificationsAggregator::mount(
        true,
        api_service,
        realtime_service,
        Arc::new(ToastServiceImpl::new()),
    )
    .await
}

pub async fn notification_ids(aggregator: &NotificationsAggregator) -> Vec<String> {
    aggregator
        .notifications()
        .await
        .into_iter()
        .map(|notification| notification.id)
        .collect()
}

pub async fn wait_for_ids(aggregator: &NotificationsAggregator, expected: &[&str]) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    loop {
        let ids = notification_ids(aggregator).await;
        if ids == expected {
            return;
        }
        assert!(
            tokio::time::Instant::now() < deadline,
            "expected {expected:?}, last seen {ids:?}"
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
