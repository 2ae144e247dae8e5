use super::{error::Error, RealtimeService, RealtimeServiceConfig};
use crate::dto::{input, output};
use anyhow::{anyhow, Context};
use futures::{SinkExt, StreamExt};
use tokio::{net::TcpStream, sync::broadcast, task::JoinHandle};
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};

const ACCOUNT_VERIFICATION_EVENT: &str = "accountVerification";

type WebSocket = WebSocketStream<MaybeTlsStream<TcpStream>>;

///
/// The one realtime connection of the process. Constructed once at
/// application start and shared by reference with every consumer.
///
pub struct RealtimeServiceImpl {
    events_tx: broadcast::Sender<input::AccountVerificationEvent>,
    read_loop: JoinHandle<()>,
}

impl RealtimeServiceImpl {
    ///
    /// Opens the connection, joins the admin room and starts
    /// forwarding account verification events to subscribers.
    ///
    /// There is no reconnect. When the connection drops the read loop
    /// ends and subscribers observe their channel closing.
    ///
    pub async fn new(config: RealtimeServiceConfig) -> anyhow::Result<Self> {
        tracing::info!(url = %config.url, "connecting to realtime channel");
        let (mut websocket, _) = connect_async(config.url.as_str())
            .await
            .context("failed to connect to realtime channel")?;

        let join_frame = serde_json::to_string(&output::RealtimeControlFrame::join_admin_room())
            .context("failed to serialize join frame")?;
        websocket
            .send(Message::Text(join_frame))
            .await
            .context("failed to join admin room")?;
        tracing::info!("joined admin room");

        let (events_tx, _) = broadcast::channel(config.buffer_size);
        let read_loop = tokio::spawn(Self::read_loop(websocket, events_tx.clone()));

        Ok(Self {
            events_tx,
            read_loop,
        })
    }

    #[tracing::instrument(name = "Realtime Channel", skip_all)]
    async fn read_loop(
        mut websocket: WebSocket,
        events_tx: broadcast::Sender<input::AccountVerificationEvent>,
    ) {
        match Self::try_read_loop(&mut websocket, &events_tx).await {
            Ok(()) => tracing::info!("realtime channel ended"),
            Err(Error::Close(message)) => tracing::info!("realtime channel closed: {message}"),
            Err(Error::Anyhow(err)) => tracing::warn!("realtime channel failed: {err}"),
        }
    }

    async fn try_read_loop(
        websocket: &mut WebSocket,
        events_tx: &broadcast::Sender<input::AccountVerificationEvent>,
    ) -> Result<(), Error> {
        while let Some(message) = websocket.next().await {
            let message = message.map_err(|err| anyhow!("realtime transport error: {err}"))?;

            match message {
                Message::Text(frame) => Self::dispatch_frame(&frame, events_tx),
                Message::Close(_) => return Err(Error::Close("server closed connection")),
                // ping/pong/binary frames are not part of the admin contract
                _ => (),
            }
        }

        Ok(())
    }

    fn dispatch_frame(
        frame: &str,
        events_tx: &broadcast::Sender<input::AccountVerificationEvent>,
    ) {
        let envelope = match serde_json::from_str::<input::RealtimeEnvelope>(frame) {
            Ok(envelope) => envelope,
            Err(err) => {
                tracing::warn!(%err, "discarding malformed realtime frame");
                return;
            }
        };

        if envelope.event != ACCOUNT_VERIFICATION_EVENT {
            tracing::debug!(event = %envelope.event, "ignoring unhandled realtime event");
            return;
        }

        match serde_json::from_value::<input::AccountVerificationEvent>(envelope.data) {
            Ok(event) => {
                tracing::trace!(id = %event.id, "forwarding account verification event");
                // no receiver means no mounted consumer, the event is dropped
                let _ = events_tx.send(event);
            }
            Err(err) => {
                tracing::warn!(%err, "discarding malformed account verification payload");
            }
        }
    }

    pub async fn close(self) {
        tracing::info!("closing realtime channel");
        self.read_loop.abort();
        let _ = self.read_loop.await;
    }
}

impl RealtimeService for RealtimeServiceImpl {
    fn subscribe(&self) -> broadcast::Receiver<input::AccountVerificationEvent> {
        self.events_tx.subscribe()
    }
}
