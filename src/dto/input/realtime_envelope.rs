use serde::Deserialize;

///
/// Generic frame of the realtime channel: an event name
/// and an event specific payload.
///
#[derive(Debug, Deserialize)]
pub struct RealtimeEnvelope {
    pub event: String,
    #[serde(default)]
    pub data: serde_json::Value,
}
