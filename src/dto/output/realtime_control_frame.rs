use serde::Serialize;

///
/// Control frame sent by this client on the realtime channel.
///
#[derive(Debug, Clone, Serialize)]
pub struct RealtimeControlFrame {
    pub event: String,
}

impl RealtimeControlFrame {
    ///
    /// Subscribes the connection to the admin broadcast room.
    ///
    pub fn join_admin_room() -> Self {
        Self {
            event: "joinAdminRoom".to_string(),
        }
    }
}
