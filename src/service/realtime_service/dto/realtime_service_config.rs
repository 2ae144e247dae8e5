#[derive(Debug, Clone)]
pub struct RealtimeServiceConfig {
    pub url: String,

    /// Capacity of the event fan out channel. Subscribers slower
    /// than this many pending events start losing the oldest ones.
    pub buffer_size: usize,
}
