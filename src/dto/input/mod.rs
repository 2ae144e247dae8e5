mod account_verification_event;
mod notification_history_item;
mod notification_kind;
mod realtime_envelope;
mod verification_status;

pub use account_verification_event::*;
pub use notification_history_item::*;
pub use notification_kind::*;
pub use realtime_envelope::*;
pub use verification_status::*;
