use crate::dto::input;
use serde::Serialize;
use time::OffsetDateTime;

///
/// One entry of the aggregated admin notification list.
///
/// `id` is the canonical server assigned identity, unique within
/// the list. `read` only ever flips false to true.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: String,
    pub kind: input::NotificationKind,
    pub seller_id: Option<String>,
    pub verification_status: Option<input::VerificationStatus>,
    pub message: String,
    pub read: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl From<input::NotificationHistoryItem> for Notification {
    fn from(item: input::NotificationHistoryItem) -> Self {
        Self {
            id: item.id,
            kind: item.kind,
            seller_id: item.seller_id,
            verification_status: item.verification_status,
            message: item.message,
            read: item.read,
            timestamp: item.created_at,
        }
    }
}

impl From<input::AccountVerificationEvent> for Notification {
    ///
    /// Push originated records are unread and timestamped at receipt,
    /// the event itself carries no timestamp.
    ///
    fn from(event: input::AccountVerificationEvent) -> Self {
        let message = event
            .message
            .unwrap_or_else(|| format!("Account verification {}", event.status));

        Self {
            id: event.id,
            kind: input::NotificationKind::AccountVerification,
            seller_id: Some(event.seller_id),
            verification_status: Some(event.status),
            message,
            read: false,
            timestamp: OffsetDateTime::now_utc(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dto::input::{NotificationKind, VerificationStatus};

    #[test]
    fn from_event_message_defaulted_from_status() {
        let event = input::AccountVerificationEvent {
            id: "n-1".to_string(),
            seller_id: "seller-1".to_string(),
            status: VerificationStatus::Rejected,
            message: None,
        };

        let notification = Notification::from(event);

        assert_eq!(notification.message, "Account verification rejected");
        assert_eq!(notification.kind, NotificationKind::AccountVerification);
        assert!(!notification.read);
    }

    #[test]
    fn from_event_message_kept_when_present() {
        let event = input::AccountVerificationEvent {
            id: "n-1".to_string(),
            seller_id: "seller-1".to_string(),
            status: VerificationStatus::Approved,
            message: Some("Seller Foo approved".to_string()),
        };

        let notification = Notification::from(event);

        assert_eq!(notification.message, "Seller Foo approved");
    }
}
